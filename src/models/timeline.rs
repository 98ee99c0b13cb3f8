//! Execution timeline (Gantt sequence).
//!
//! A timeline is the ordered list of intervals during which a single CPU
//! was occupied. Under non-preemptive disciplines each process owns exactly
//! one slice; preemptive disciplines may split a process across several.

use serde::{Deserialize, Serialize};

use super::Pid;

/// One uninterrupted span of execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that occupied the CPU.
    pub pid: Pid,
    /// Start time (inclusive).
    pub start: i64,
    /// Stop time (exclusive).
    pub stop: i64,
}

impl TimeSlice {
    /// Creates a new slice.
    pub fn new(pid: Pid, start: i64, stop: i64) -> Self {
        Self { pid, start, stop }
    }

    /// Burst consumed in this slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Ordered, non-overlapping sequence of [`TimeSlice`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    ///
    /// A slice that directly continues the last slice of the same process
    /// is folded into it. Empty slices are dropped.
    pub fn push(&mut self, pid: Pid, start: i64, stop: i64) {
        if stop <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            debug_assert!(last.stop <= start, "slice [{start}, {stop}) overlaps {last:?}");
            if last.pid == pid && last.stop == start {
                last.stop = stop;
                return;
            }
        }
        self.slices.push(TimeSlice::new(pid, start, stop));
    }

    /// All slices in start order.
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, pid: Pid) -> Vec<&TimeSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Total CPU time consumed by one process.
    pub fn busy_time_for(&self, pid: Pid) -> i64 {
        self.slices_for(pid).iter().map(|s| s.duration()).sum()
    }

    /// Latest stop time, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.stop).unwrap_or(0)
    }

    /// Whether slices are sorted, non-empty and never overlap.
    pub fn is_well_formed(&self) -> bool {
        self.slices.iter().all(|s| s.stop > s.start)
            && self.slices.windows(2).all(|w| w[0].stop <= w[1].start)
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_query() {
        let mut t = Timeline::new();
        t.push(1, 0, 2);
        t.push(2, 2, 4);
        t.push(1, 4, 5);

        assert_eq!(t.len(), 3);
        assert_eq!(t.slices_for(1).len(), 2);
        assert_eq!(t.busy_time_for(1), 3);
        assert_eq!(t.busy_time_for(2), 2);
        assert_eq!(t.makespan(), 5);
        assert!(t.is_well_formed());
    }

    #[test]
    fn test_contiguous_slices_merge() {
        let mut t = Timeline::new();
        t.push(3, 12, 14);
        t.push(3, 14, 16);
        assert_eq!(t.slices(), &[TimeSlice::new(3, 12, 16)]);
    }

    #[test]
    fn test_gap_does_not_merge() {
        let mut t = Timeline::new();
        t.push(1, 0, 2);
        t.push(1, 3, 4);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_empty_slice_dropped() {
        let mut t = Timeline::new();
        t.push(1, 3, 3);
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert!(t.is_well_formed());
    }

    #[test]
    fn test_serializes_as_array() {
        let mut t = Timeline::new();
        t.push(7, 0, 1);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"[{"pid":7,"start":0,"stop":1}]"#);
    }
}
