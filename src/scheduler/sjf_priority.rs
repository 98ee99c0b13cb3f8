//! Shortest-remaining-time scheduler with priority offset.
//!
//! # Algorithm
//!
//! Simulated time advances in unit ticks. At every tick:
//!
//! 1. Collect every arrived, unfinished process into the ready set.
//! 2. Order the ready set by remaining burst (ascending, stable).
//! 3. If the CPU is free, the front of the ready set takes it. A running
//!    process is never displaced; the slot clears only on completion.
//! 4. The running process consumes one unit. On reaching zero it is
//!    completed with `turnaround = (tick + 1) - arrival` and
//!    `waiting = turnaround - priority`.
//!
//! Since the running process holds the CPU until it finishes, its ticks are
//! taken in one step, and ticks with an empty ready set jump to the next
//! arrival. The process chosen at every tick is the same as in the
//! unit-by-unit loop.
//!
//! Priority is a fixed offset in the waiting-time formula, not a selection
//! key. Selection is by remaining burst only.
//!
//! # Complexity
//! O(n^2) for n processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::{debug, trace};

use super::{outcome, Scheduler};
use crate::models::{Discipline, MetricsAccumulator, Process, ScheduleRun, Timeline};

/// Tick-based shortest-remaining-time scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfPriorityScheduler;

impl SjfPriorityScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Front of the ready set at `now`: shortest remaining burst, first in
    /// input order on ties.
    fn select(processes: &[Process], now: i64) -> Option<usize> {
        processes
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.completed && p.is_arrived(now))
            .min_by_key(|(_, p)| p.remaining)
            .map(|(i, _)| i)
    }

    /// Earliest arrival among unfinished processes.
    fn next_arrival(processes: &[Process]) -> Option<i64> {
        processes
            .iter()
            .filter(|p| !p.completed)
            .map(|p| p.arrival)
            .min()
    }
}

impl Scheduler for SjfPriorityScheduler {
    fn discipline(&self) -> Discipline {
        Discipline::SjfPriority
    }

    fn schedule(&self, mut processes: Vec<Process>) -> ScheduleRun {
        processes.iter_mut().for_each(Process::reset);

        let total = processes.len();
        let mut completed = 0;
        let mut now: i64 = 0;
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAccumulator::new();
        let mut outcomes = Vec::with_capacity(total);

        while completed < total {
            let Some(index) = Self::select(&processes, now) else {
                let Some(next) = Self::next_arrival(&processes) else {
                    break;
                };
                trace!("priority: cpu idle [{now}, {next})");
                now = next;
                continue;
            };

            let process = &mut processes[index];
            let start = now;
            let remaining = process.remaining;
            now += process.execute(remaining);
            timeline.push(process.pid, start, now);

            process.completed = true;
            process.turnaround = now - process.arrival;
            process.waiting = process.turnaround - process.priority;
            debug!(
                "priority: pid {} runs [{start}, {now}) (turnaround {}, waiting {})",
                process.pid, process.turnaround, process.waiting
            );

            let row = outcome(process, process.waiting, now);
            metrics.record(&row);
            outcomes.push(row);
            completed += 1;
        }

        ScheduleRun {
            discipline: Discipline::SjfPriority,
            timeline,
            outcomes,
            metrics: metrics.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlice;
    use crate::scheduler::testing::{assert_consistent, textbook};

    #[test]
    fn test_priority_textbook() {
        let run = SjfPriorityScheduler::new().schedule(textbook());

        // P1 is alone at t=0 and keeps the CPU; P2 (3) then beats P3 (8)
        assert_eq!(
            run.timeline.slices(),
            &[
                TimeSlice::new(1, 0, 5),
                TimeSlice::new(2, 5, 8),
                TimeSlice::new(3, 8, 16),
            ]
        );
        assert_eq!(run.finish_order(), vec![1, 2, 3]);
        assert_eq!(run.outcome_for(1).unwrap().turnaround, 5);
        assert_eq!(run.outcome_for(2).unwrap().turnaround, 7);
        assert_eq!(run.outcome_for(3).unwrap().turnaround, 14);
        assert_consistent(&run, &textbook());
        assert!((run.metrics.average_turnaround - 26.0 / 3.0).abs() < 1e-10);
        assert!((run.metrics.throughput - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_priority_is_waiting_offset() {
        let input = vec![
            Process::new(1, 0, 2).with_priority(1),
            Process::new(2, 0, 4).with_priority(3),
        ];
        let run = SjfPriorityScheduler::new().schedule(input);

        let p1 = run.outcome_for(1).unwrap();
        let p2 = run.outcome_for(2).unwrap();
        assert_eq!(p1.turnaround, 2);
        assert_eq!(p1.waiting, 1); // 2 - priority 1
        assert_eq!(p2.turnaround, 6);
        assert_eq!(p2.waiting, 3); // 6 - priority 3
        assert!((run.metrics.average_waiting - 2.0).abs() < 1e-10);
        assert!((run.metrics.average_turnaround - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_priority_does_not_affect_selection() {
        let input = vec![
            Process::new(1, 0, 5).with_priority(-100),
            Process::new(2, 0, 2).with_priority(100),
        ];
        let run = SjfPriorityScheduler::new().schedule(input);
        assert_eq!(run.finish_order(), vec![2, 1]);
    }

    #[test]
    fn test_shorter_arrival_waits_for_running_process() {
        // P2 arrives at t=1 with 1 unit against P1's 4 left: no switch
        let input = vec![Process::new(1, 0, 5), Process::new(2, 1, 1)];
        let run = SjfPriorityScheduler::new().schedule(input.clone());
        assert_eq!(
            run.timeline.slices(),
            &[TimeSlice::new(1, 0, 5), TimeSlice::new(2, 5, 6)]
        );
        assert_eq!(run.outcome_for(2).unwrap().turnaround, 5);
        assert_consistent(&run, &input);
    }

    #[test]
    fn test_equal_remaining_keeps_input_order() {
        let input = vec![
            Process::new(1, 0, 1),
            Process::new(3, 1, 2),
            Process::new(2, 1, 2),
        ];
        let run = SjfPriorityScheduler::new().schedule(input);
        assert_eq!(run.finish_order(), vec![1, 3, 2]);
    }

    #[test]
    fn test_long_idle_gap_jumps_ahead() {
        let input = vec![Process::new(1, 0, 1), Process::new(2, 300_000_000, 1)];
        let run = SjfPriorityScheduler::new().schedule(input.clone());
        let completions: Vec<i64> = run.outcomes.iter().map(|o| o.completion).collect();
        assert_eq!(completions, vec![1, 300_000_001]);
        assert_eq!(
            run.timeline.slices(),
            &[
                TimeSlice::new(1, 0, 1),
                TimeSlice::new(2, 300_000_000, 300_000_001),
            ]
        );
        assert_consistent(&run, &input);
    }

    #[test]
    fn test_priority_idles_until_arrival() {
        let input = vec![Process::new(1, 3, 2)];
        let run = SjfPriorityScheduler::new().schedule(input.clone());
        assert_eq!(run.timeline.slices(), &[TimeSlice::new(1, 3, 5)]);
        assert_eq!(run.outcome_for(1).unwrap().turnaround, 2);
        assert!((run.metrics.throughput - 0.2).abs() < 1e-10);
        assert_consistent(&run, &input);
    }

    #[test]
    fn test_priority_empty() {
        let run = SjfPriorityScheduler::new().schedule(Vec::new());
        assert!(run.timeline.is_empty());
        assert!(run.outcomes.is_empty());
        assert_eq!(run.metrics.average_turnaround, 0.0);
    }
}
