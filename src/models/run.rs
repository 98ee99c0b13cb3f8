//! Scheduling run results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Metrics, Pid, ProcessOutcome, Timeline};

/// A scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// First-come, first-serve.
    Fcfs,
    /// Shortest-job-first, non-preemptive.
    Sjf,
    /// Shortest-remaining-time with priority offset, selected when the CPU is free.
    SjfPriority,
    /// Round-robin with a fixed quantum.
    RoundRobin,
}

impl Discipline {
    /// All disciplines, in report order.
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::SjfPriority,
        Discipline::RoundRobin,
    ];

    /// Human-readable report title.
    pub fn title(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First-come, first-serve",
            Discipline::Sjf => "Shortest-job-first",
            Discipline::SjfPriority => "Priority",
            Discipline::RoundRobin => "Round-robin",
        }
    }

    /// Whether the discipline can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Discipline::RoundRobin)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Output of one scheduler invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRun {
    /// Discipline that produced this run.
    pub discipline: Discipline,
    /// Execution intervals in start order.
    pub timeline: Timeline,
    /// Per-process results in completion order.
    pub outcomes: Vec<ProcessOutcome>,
    /// Aggregate indicators.
    pub metrics: Metrics,
}

impl ScheduleRun {
    /// Result row for one process.
    pub fn outcome_for(&self, pid: Pid) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.pid == pid)
    }

    /// Result rows sorted by process identifier.
    pub fn outcomes_by_pid(&self) -> Vec<&ProcessOutcome> {
        let mut rows: Vec<&ProcessOutcome> = self.outcomes.iter().collect();
        rows.sort_by_key(|o| o.pid);
        rows
    }

    /// Process identifiers in the order they finished.
    pub fn finish_order(&self) -> Vec<Pid> {
        self.outcomes.iter().map(|o| o.pid).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discipline_titles() {
        assert_eq!(Discipline::Fcfs.to_string(), "First-come, first-serve");
        assert_eq!(Discipline::RoundRobin.title(), "Round-robin");
        assert!(Discipline::RoundRobin.is_preemptive());
        assert!(!Discipline::SjfPriority.is_preemptive());
        assert!(!Discipline::Sjf.is_preemptive());
    }

    #[test]
    fn test_discipline_serde_names() {
        let json = serde_json::to_string(&Discipline::SjfPriority).unwrap();
        assert_eq!(json, "\"sjf_priority\"");
        let d: Discipline = serde_json::from_str("\"round_robin\"").unwrap();
        assert_eq!(d, Discipline::RoundRobin);
    }

    #[test]
    fn test_outcome_queries() {
        let row = |pid, completion| ProcessOutcome {
            pid,
            priority: 0,
            burst: 1,
            arrival: 0,
            waiting: completion - 1,
            turnaround: completion,
            completion,
        };
        let run = ScheduleRun {
            discipline: Discipline::RoundRobin,
            timeline: Timeline::new(),
            outcomes: vec![row(2, 1), row(1, 2)],
            metrics: Metrics::default(),
        };
        assert_eq!(run.finish_order(), vec![2, 1]);
        assert_eq!(run.outcomes_by_pid()[0].pid, 1);
        assert_eq!(run.outcome_for(2).map(|o| o.completion), Some(1));
        assert!(run.outcome_for(9).is_none());
    }
}
