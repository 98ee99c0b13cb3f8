//! Run metrics.
//!
//! Aggregates per-process results into the standard performance
//! indicators of a scheduling run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting | Sum of waiting times / process count |
//! | Average turnaround | Sum of (completion - arrival) / process count |
//! | Throughput | Process count / latest completion time |
//!
//! Metrics are run-scoped: one accumulator per scheduler invocation.

use serde::{Deserialize, Serialize};

use super::Pid;

/// Result row for one finished process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub pid: Pid,
    /// Priority carried from the input.
    pub priority: i64,
    /// Original burst duration.
    pub burst: i64,
    /// Arrival time.
    pub arrival: i64,
    /// Time spent ready but not running.
    pub waiting: i64,
    /// Time from arrival to completion.
    pub turnaround: i64,
    /// Completion (exit) time.
    pub completion: i64,
}

/// Running sums for one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    total_waiting: i64,
    total_turnaround: i64,
    last_completion: i64,
    count: usize,
}

/// Aggregate indicators of a scheduling run.
///
/// All three values are `0.0` for an empty run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl MetricsAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one finished process.
    pub fn record(&mut self, outcome: &ProcessOutcome) {
        self.total_waiting += outcome.waiting;
        self.total_turnaround += outcome.turnaround;
        self.last_completion = self.last_completion.max(outcome.completion);
        self.count += 1;
    }

    /// Derives the averages and throughput.
    pub fn finish(&self) -> Metrics {
        if self.count == 0 {
            return Metrics::default();
        }
        let count = self.count as f64;
        let throughput = if self.last_completion > 0 {
            count / self.last_completion as f64
        } else {
            0.0
        };
        Metrics {
            average_waiting: self.total_waiting as f64 / count,
            average_turnaround: self.total_turnaround as f64 / count,
            throughput,
        }
    }
}
