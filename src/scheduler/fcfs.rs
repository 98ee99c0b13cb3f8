//! First-come, first-serve scheduler.
//!
//! # Algorithm
//!
//! 1. Walk processes in the order given (the caller presents them in
//!    arrival order, ties already broken).
//! 2. Each process starts at `max(service cursor, arrival)` and runs to
//!    completion.
//! 3. Waiting time = start - arrival; the cursor advances to completion.
//!
//! # Complexity
//! O(n).

use log::{debug, trace};

use super::{outcome, Scheduler};
use crate::models::{Discipline, MetricsAccumulator, Process, ScheduleRun, Timeline};

/// Non-preemptive arrival-order scheduler.
///
/// # Example
///
/// ```
/// use u_procsched::models::Process;
/// use u_procsched::scheduler::{FcfsScheduler, Scheduler};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let run = FcfsScheduler::new().schedule(processes);
/// assert_eq!(run.outcome_for(2).unwrap().waiting, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FcfsScheduler {
    fn discipline(&self) -> Discipline {
        Discipline::Fcfs
    }

    fn schedule(&self, mut processes: Vec<Process>) -> ScheduleRun {
        let mut service_time: i64 = 0;
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAccumulator::new();
        let mut outcomes = Vec::with_capacity(processes.len());

        for process in &mut processes {
            process.reset();

            let start = service_time.max(process.arrival);
            if start > service_time {
                trace!("fcfs: cpu idle [{service_time}, {start})");
            }
            let waiting = start - process.arrival;
            let completion = start + process.burst;

            let burst = process.burst;
            process.execute(burst);
            process.completed = true;
            process.waiting = waiting;
            process.turnaround = completion - process.arrival;

            debug!(
                "fcfs: pid {} runs [{start}, {completion}) after waiting {waiting}",
                process.pid
            );
            timeline.push(process.pid, start, completion);
            let row = outcome(process, waiting, completion);
            metrics.record(&row);
            outcomes.push(row);

            service_time = completion;
        }

        ScheduleRun {
            discipline: Discipline::Fcfs,
            timeline,
            outcomes,
            metrics: metrics.finish(),
        }
    }
}
