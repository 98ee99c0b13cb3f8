//! Shortest-job-first scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Stable-sort the pool by arrival time.
//! 2. Among pool entries that have arrived by the cursor, pick the one with
//!    the smallest burst; equal bursts go to the earliest in pool order.
//! 3. If nothing has arrived, the CPU idles until the next arrival.
//! 4. The selected process runs to completion; the cursor advances by its burst.
//!
//! Idle time counts toward elapsed time but not toward any waiting time.
//!
//! # Complexity
//! O(n^2) for n processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::{debug, trace};

use super::{outcome, Scheduler};
use crate::models::{Discipline, MetricsAccumulator, Process, ScheduleRun, Timeline};

/// Non-preemptive shortest-burst scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Index of the shortest arrived job in an arrival-sorted pool.
    fn find_shortest_job(pool: &[Process], service_time: i64) -> Option<usize> {
        pool.iter()
            .take_while(|p| p.is_arrived(service_time))
            .enumerate()
            .min_by_key(|(_, p)| p.burst)
            .map(|(i, _)| i)
    }
}

impl Scheduler for SjfScheduler {
    fn discipline(&self) -> Discipline {
        Discipline::Sjf
    }

    fn schedule(&self, mut pool: Vec<Process>) -> ScheduleRun {
        pool.sort_by_key(|p| p.arrival);
        pool.iter_mut().for_each(Process::reset);

        let mut service_time: i64 = 0;
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAccumulator::new();
        let mut outcomes = Vec::with_capacity(pool.len());

        while !pool.is_empty() {
            let Some(index) = Self::find_shortest_job(&pool, service_time) else {
                // Nothing arrived; pool is sorted so the front arrives next
                let next_arrival = pool[0].arrival;
                trace!("sjf: cpu idle [{service_time}, {next_arrival})");
                service_time = next_arrival;
                continue;
            };

            let mut process = pool.remove(index);
            let start = service_time;
            let waiting = (start - process.arrival).max(0);
            let completion = start + process.burst;

            let burst = process.burst;
            process.execute(burst);
            process.completed = true;
            process.waiting = waiting;
            process.turnaround = completion - process.arrival;

            debug!(
                "sjf: pid {} (burst {}) runs [{start}, {completion})",
                process.pid, process.burst
            );
            timeline.push(process.pid, start, completion);
            let row = outcome(&process, waiting, completion);
            metrics.record(&row);
            outcomes.push(row);

            service_time = completion;
        }

        ScheduleRun {
            discipline: Discipline::Sjf,
            timeline,
            outcomes,
            metrics: metrics.finish(),
        }
    }
}
