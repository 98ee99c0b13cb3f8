//! Round-robin scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort the input by arrival; it becomes the pending list.
//! 2. Admit every pending process with `arrival <= now` to the back of the
//!    ready queue, crediting the time it already spent waiting since arrival.
//! 3. If the ready queue is empty, the CPU idles until the next arrival.
//! 4. Otherwise the front process runs for `min(remaining, quantum)`; every
//!    other queued process accrues that time as waiting.
//! 5. Arrivals during the slice are admitted before the preempted process
//!    returns to the back of the queue. A finished process leaves for good.
//!
//! Waiting time is exactly the time a process spent in the ready queue, so
//! `turnaround = waiting + burst` holds for every process.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};

use super::{outcome, ReadyQueue, Scheduler};
use crate::error::{Result, ScheduleError};
use crate::models::{Discipline, MetricsAccumulator, Process, ScheduleRun, Timeline};

/// Fixed-quantum rotation scheduler.
///
/// # Example
///
/// ```
/// use u_procsched::models::Process;
/// use u_procsched::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let rr = RoundRobinScheduler::new(2).unwrap();
/// let run = rr.schedule(vec![Process::new(1, 0, 3), Process::new(2, 0, 2)]);
/// assert_eq!(run.finish_order(), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time-slice quantum.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidQuantum`] if `quantum` is not positive.
    pub fn new(quantum: i64) -> Result<Self> {
        if quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// Configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    fn admit_arrivals(pending: &mut VecDeque<Process>, queue: &mut ReadyQueue, now: i64) {
        while pending.front().is_some_and(|p| p.is_arrived(now)) {
            if let Some(mut process) = pending.pop_front() {
                process.waiting = now - process.arrival;
                trace!("rr: t={now} pid {} enters ready queue", process.pid);
                queue.enqueue(process);
            }
        }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn discipline(&self) -> Discipline {
        Discipline::RoundRobin
    }

    fn schedule(&self, mut processes: Vec<Process>) -> ScheduleRun {
        processes.sort_by_key(|p| p.arrival);
        processes.iter_mut().for_each(Process::reset);

        let mut outcomes = Vec::with_capacity(processes.len());
        let mut pending: VecDeque<Process> = processes.into();
        let mut queue = ReadyQueue::new(self.quantum);
        let mut timeline = Timeline::new();
        let mut metrics = MetricsAccumulator::new();
        let mut now: i64 = 0;

        loop {
            Self::admit_arrivals(&mut pending, &mut queue, now);

            let Some(mut current) = queue.dequeue() else {
                match pending.front() {
                    Some(next) => {
                        trace!("rr: cpu idle [{now}, {})", next.arrival);
                        now = next.arrival;
                        continue;
                    }
                    None => break,
                }
            };

            trace!(
                "rr: t={now} pid {} on cpu, {} ready {:?}",
                current.pid,
                queue.len(),
                queue.pids()
            );
            let slice = queue.slice_for(&current);
            let executed = current.execute(slice);
            timeline.push(current.pid, now, now + executed);
            now += executed;
            queue.accrue_waiting(executed);
            Self::admit_arrivals(&mut pending, &mut queue, now);

            if current.remaining == 0 {
                current.completed = true;
                current.turnaround = now - current.arrival;
                debug_assert_eq!(current.turnaround, current.waiting + current.burst);
                debug!(
                    "rr: pid {} finished at time {now} (turnaround time {}, waiting time {})",
                    current.pid, current.turnaround, current.waiting
                );

                let row = outcome(&current, current.waiting, now);
                metrics.record(&row);
                outcomes.push(row);
            } else {
                queue.requeue(current);
            }
        }

        ScheduleRun {
            discipline: Discipline::RoundRobin,
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
    use crate::scheduler::FcfsScheduler;

    #[test]
    fn test_rr_rejects_non_positive_quantum() {
        assert!(matches!(
            RoundRobinScheduler::new(0),
            Err(ScheduleError::InvalidQuantum(0))
        ));
        assert!(RoundRobinScheduler::new(-3).is_err());
        assert_eq!(RoundRobinScheduler::new(5).unwrap().quantum(), 5);
    }

    #[test]
    fn test_rr_textbook_quantum_2() {
        let run = RoundRobinScheduler::new(2).unwrap().schedule(textbook());

        assert_eq!(
            run.timeline.slices(),
            &[
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 2, 4),
                TimeSlice::new(3, 4, 6),
                TimeSlice::new(1, 6, 8),
                TimeSlice::new(2, 8, 9),
                TimeSlice::new(3, 9, 11),
                TimeSlice::new(1, 11, 12),
                TimeSlice::new(3, 12, 16),
            ]
        );
        assert_eq!(run.finish_order(), vec![2, 1, 3]);

        let p1 = run.outcome_for(1).unwrap();
        let p2 = run.outcome_for(2).unwrap();
        let p3 = run.outcome_for(3).unwrap();
        assert_eq!((p1.completion, p1.waiting), (12, 7));
        assert_eq!((p2.completion, p2.waiting), (9, 5));
        assert_eq!((p3.completion, p3.waiting), (16, 6));

        assert!((run.metrics.average_waiting - 6.0).abs() < 1e-10);
        assert!((run.metrics.average_turnaround - 34.0 / 3.0).abs() < 1e-10);
        assert!((run.metrics.throughput - 3.0 / 16.0).abs() < 1e-10);
        assert_consistent(&run, &textbook());
    }

    #[test]
    fn test_rr_waiting_matches_ready_time() {
        let run = RoundRobinScheduler::new(2).unwrap().schedule(textbook());
        for o in &run.outcomes {
            // Time in system minus time on CPU is time spent ready
            let on_cpu = run.timeline.busy_time_for(o.pid);
            assert_eq!(o.waiting, o.turnaround - on_cpu);
            assert_eq!(o.turnaround, o.waiting + o.burst);
        }
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs_order() {
        let input = textbook();
        let rr = RoundRobinScheduler::new(100).unwrap().schedule(input.clone());
        let fcfs = FcfsScheduler::new().schedule(input);
        assert_eq!(rr.finish_order(), fcfs.finish_order());
        assert_eq!(rr.timeline, fcfs.timeline);
    }

    #[test]
    fn test_rr_idle_until_arrival() {
        let input = vec![Process::new(1, 0, 1), Process::new(2, 5, 3)];
        let run = RoundRobinScheduler::new(2).unwrap().schedule(input.clone());
        assert_eq!(
            run.timeline.slices(),
            &[TimeSlice::new(1, 0, 1), TimeSlice::new(2, 5, 8)]
        );
        assert!(run.outcomes.iter().all(|o| o.waiting == 0));
        assert_consistent(&run, &input);
    }

    #[test]
    fn test_rr_sorts_unordered_input() {
        let input = vec![Process::new(2, 1, 1), Process::new(1, 0, 1)];
        let run = RoundRobinScheduler::new(1).unwrap().schedule(input);
        assert_eq!(run.finish_order(), vec![1, 2]);
    }

    #[test]
    fn test_rr_empty() {
        let run = RoundRobinScheduler::new(3).unwrap().schedule(Vec::new());
        assert!(run.timeline.is_empty());
        assert!(run.outcomes.is_empty());
        assert_eq!(run.metrics.throughput, 0.0);
    }
}
