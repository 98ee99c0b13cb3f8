//! CPU scheduling disciplines.
//!
//! Each discipline simulates a single CPU over a fixed batch of processes
//! and produces a [`ScheduleRun`]: the Gantt timeline, per-process results
//! and aggregate metrics.
//!
//! # Disciplines
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | [`FcfsScheduler`] | no | input (arrival) order |
//! | [`SjfScheduler`] | no | shortest burst among arrived |
//! | [`SjfPriorityScheduler`] | no, selects when idle | shortest remaining burst |
//! | [`RoundRobinScheduler`] | yes, per quantum | FIFO rotation |
//!
//! # Ownership
//! [`Scheduler::schedule`] takes the process list by value. Callers that
//! run several disciplines over one batch clone it per call, so no run can
//! observe another run's mutations.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod ready_queue;
mod round_robin;
mod sjf;
mod sjf_priority;

pub use fcfs::FcfsScheduler;
pub use ready_queue::ReadyQueue;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use sjf_priority::SjfPriorityScheduler;

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{Discipline, Process, ProcessOutcome, ScheduleRun};

/// A scheduling discipline.
pub trait Scheduler: Debug {
    /// Discipline implemented by this scheduler.
    fn discipline(&self) -> Discipline;

    /// Simulates the batch to completion.
    ///
    /// The scheduler owns `processes` for the duration of the run and
    /// mutates their scheduling state freely.
    fn schedule(&self, processes: Vec<Process>) -> ScheduleRun;
}

/// Builds the scheduler for a discipline.
///
/// `quantum` is only consulted for round-robin.
pub fn scheduler_for(discipline: Discipline, quantum: i64) -> Result<Box<dyn Scheduler>> {
    Ok(match discipline {
        Discipline::Fcfs => Box::new(FcfsScheduler::new()),
        Discipline::Sjf => Box::new(SjfScheduler::new()),
        Discipline::SjfPriority => Box::new(SjfPriorityScheduler::new()),
        Discipline::RoundRobin => Box::new(RoundRobinScheduler::new(quantum)?),
    })
}

/// Result row for a process that finished at `completion` after waiting `waiting`.
fn outcome(process: &Process, waiting: i64, completion: i64) -> ProcessOutcome {
    ProcessOutcome {
        pid: process.pid,
        priority: process.priority,
        burst: process.burst,
        arrival: process.arrival,
        waiting,
        turnaround: completion - process.arrival,
        completion,
    }
}
