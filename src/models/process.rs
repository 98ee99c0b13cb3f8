//! Process model.
//!
//! A process is one unit of CPU work in a scheduling batch: an immutable
//! description (identity, arrival, burst, priority) plus the mutable state
//! a scheduler derives while simulating it.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier. Positive and unique within one scheduling run.
pub type Pid = u64;

/// A process to be scheduled.
///
/// Schedulers receive their own owned copy of the batch and mutate
/// `remaining`, `completed`, `waiting` and `turnaround` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub pid: Pid,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time the process requires.
    pub burst: i64,
    /// Priority value (0 when not supplied).
    #[serde(default)]
    pub priority: i64,
    /// CPU time still owed to the process.
    #[serde(skip)]
    pub remaining: i64,
    /// Whether the process has finished.
    #[serde(skip)]
    pub completed: bool,
    /// Accumulated waiting time.
    #[serde(skip)]
    pub waiting: i64,
    /// Turnaround time, set on completion.
    #[serde(skip)]
    pub turnaround: i64,
}

impl Process {
    /// Creates a process with no priority.
    pub fn new(pid: Pid, arrival: i64, burst: i64) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
            remaining: burst,
            completed: false,
            waiting: 0,
            turnaround: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn is_arrived(&self, now: i64) -> bool {
        self.arrival <= now
    }

    /// Restores the scheduling state from the immutable inputs.
    ///
    /// Deserialized processes carry zeroed state; schedulers call this on
    /// entry so that `remaining` always starts at `burst`.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.completed = false;
        self.waiting = 0;
        self.turnaround = 0;
    }

    /// Consumes up to `amount` units of remaining burst and returns the
    /// amount actually executed.
    pub fn execute(&mut self, amount: i64) -> i64 {
        let executed = amount.min(self.remaining);
        self.remaining -= executed;
        executed
    }
}
