//! Round-robin ready queue.

use std::collections::VecDeque;

use crate::models::{Pid, Process};

/// FIFO of processes eligible to run, with the rotation quantum.
///
/// A process is queued at most once. The running process is held outside
/// the queue between [`dequeue`](Self::dequeue) and [`requeue`](Self::requeue).
#[derive(Debug, Clone)]
pub struct ReadyQueue {
    entries: VecDeque<Process>,
    quantum: i64,
}

impl ReadyQueue {
    /// Creates an empty queue. `quantum` must be positive.
    pub fn new(quantum: i64) -> Self {
        debug_assert!(quantum > 0, "quantum must be positive");
        Self {
            entries: VecDeque::new(),
            quantum,
        }
    }

    /// Maximum CPU time granted per turn.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Admits a newly arrived process at the back.
    pub fn enqueue(&mut self, process: Process) {
        debug_assert!(!process.completed, "pid {} already finished", process.pid);
        debug_assert!(!self.contains(process.pid), "pid {} queued twice", process.pid);
        self.entries.push_back(process);
    }

    /// Takes the process at the front.
    pub fn dequeue(&mut self) -> Option<Process> {
        self.entries.pop_front()
    }

    /// Returns a process whose quantum expired to the back.
    pub fn requeue(&mut self, process: Process) {
        self.enqueue(process);
    }

    /// Charges `elapsed` waiting time to every queued process.
    pub fn accrue_waiting(&mut self, elapsed: i64) {
        for process in &mut self.entries {
            process.waiting += elapsed;
        }
    }

    /// CPU time the given process receives on its next turn.
    pub fn slice_for(&self, process: &Process) -> i64 {
        process.remaining.min(self.quantum)
    }

    /// Whether a process is queued.
    pub fn contains(&self, pid: Pid) -> bool {
        self.entries.iter().any(|p| p.pid == pid)
    }

    /// Queued process identifiers, front first.
    pub fn pids(&self) -> Vec<Pid> {
        self.entries.iter().map(|p| p.pid).collect()
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
