//! CPU process scheduling simulator.
//!
//! Simulates a single CPU over a fixed, fully known batch of processes and
//! computes, for each classical discipline, the execution timeline (Gantt
//! sequence) and the per-process and aggregate performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `TimeSlice`, `Timeline`,
//!   `ProcessOutcome`, `Metrics`, `ScheduleRun`
//! - **`scheduler`**: FCFS, SJF, SJF-priority (shortest remaining time) and
//!   round-robin disciplines behind the `Scheduler` trait
//! - **`report`**: Multi-discipline driver and plain-text rendering
//! - **`loader`**: Delimited process input
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, arrivals)
//! - **`workload`**: Seeded synthetic process batches
//! - **`config`**: Simulation parameters (quantum, disciplines, delimiter)
//!
//! # Example
//!
//! ```
//! use u_procsched::models::Process;
//! use u_procsched::scheduler::{Scheduler, SjfScheduler};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! let run = SjfScheduler::new().schedule(processes);
//! assert_eq!(run.outcome_for(3).unwrap().completion, 16);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, ScheduleError};
