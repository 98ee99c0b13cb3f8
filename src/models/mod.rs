//! Process scheduling domain models.
//!
//! Provides the data types shared by every scheduling discipline:
//! the input process records, the execution timeline they produce, and
//! the metrics derived from finished processes.
//!
//! # Domain Mappings
//!
//! | u-procsched | Textbook term |
//! |-------------|---------------|
//! | Process | Process control block (arrival, burst, priority) |
//! | TimeSlice | Gantt chart cell |
//! | Timeline | Gantt chart |
//! | ProcessOutcome | Schedule table row |
//! | Metrics | Average waiting / turnaround, throughput |

mod metrics;
mod process;
mod run;
mod timeline;

pub use metrics::{Metrics, MetricsAccumulator, ProcessOutcome};
pub use process::{Pid, Process};
pub use run::{Discipline, ScheduleRun};
pub use timeline::{TimeSlice, Timeline};
