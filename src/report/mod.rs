//! Report generation.
//!
//! [`ReportDriver`] runs each configured discipline over its own copy of a
//! fixed batch; [`render`] turns the resulting [`Report`] into the
//! plain-text Gantt charts and schedule tables.

mod driver;
pub mod render;

pub use driver::{Report, ReportDriver};
