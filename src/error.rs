//! Error type for loading, validating and configuring scheduling runs.
//!
//! The schedulers themselves are infallible; errors arise only at the
//! edges (input parsing, configuration, caller preconditions).

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised outside the scheduling core.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Round-robin quantum was zero or negative.
    #[error("invalid quantum {0}: must be a positive integer")]
    InvalidQuantum(i64),

    /// A process row could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based input line.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// The process set failed validation.
    #[error("invalid process set: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A JSON document could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
