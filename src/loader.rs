//! Delimited process input.
//!
//! Each row describes one process as `pid,burst,arrival[,priority]`.
//! Fields are trimmed; blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, ScheduleError};
use crate::models::Process;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Parses processes from delimited text.
///
/// # Errors
/// [`ScheduleError::Parse`] with the 1-based line number for a row with the
/// wrong number of fields or a non-integer field.
pub fn parse_processes(input: &str, delimiter: char) -> Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let row = raw.trim();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = row.split(delimiter).map(str::trim).collect();
        if !(3..=4).contains(&fields.len()) {
            return Err(ScheduleError::Parse {
                line,
                message: format!("expected 3 or 4 fields, found {}", fields.len()),
            });
        }

        let pid = parse_field(fields[0], "process ID", line)?;
        let burst = parse_field(fields[1], "burst", line)?;
        let arrival = parse_field(fields[2], "arrival", line)?;
        let priority = match fields.get(3) {
            Some(field) => parse_field(field, "priority", line)?,
            None => 0,
        };

        processes.push(Process::new(pid, arrival, burst).with_priority(priority));
    }

    debug!("loaded {} processes", processes.len());
    Ok(processes)
}

/// Reads and parses a process file.
pub fn load_path(path: impl AsRef<Path>, delimiter: char) -> Result<Vec<Process>> {
    let text = fs::read_to_string(path)?;
    parse_processes(&text, delimiter)
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str, line: usize) -> Result<T> {
    field.parse().map_err(|_| ScheduleError::Parse {
        line,
        message: format!("invalid {name} '{field}'"),
    })
}
