//! Simulation configuration.
//!
//! Loaded from JSON; every field has a default so a partial document (or
//! none at all) is valid.
//!
//! ```json
//! { "quantum": 4, "disciplines": ["fcfs", "round_robin"], "delimiter": ";" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::loader::DEFAULT_DELIMITER;
use crate::models::Discipline;

/// Default round-robin quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Parameters of a report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-robin time slice.
    pub quantum: i64,
    /// Disciplines to run, in report order.
    pub disciplines: Vec<Discipline>,
    /// Field delimiter of the process input.
    pub delimiter: char,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            disciplines: Discipline::ALL.to_vec(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Restricts the run to the given disciplines.
    pub fn with_disciplines(mut self, disciplines: Vec<Discipline>) -> Self {
        self.disciplines = disciplines;
        self
    }

    /// Sets the input delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.disciplines.contains(&Discipline::RoundRobin) && self.quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(self.quantum));
        }
        if self.disciplines.is_empty() {
            return Err(ScheduleError::Config("no disciplines selected".into()));
        }
        Ok(())
    }
}
