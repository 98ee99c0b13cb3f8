//! Report driver: runs every configured discipline over one batch.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Discipline, Process, ScheduleRun};
use crate::scheduler::scheduler_for;
use crate::validation::validate_processes;

/// Results of all disciplines over the same batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// The input batch, as loaded.
    pub processes: Vec<Process>,
    /// One run per discipline, in configured order.
    pub runs: Vec<ScheduleRun>,
}

impl Report {
    /// Run for a discipline, if it was configured.
    pub fn run_for(&self, discipline: Discipline) -> Option<&ScheduleRun> {
        self.runs.iter().find(|r| r.discipline == discipline)
    }
}

/// Holds a fixed batch and runs each discipline over its own copy.
///
/// # Example
///
/// ```
/// use u_procsched::config::SimulationConfig;
/// use u_procsched::models::{Discipline, Process};
/// use u_procsched::report::ReportDriver;
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let driver = ReportDriver::new(processes, SimulationConfig::default()).unwrap();
/// let report = driver.run().unwrap();
/// assert_eq!(report.runs.len(), 4);
/// assert!(report.run_for(Discipline::Sjf).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ReportDriver {
    processes: Vec<Process>,
    config: SimulationConfig,
}

impl ReportDriver {
    /// Creates a driver after validating the batch and the configuration.
    ///
    /// # Errors
    /// [`ScheduleError::Invalid`] for a malformed batch, or the configuration's
    /// own validation error.
    pub fn new(processes: Vec<Process>, config: SimulationConfig) -> Result<Self> {
        validate_processes(&processes).map_err(ScheduleError::Invalid)?;
        config.validate()?;
        Ok(Self { processes, config })
    }

    /// The batch every discipline receives a copy of.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs every configured discipline.
    pub fn run(&self) -> Result<Report> {
        let mut runs = Vec::with_capacity(self.config.disciplines.len());
        for &discipline in &self.config.disciplines {
            let scheduler = scheduler_for(discipline, self.config.quantum)?;
            let run = scheduler.schedule(self.processes.clone());
            info!(
                "{discipline}: {} processes, avg wait {:.2}, avg turnaround {:.2}, throughput {:.2}",
                run.outcomes.len(),
                run.metrics.average_waiting,
                run.metrics.average_turnaround,
                run.metrics.throughput
            );
            runs.push(run);
        }

        Ok(Report {
            processes: self.processes.clone(),
            runs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn textbook() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_runs_all_disciplines_in_order() {
        let driver = ReportDriver::new(textbook(), SimulationConfig::default()).unwrap();
        let report = driver.run().unwrap();
        let order: Vec<Discipline> = report.runs.iter().map(|r| r.discipline).collect();
        assert_eq!(order, Discipline::ALL.to_vec());
    }

    #[test]
    fn test_runs_are_independent() {
        let driver = ReportDriver::new(textbook(), SimulationConfig::default()).unwrap();
        let report = driver.run().unwrap();

        // Every run saw the full burst of every process
        for run in &report.runs {
            for p in driver.processes() {
                assert_eq!(run.timeline.busy_time_for(p.pid), p.burst);
            }
        }
        // The held batch is untouched
        assert_eq!(driver.processes(), textbook().as_slice());
        assert!(driver.processes().iter().all(|p| !p.completed));
    }

    #[test]
    fn test_selected_disciplines_only() {
        let config = SimulationConfig::new().with_disciplines(vec![Discipline::RoundRobin]);
        let report = ReportDriver::new(textbook(), config).unwrap().run().unwrap();
        assert_eq!(report.runs.len(), 1);
        assert!(report.run_for(Discipline::Fcfs).is_none());
    }

    #[test]
    fn test_rejects_invalid_batch() {
        let processes = vec![Process::new(1, 0, 5), Process::new(1, 2, 0)];
        match ReportDriver::new(processes, SimulationConfig::default()) {
            Err(ScheduleError::Invalid(errors)) => {
                let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
                assert!(kinds.contains(&ValidationErrorKind::DuplicatePid));
                assert!(kinds.contains(&ValidationErrorKind::InvalidBurst));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_invalid_quantum() {
        let config = SimulationConfig::new().with_quantum(-1);
        assert!(ReportDriver::new(textbook(), config).is_err());
    }

    #[test]
    fn test_empty_batch() {
        let report = ReportDriver::new(Vec::new(), SimulationConfig::default())
            .unwrap()
            .run()
            .unwrap();
        for run in &report.runs {
            assert!(run.timeline.is_empty());
            assert_eq!(run.metrics.average_waiting, 0.0);
            assert_eq!(run.metrics.throughput, 0.0);
        }
    }

    #[test]
    fn test_report_serializes() {
        let report = ReportDriver::new(textbook(), SimulationConfig::default())
            .unwrap()
            .run()
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["runs"][0]["discipline"], "fcfs");
        assert_eq!(json["runs"][0]["timeline"][1]["start"], 5);
        assert_eq!(json["processes"].as_array().map(|a| a.len()), Some(3));
    }
}
