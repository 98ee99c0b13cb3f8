//! u-procsched: command-line front end for the scheduling simulator.
//!
//! Loads a process batch (or generates one), runs the configured
//! disciplines and prints the Gantt charts and schedule tables.
//!
//! # Usage
//!
//! ```bash
//! u-procsched processes.csv --quantum 4
//! u-procsched --generate 20 --seed 7 --only fcfs --only round-robin --format json
//! ```
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::{error, info};

use u_procsched::config::SimulationConfig;
use u_procsched::models::Discipline;
use u_procsched::report::{render, ReportDriver};
use u_procsched::workload::WorkloadGenerator;
use u_procsched::{loader, Result, ScheduleError};

/// Highest priority assigned to generated processes.
const GENERATED_PRIORITY_MAX: i64 = 5;

/// Simulate CPU scheduling disciplines over a process batch.
#[derive(Parser, Debug)]
#[command(name = "u-procsched")]
#[command(about = "Simulate FCFS, SJF, priority and round-robin CPU scheduling")]
struct Cli {
    /// Process file with rows `pid,burst,arrival[,priority]`.
    input: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Round-robin quantum (overrides the configuration).
    #[arg(long, short)]
    quantum: Option<i64>,

    /// Run only these disciplines (repeatable).
    #[arg(long, value_enum)]
    only: Vec<DisciplineArg>,

    /// Generate N random processes instead of reading a file.
    #[arg(long, conflicts_with = "input")]
    generate: Option<usize>,

    /// Seed for --generate.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DisciplineArg {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
}

impl From<DisciplineArg> for Discipline {
    fn from(arg: DisciplineArg) -> Self {
        match arg {
            DisciplineArg::Fcfs => Discipline::Fcfs,
            DisciplineArg::Sjf => Discipline::Sjf,
            DisciplineArg::Priority => Discipline::SjfPriority,
            DisciplineArg::RoundRobin => Discipline::RoundRobin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(quantum) = cli.quantum {
        config.quantum = quantum;
    }
    if !cli.only.is_empty() {
        config.disciplines = cli.only.iter().copied().map(Discipline::from).collect();
    }

    let processes = match (cli.generate, &cli.input) {
        (Some(count), _) => WorkloadGenerator::new(count)
            .with_max_priority(GENERATED_PRIORITY_MAX)
            .with_seed(cli.seed)
            .generate(),
        (None, Some(path)) => loader::load_path(path, config.delimiter)?,
        (None, None) => {
            return Err(ScheduleError::Config(
                "no input: pass a process file or --generate N".into(),
            ))
        }
    };

    let driver = ReportDriver::new(processes, config)?;
    info!(
        "scheduling {} processes with {:?} (quantum {})",
        driver.processes().len(),
        driver.config().disciplines,
        driver.config().quantum
    );
    let report = driver.run()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => render::render_report(&mut out, &report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
