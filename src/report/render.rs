//! Plain-text rendering of scheduling runs.
//!
//! Each run is printed as a title banner, a Gantt chart and a schedule
//! table whose footer carries the averages and throughput. Round-robin
//! runs also list processes in the order they finished.

use std::io::{self, Write};

use super::Report;
use crate::models::{Discipline, ScheduleRun, Timeline};

const GANTT_CELL_WIDTH: usize = 8;

const HEADERS: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Renders every run of a report.
pub fn render_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    for run in &report.runs {
        render_run(out, run)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Renders one run.
pub fn render_run<W: Write>(out: &mut W, run: &ScheduleRun) -> io::Result<()> {
    render_title(out, run.discipline.title())?;
    render_gantt(out, &run.timeline)?;
    render_schedule(out, run)?;
    if run.discipline == Discipline::RoundRobin {
        render_completion_log(out, run)?;
    }
    Ok(())
}

/// Title between two rules twice its width.
pub fn render_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(out, "{rule}")?;
    writeln!(out, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(out, "{rule}")
}

/// Gantt chart: one cell per slice, then start times and the final stop.
pub fn render_gantt<W: Write>(out: &mut W, timeline: &Timeline) -> io::Result<()> {
    writeln!(out, "Gantt schedule")?;
    write!(out, "|")?;
    for slice in timeline.slices() {
        let pid = slice.pid.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(out, "{padding}{pid}{padding}|")?;
    }
    writeln!(out)?;

    for slice in timeline.slices() {
        write!(out, "{}\t", slice.start)?;
    }
    if !timeline.is_empty() {
        write!(out, "{}", timeline.makespan())?;
    }
    write!(out, "\n\n")
}

/// Schedule table with averages in the footer.
pub fn render_schedule<W: Write>(out: &mut W, run: &ScheduleRun) -> io::Result<()> {
    writeln!(out, "Schedule table")?;

    let rows: Vec<Vec<String>> = run
        .outcomes_by_pid()
        .into_iter()
        .map(|o| {
            vec![
                o.pid.to_string(),
                o.priority.to_string(),
                o.burst.to_string(),
                o.arrival.to_string(),
                o.waiting.to_string(),
                o.turnaround.to_string(),
                o.completion.to_string(),
            ]
        })
        .collect();

    let m = &run.metrics;
    let footer: [Vec<String>; 2] = [
        footer_row("Average", "Average", "Throughput"),
        footer_row(
            &format!("{:.2}", m.average_waiting),
            &format!("{:.2}", m.average_turnaround),
            &format!("{:.2}/t", m.throughput),
        ),
    ];

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in rows.iter().chain(footer.iter()) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_uppercase()).collect();
    write_rule(out, &widths)?;
    write_row(out, &widths, &header)?;
    write_rule(out, &widths)?;
    for row in &rows {
        write_row(out, &widths, row)?;
    }
    write_rule(out, &widths)?;
    for row in &footer {
        write_row(out, &widths, row)?;
    }
    write_rule(out, &widths)
}

/// Round-robin completion log, in finish order.
pub fn render_completion_log<W: Write>(out: &mut W, run: &ScheduleRun) -> io::Result<()> {
    writeln!(out)?;
    for o in &run.outcomes {
        writeln!(
            out,
            "Process {} finished at time {} (turnaround time {}, waiting time {})",
            o.pid, o.completion, o.turnaround, o.waiting
        )?;
    }
    Ok(())
}

fn footer_row(wait: &str, turnaround: &str, throughput: &str) -> Vec<String> {
    let mut row = vec![String::new(); 4];
    row.extend([wait.to_string(), turnaround.to_string(), throughput.to_string()]);
    row
}

fn write_rule<W: Write>(out: &mut W, widths: &[usize]) -> io::Result<()> {
    write!(out, "+")?;
    for w in widths {
        write!(out, "{}+", "-".repeat(w + 2))?;
    }
    writeln!(out)
}

fn write_row<W: Write>(out: &mut W, widths: &[usize], cells: &[String]) -> io::Result<()> {
    write!(out, "|")?;
    for (&w, cell) in widths.iter().zip(cells) {
        write!(out, " {cell:<w$} |")?;
    }
    writeln!(out)
}
