//! Run output: colorized console lines or timestamped log lines
//!
//! The reporter is picked once at startup based on whether stdout is attached
//! to a terminal. Interactive runs get colorized console output; scheduled
//! runs get structured log lines through `tracing`.

use std::collections::HashMap;

use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::grouping::{GroupedTasks, RunSummary};
use crate::model::{Project, Task};

/// Long human-readable date, e.g. "Monday, June 3, 2024".
const LONG_DATE: &str = "%A, %B %-d, %Y";

/// Output channel for a single run.
pub trait Reporter {
    /// Emit one line for a task that was just rescheduled. Called immediately
    /// after each successful update in live mode, never in dry-run.
    fn rescheduled(&mut self, task: &Task, old_due: &str, new_due: NaiveDate);

    /// Render the dry-run result. Called once, after all tasks were scanned.
    fn preview(&mut self, grouped: &GroupedTasks, projects: &[Project], summary: &RunSummary);

    /// Emit the closing summary of a live run.
    fn summary(&mut self, summary: &RunSummary);
}

/// Reporter for runs with an attached terminal.
pub struct InteractiveReporter;

impl Reporter for InteractiveReporter {
    fn rescheduled(&mut self, task: &Task, old_due: &str, new_due: NaiveDate) {
        println!(
            "{} {} {} {} -> {}",
            "Rescheduled".green().bold(),
            task.content,
            format!("[{}]", task.id).dimmed(),
            old_due,
            new_due.format("%Y-%m-%d"),
        );
    }

    fn preview(&mut self, grouped: &GroupedTasks, projects: &[Project], summary: &RunSummary) {
        if grouped.is_empty() {
            println!("No overdue tasks to reschedule.");
            return;
        }

        let names: HashMap<&str, &str> = projects
            .iter()
            .map(|p| (p.id.as_str(), p.name.as_str()))
            .collect();

        for (project_id, dates) in grouped.iter() {
            // Fall back to the raw id for tasks in unknown projects
            let name = names.get(project_id).copied().unwrap_or(project_id);
            println!("{}", name.bright_blue().bold());
            for (due, tasks) in dates {
                println!("  {}", due.yellow());
                for task in tasks {
                    match &task.deadline {
                        Some(deadline) => println!(
                            "    - {} {}",
                            task.content,
                            format!("(deadline: {deadline})").dimmed()
                        ),
                        None => println!("    - {}", task.content),
                    }
                }
            }
            println!();
        }

        println!("{}", "Summary".bright_cyan().bold());
        println!("  Would reschedule: {}", summary.modified);
        println!("  Left untouched:   {}", summary.unmodified);
        println!("  New due date:     {}", summary.target.format(LONG_DATE));
    }

    fn summary(&mut self, summary: &RunSummary) {
        println!(
            "{} {} task(s) rescheduled to {}, {} left untouched",
            "Done:".green().bold(),
            summary.modified,
            summary.target.format(LONG_DATE),
            summary.unmodified,
        );
    }
}

/// Reporter for non-interactive runs (e.g. under cron). Every line goes
/// through `tracing`, so output is timestamped by the subscriber.
pub struct BatchReporter;

impl Reporter for BatchReporter {
    fn rescheduled(&mut self, task: &Task, old_due: &str, new_due: NaiveDate) {
        tracing::info!(
            task_id = %task.id,
            content = %task.content,
            old_due,
            new_due = %new_due.format("%Y-%m-%d"),
            "rescheduled task"
        );
    }

    fn preview(&mut self, _grouped: &GroupedTasks, _projects: &[Project], _summary: &RunSummary) {
        // The grouped view is for humans; a scheduler log only needs to know
        // the run was a no-op.
        tracing::info!("dry-run: preview output suppressed in non-interactive mode");
    }

    fn summary(&mut self, summary: &RunSummary) {
        tracing::info!(
            modified = summary.modified,
            unmodified = summary.unmodified,
            target = %summary.target,
            "run complete"
        );
    }
}
