//! resched - reschedule overdue Todoist tasks to the next weekday
//!
//! A small personal-automation utility: it fetches the user's overdue tasks
//! from the remote task service, resolves the next available weekday, and
//! either applies the new due date to every task (live mode) or renders a
//! grouped preview of what it would do (`--dry-run`).
//!
//! # Architecture
//!
//! The crate is split along a narrow seam:
//! - **Core**: `schedule` (weekday resolution) and `grouping` (bucketing and
//!   counting) are pure and independently testable.
//! - **Collaborator**: the remote service sits behind the `api::TaskApi`
//!   trait; `api::TodoistClient` is the real blocking HTTP implementation.
//! - **Output**: `report::Reporter` has an interactive (colorized console)
//!   and a batch (timestamped log) implementation, chosen once at startup.
//!
//! Each invocation is a single sequential pass from fetch to report. There are
//! no retries and no persistent state; a failing remote call aborts the run.

pub mod api;
pub mod grouping;
pub mod model;
pub mod report;
pub mod schedule;

use anyhow::Result;
use chrono::NaiveDate;

pub use api::{TaskApi, TodoistClient};
pub use grouping::{GroupedTasks, RunSummary, group_tasks};
pub use model::{Due, Project, Task};
pub use report::{BatchReporter, InteractiveReporter, Reporter};
pub use schedule::next_weekday;

/// Execute one full pass: fetch, group, then apply or preview.
///
/// # Arguments
/// * `api` - The remote task service
/// * `reporter` - Output channel, chosen by the caller at startup
/// * `today` - The current date; the target is the next weekday from here
/// * `dry_run` - When true, no update calls are issued
///
/// # Returns
/// The run summary. In live mode the first failing update aborts the run;
/// updates already applied earlier in the pass are not rolled back.
pub fn run(
    api: &dyn TaskApi,
    reporter: &mut dyn Reporter,
    today: NaiveDate,
    dry_run: bool,
) -> Result<RunSummary> {
    let target = next_weekday(today);
    let tasks = api.list_overdue_tasks()?;
    let projects = api.list_projects()?;

    let (grouped, modified) = group_tasks(&tasks);
    let summary = RunSummary {
        modified,
        unmodified: tasks.len() - modified,
        target,
    };

    if dry_run {
        reporter.preview(&grouped, &projects, &summary);
        return Ok(summary);
    }

    // Strictly in fetch order; a failing update propagates immediately.
    for task in &tasks {
        let Some(old_due) = task.due_date() else {
            continue;
        };
        if task.id.is_empty() {
            continue;
        }
        api.update_due_date(&task.id, target)?;
        reporter.rescheduled(task, old_due, target);
    }
    reporter.summary(&summary);

    Ok(summary)
}
