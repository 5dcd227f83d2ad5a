//! Common test utilities for integration tests

use std::cell::RefCell;

use anyhow::{Result, bail};
use chrono::NaiveDate;

use resched::api::TaskApi;
use resched::grouping::{GroupedTasks, RunSummary};
use resched::model::{Due, Project, Task};
use resched::report::Reporter;

/// In-memory TaskApi that records every update call.
pub struct MockApi {
    tasks: Vec<Task>,
    projects: Vec<Project>,
    /// Task id whose update call fails, to exercise fail-fast behavior
    fail_on: Option<String>,
    pub updates: RefCell<Vec<(String, NaiveDate)>>,
}

impl MockApi {
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        Self {
            tasks,
            projects,
            fail_on: None,
            updates: RefCell::new(Vec::new()),
        }
    }

    /// Make the update call for the given task id return an error.
    pub fn failing_on(mut self, task_id: &str) -> Self {
        self.fail_on = Some(task_id.to_string());
        self
    }
}

impl TaskApi for MockApi {
    fn list_overdue_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn update_due_date(&self, task_id: &str, date: NaiveDate) -> Result<()> {
        if self.fail_on.as_deref() == Some(task_id) {
            bail!("POST tasks/{task_id} returned 500 Internal Server Error");
        }
        self.updates.borrow_mut().push((task_id.to_string(), date));
        Ok(())
    }
}

/// Reporter that records what was emitted instead of printing.
#[derive(Default)]
pub struct RecordingReporter {
    /// Ids of tasks reported as rescheduled, in emission order
    pub rescheduled: Vec<String>,
    pub previews: usize,
    pub summaries: usize,
}

impl Reporter for RecordingReporter {
    fn rescheduled(&mut self, task: &Task, _old_due: &str, _new_due: NaiveDate) {
        self.rescheduled.push(task.id.clone());
    }

    fn preview(&mut self, _grouped: &GroupedTasks, _projects: &[Project], _summary: &RunSummary) {
        self.previews += 1;
    }

    fn summary(&mut self, _summary: &RunSummary) {
        self.summaries += 1;
    }
}

/// Create a test task with an optional due date
pub fn task(id: &str, content: &str, due: Option<&str>, project_id: &str) -> Task {
    Task {
        id: id.to_string(),
        content: content.to_string(),
        due: due.map(|d| Due {
            date: Some(d.to_string()),
        }),
        deadline: None,
        project_id: project_id.to_string(),
    }
}

/// Create a test project
pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// A Wednesday, so the resolved target equals the input date.
pub fn midweek() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
}
