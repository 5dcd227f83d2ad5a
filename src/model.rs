//! Data model for the remote task service
//!
//! These types are immutable snapshots of the JSON the Todoist REST API
//! returns. Nothing here is persisted locally; each run deserializes a fresh
//! copy and discards it at exit.

use serde::Deserialize;

/// A single task as reported by the remote API.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    /// Structured due date; absent for tasks with no due date set.
    #[serde(default)]
    pub due: Option<Due>,
    /// Optional hard deadline, distinct from the due date.
    #[serde(default)]
    pub deadline: Option<Due>,
    pub project_id: String,
}

/// Due-date object nested inside a task.
///
/// The API may return a due object without a date field; such tasks are
/// treated as having no due date at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Due {
    #[serde(default)]
    pub date: Option<String>,
}

/// A project, used only to look up display names by identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl Task {
    /// The task's original due date string (YYYY-MM-DD), if it has one.
    pub fn due_date(&self) -> Option<&str> {
        self.due.as_ref().and_then(|d| d.date.as_deref())
    }

    /// The task's deadline date string, if it has one.
    pub fn deadline_date(&self) -> Option<&str> {
        self.deadline.as_ref().and_then(|d| d.date.as_deref())
    }
}
