//! Grouping and summarizing of overdue tasks
//!
//! Tasks are bucketed by project and original due date for presentation.
//! The structure is rebuilt from scratch on every run and discarded at exit.

use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use chrono::NaiveDate;

use crate::model::Task;

/// One task entry inside a due-date bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedTask {
    pub id: String,
    pub content: String,
    /// Deadline date string, kept for the dry-run preview annotation.
    pub deadline: Option<String>,
}

/// Overdue tasks bucketed by project id, then by original due-date string.
///
/// Iteration order is the presentation order: projects in fetch order,
/// due dates in ascending lexicographic order (chronological for ISO dates),
/// tasks in fetch order within each bucket.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GroupedTasks {
    buckets: HashMap<String, BTreeMap<String, Vec<GroupedTask>>>,
    project_order: Vec<String>,
}

impl GroupedTasks {
    fn insert(&mut self, task: &Task, due: &str) {
        let bucket = match self.buckets.entry(task.project_id.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.project_order.push(task.project_id.clone());
                entry.insert(BTreeMap::new())
            }
        };
        bucket.entry(due.to_string()).or_default().push(GroupedTask {
            id: task.id.clone(),
            content: task.content.clone(),
            deadline: task.deadline_date().map(str::to_string),
        });
    }

    /// Iterate projects in fetch order with their due-date buckets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, Vec<GroupedTask>>)> {
        self.project_order
            .iter()
            .map(|id| (id.as_str(), &self.buckets[id]))
    }

    pub fn is_empty(&self) -> bool {
        self.project_order.is_empty()
    }

    /// Total number of tasks placed into buckets.
    pub fn task_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(|dates| dates.values())
            .map(|tasks| tasks.len())
            .sum()
    }
}

/// Counts for the final summary, plus the resolved target due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Tasks rescheduled (live mode) or that would be rescheduled (dry-run).
    pub modified: usize,
    /// Tasks fetched but left untouched.
    pub unmodified: usize,
    pub target: NaiveDate,
}

/// Group overdue tasks by project and original due date.
///
/// # Arguments
/// * `tasks` - The full list of fetched overdue tasks, in fetch order
///
/// # Returns
/// The grouping plus the count of tasks that would be modified.
///
/// # Description
/// Tasks without a due date are skipped entirely: not grouped, not counted,
/// never sent an update. The modified count covers every grouped task with a
/// non-empty identifier, identically in dry-run and live mode.
pub fn group_tasks(tasks: &[Task]) -> (GroupedTasks, usize) {
    let mut grouped = GroupedTasks::default();
    let mut modified = 0;

    for task in tasks {
        let Some(due) = task.due_date() else {
            continue;
        };
        grouped.insert(task, due);
        if !task.id.is_empty() {
            modified += 1;
        }
    }

    (grouped, modified)
}
