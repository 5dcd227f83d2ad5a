//! Remote task API client
//!
//! The service is an external collaborator reached over HTTPS. All calls are
//! blocking and strictly sequential; any non-2xx response aborts the run.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde_json::json;

use crate::model::{Project, Task};

/// The three operations the rescheduler needs from the remote service.
///
/// Defined as a trait so the core logic can be exercised against an in-memory
/// fake in tests.
pub trait TaskApi {
    /// Fetch all tasks the service reports as overdue.
    fn list_overdue_tasks(&self) -> Result<Vec<Task>>;

    /// Fetch all projects, for display-name lookup.
    fn list_projects(&self) -> Result<Vec<Project>>;

    /// Set a task's due date. No retry; the caller aborts on the first error.
    fn update_due_date(&self, task_id: &str, date: NaiveDate) -> Result<()>;
}

const BASE_URL: &str = "https://api.todoist.com/rest/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Todoist REST v2 client authenticated with a bearer token.
pub struct TodoistClient {
    http: Client,
    token: String,
    base_url: String,
}

impl TodoistClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            http,
            token: token.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .with_context(|| format!("GET {url} failed"))?;
        if !response.status().is_success() {
            bail!("GET {url} returned {}", response.status());
        }
        response
            .json()
            .with_context(|| format!("Invalid JSON from {url}"))
    }
}

impl TaskApi for TodoistClient {
    fn list_overdue_tasks(&self) -> Result<Vec<Task>> {
        self.get_json("tasks?filter=overdue")
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        self.get_json("projects")
    }

    fn update_due_date(&self, task_id: &str, date: NaiveDate) -> Result<()> {
        let url = format!("{}/tasks/{}", self.base_url, task_id);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "due_date": date.format("%Y-%m-%d").to_string() }))
            .send()
            .with_context(|| format!("POST {url} failed"))?;
        if !response.status().is_success() {
            bail!("POST {url} returned {}", response.status());
        }
        Ok(())
    }
}
