//! External provider adapter contracts.
//!
//! # Responsibility
//! - Define the calendar, task-list and issue-tracker seams the snapshot
//!   service consumes.
//! - Keep provider transport details out of the service layer.
//!
//! # Invariants
//! - An empty result list is valid data, not an error.
//! - Missing credentials degrade fetches to empty results; only write
//!   operations surface `Unconfigured`.

use std::error::Error;
use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::snapshot::{CalendarEvent, ExternalTask, Issue};

mod issues_http;
mod unconfigured;

pub use issues_http::HttpIssueAdapter;
pub use unconfigured::{UnconfiguredCalendar, UnconfiguredIssues, UnconfiguredTaskList};

pub type AdapterResult<T> = Result<T, AdapterError>;

/// Failure taxonomy for provider calls.
#[derive(Debug)]
pub enum AdapterError {
    /// The adapter has no credentials or endpoint configured.
    Unconfigured(String),
    /// Transport-level failure (connection, TLS, timeout).
    Http(String),
    /// The provider answered with an error payload.
    Provider(String),
}

impl Display for AdapterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unconfigured(message) => write!(f, "adapter not configured: {message}"),
            Self::Http(message) => write!(f, "provider request failed: {message}"),
            Self::Provider(message) => write!(f, "provider error: {message}"),
        }
    }
}

impl Error for AdapterError {}

/// Fields for an event created through the calendar provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub start: String,
    pub end: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Fields for a task created through the task-list provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExternalTask {
    pub title: String,
    pub notes: Option<String>,
    pub due: Option<String>,
}

/// Calendar provider seam.
#[async_trait]
pub trait CalendarAdapter: Send + Sync {
    /// Events for `date`. An empty vec means "no events".
    async fn fetch_events(&self, date: NaiveDate) -> AdapterResult<Vec<CalendarEvent>>;
    async fn create_event(&self, event: NewEvent) -> AdapterResult<CalendarEvent>;
    async fn delete_event(&self, event_id: &str) -> AdapterResult<()>;
}

/// External task-list provider seam.
#[async_trait]
pub trait TaskListAdapter: Send + Sync {
    /// Tasks due on `date` plus tasks with no due date.
    async fn fetch_tasks(&self, date: NaiveDate) -> AdapterResult<Vec<ExternalTask>>;
    async fn create_task(&self, task: NewExternalTask) -> AdapterResult<ExternalTask>;
    async fn complete_task(&self, task_id: &str, list_id: &str) -> AdapterResult<()>;
    async fn delete_task(&self, task_id: &str, list_id: &str) -> AdapterResult<()>;
}

/// Issue-tracker provider seam.
#[async_trait]
pub trait IssueAdapter: Send + Sync {
    /// Open items assigned to the user or awaiting their review,
    /// deduplicated by id. Absent credentials yield `Ok(vec![])`.
    async fn fetch_assigned(&self) -> AdapterResult<Vec<Issue>>;
}
