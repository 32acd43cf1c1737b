//! No-credential adapter stand-ins.
//!
//! Fetches degrade to empty results so the dashboard keeps working without
//! any provider configured; writes report `Unconfigured`.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::snapshot::{CalendarEvent, ExternalTask, Issue};

use super::{
    AdapterError, AdapterResult, CalendarAdapter, IssueAdapter, NewEvent, NewExternalTask,
    TaskListAdapter,
};

/// Calendar adapter used when no provider is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredCalendar;

#[async_trait]
impl CalendarAdapter for UnconfiguredCalendar {
    async fn fetch_events(&self, _date: NaiveDate) -> AdapterResult<Vec<CalendarEvent>> {
        Ok(Vec::new())
    }

    async fn create_event(&self, _event: NewEvent) -> AdapterResult<CalendarEvent> {
        Err(AdapterError::Unconfigured(
            "no calendar provider configured".to_string(),
        ))
    }

    async fn delete_event(&self, _event_id: &str) -> AdapterResult<()> {
        Err(AdapterError::Unconfigured(
            "no calendar provider configured".to_string(),
        ))
    }
}

/// Task-list adapter used when no provider is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredTaskList;

#[async_trait]
impl TaskListAdapter for UnconfiguredTaskList {
    async fn fetch_tasks(&self, _date: NaiveDate) -> AdapterResult<Vec<ExternalTask>> {
        Ok(Vec::new())
    }

    async fn create_task(&self, _task: NewExternalTask) -> AdapterResult<ExternalTask> {
        Err(AdapterError::Unconfigured(
            "no task-list provider configured".to_string(),
        ))
    }

    async fn complete_task(&self, _task_id: &str, _list_id: &str) -> AdapterResult<()> {
        Err(AdapterError::Unconfigured(
            "no task-list provider configured".to_string(),
        ))
    }

    async fn delete_task(&self, _task_id: &str, _list_id: &str) -> AdapterResult<()> {
        Err(AdapterError::Unconfigured(
            "no task-list provider configured".to_string(),
        ))
    }
}

/// Issue adapter used when no tracker is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredIssues;

#[async_trait]
impl IssueAdapter for UnconfiguredIssues {
    async fn fetch_assigned(&self) -> AdapterResult<Vec<Issue>> {
        Ok(Vec::new())
    }
}
