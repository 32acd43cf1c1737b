//! Snapshot record and owned domain objects.
//!
//! # Responsibility
//! - Define the per-date snapshot and the objects it owns outright.
//! - Define read-mostly projections of external provider state.
//!
//! # Invariants
//! - `date` is the persistence key; one snapshot per date.
//! - Task/goal/checklist identifiers are generated client-side and never
//!   reused within a snapshot.
//! - External projections (`external_tasks`, `issues`) are replaced wholesale
//!   on sync, never merged element-wise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provenance of a calendar event within the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    /// Pulled from the external calendar provider; replaced on every sync.
    Sourced,
    /// Entered by the user; survives provider syncs.
    Manual,
}

/// A calendar entry shown for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Provider id for sourced events, generated locally for manual ones.
    pub id: String,
    pub title: String,
    /// RFC 3339 start instant as delivered by the provider.
    pub start: String,
    /// RFC 3339 end instant.
    pub end: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub source: EventSource,
}

impl CalendarEvent {
    /// Creates a locally authored event with a generated id.
    pub fn manual(title: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            start: start.into(),
            end: end.into(),
            location: None,
            description: None,
            source: EventSource::Manual,
        }
    }
}

/// Task urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Next state in the pending -> in-progress -> done -> pending cycle.
    pub fn advanced(self) -> Self {
        match self {
            Self::Pending => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Pending,
        }
    }
}

/// A task owned by one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Local time-of-day string, e.g. "14:30".
    pub due_time: Option<String>,
    pub notes: Option<String>,
}

impl Task {
    /// Creates a pending task with a generated id.
    pub fn new(title: impl Into<String>, priority: TaskPriority, due_time: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            priority,
            status: TaskStatus::Pending,
            due_time,
            notes: None,
        }
    }
}

/// A goal entry, held either in today's or tomorrow's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub detail: Option<String>,
    pub completed: bool,
    /// True when copied from the previous day's "for tomorrow" list.
    #[serde(default)]
    pub inherited: bool,
}

impl Goal {
    /// Creates an open goal with a generated id.
    pub fn new(title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            detail,
            completed: false,
            inherited: false,
        }
    }

    /// Clone used by goal inheritance: fresh identity, reset completion.
    pub fn inherited_copy(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: self.title.clone(),
            detail: self.detail.clone(),
            completed: false,
            inherited: true,
        }
    }
}

/// Self-assessed mood for the day's reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Great,
    Good,
    Ok,
    Bad,
}

/// One checkable item inside a reflection checklist or the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: Uuid,
    pub label: String,
    pub checked: bool,
    pub category: Option<String>,
}

impl ChecklistItem {
    /// Creates an unchecked item with a generated id.
    pub fn new(label: impl Into<String>, category: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            checked: false,
            category,
        }
    }
}

/// End-of-day reflection entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionEntry {
    pub mood: Mood,
    pub notes: String,
    pub checklist: Vec<ChecklistItem>,
}

/// Completion state reported by the external task-list provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalTaskStatus {
    NeedsAction,
    Completed,
}

/// Read-mostly projection of one provider task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalTask {
    /// Provider-assigned id.
    pub id: String,
    pub title: String,
    pub notes: Option<String>,
    /// Provider due date, when the task has one.
    pub due: Option<String>,
    pub status: ExternalTaskStatus,
    pub list_id: String,
    pub list_name: String,
}

/// Open/closed/merged state of a tracked issue or pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    Closed,
    Merged,
}

/// Whether a tracker item is an issue or a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Issue,
    Pr,
}

/// Read-mostly projection of one issue-tracker obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub url: String,
    pub repository: String,
    pub status: IssueStatus,
    pub kind: IssueKind,
}

/// The complete per-date record. Unit of persistence for both store tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
    pub tasks: Vec<Task>,
    pub external_tasks: Vec<ExternalTask>,
    pub issues: Vec<Issue>,
    pub reflection: ReflectionEntry,
    /// Goals for the snapshot's own date, possibly inherited from the
    /// previous day's `goals_tomorrow`.
    pub goals_today: Vec<Goal>,
    /// Goals being set for the following day.
    pub goals_tomorrow: Vec<Goal>,
    /// Per-day copy of the checklist template; edits here seed future days.
    pub checklist_template: Vec<ChecklistItem>,
}

/// Sync lifecycle the UI renders as a status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Idle,
    Loading,
    Saving,
    Synced,
    Error,
}

/// Status plus a short human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncState {
    pub status: SyncStatus,
    pub message: String,
}

impl SyncState {
    pub fn idle(message: impl Into<String>) -> Self {
        Self { status: SyncStatus::Idle, message: message.into() }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self { status: SyncStatus::Loading, message: message.into() }
    }

    pub fn saving(message: impl Into<String>) -> Self {
        Self { status: SyncStatus::Saving, message: message.into() }
    }

    pub fn synced(message: impl Into<String>) -> Self {
        Self { status: SyncStatus::Synced, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: SyncStatus::Error, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::{Goal, Task, TaskPriority, TaskStatus};

    #[test]
    fn task_status_cycles_through_all_states() {
        assert_eq!(TaskStatus::Pending.advanced(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.advanced(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.advanced(), TaskStatus::Pending);
    }

    #[test]
    fn new_task_starts_pending() {
        let task = Task::new("write report", TaskPriority::High, None);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.notes.is_none());
    }

    #[test]
    fn inherited_copy_gets_fresh_identity_and_open_state() {
        let mut original = Goal::new("ship release", Some("v0.2".to_string()));
        original.completed = true;

        let copy = original.inherited_copy();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, original.title);
        assert_eq!(copy.detail, original.detail);
        assert!(!copy.completed);
        assert!(copy.inherited);
    }
}
