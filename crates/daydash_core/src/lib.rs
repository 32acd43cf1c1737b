//! Core domain logic for the daydash personal dashboard.
//! This crate is the single source of truth for snapshot invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod sync;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::snapshot::{
    CalendarEvent, ChecklistItem, DaySnapshot, EventSource, ExternalTask, ExternalTaskStatus,
    Goal, Issue, IssueKind, IssueStatus, Mood, ReflectionEntry, SyncState, SyncStatus, Task,
    TaskPriority, TaskStatus,
};
pub use model::template::{base_template, build_default_snapshot, seed_checklist};
pub use service::snapshot_service::{ServiceConfig, SnapshotService};
pub use service::summary::{summarize, DaySummary};
pub use store::{
    CacheTier, DurableTier, FileSnapshotCache, MemoryDurableStore, SnapshotStore,
    SqliteDurableStore, StoreError, StoreResult, TieredSnapshotStore,
};
pub use sync::{
    AdapterError, AdapterResult, CalendarAdapter, HttpIssueAdapter, IssueAdapter, NewEvent,
    NewExternalTask, TaskListAdapter, UnconfiguredCalendar, UnconfiguredIssues,
    UnconfiguredTaskList,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
