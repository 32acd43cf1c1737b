//! Snapshot state manager: load, inherit, enrich, mutate, autosave.
//!
//! # Responsibility
//! - Hold the single authoritative in-memory snapshot for the active date.
//! - Run the load protocol (store -> default -> goal inheritance -> provider
//!   enrichment) and expose controlled mutations with debounced persistence.
//!
//! # Invariants
//! - Every mutation republishes synchronously; readers never observe a state
//!   older than the latest accepted mutation.
//! - At most one persist timer is pending; scheduling replaces it.
//! - Every asynchronous continuation is guarded by a generation counter, so
//!   results for a stale date can never overwrite the active one.
//! - No store or adapter failure escapes to the caller; they all become
//!   `SyncState` transitions and log events.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{NaiveDate, TimeDelta};
use log::{error, info, warn};
use tokio::task::JoinHandle;

use crate::model::snapshot::{
    CalendarEvent, DaySnapshot, EventSource, ExternalTask, ExternalTaskStatus, Goal, Mood,
    SyncState, Task, TaskPriority, TaskStatus,
};
use crate::model::template::{base_template, build_default_snapshot};
use crate::service::summary::{summarize, DaySummary};
use crate::store::SnapshotStore;
use crate::sync::{
    AdapterResult, CalendarAdapter, IssueAdapter, NewEvent, NewExternalTask, TaskListAdapter,
};

/// Tunables for the snapshot service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Quiet period after the last mutation before the autosave fires.
    pub debounce: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(600),
        }
    }
}

struct Shared {
    date: NaiveDate,
    snapshot: DaySnapshot,
    sync: SyncState,
    generation: u64,
    pending_persist: Option<JoinHandle<()>>,
}

/// State manager for the currently selected date. Cheap to clone; clones
/// share the same published snapshot and pending-persist cell.
#[derive(Clone)]
pub struct SnapshotService {
    store: Arc<dyn SnapshotStore>,
    calendar: Arc<dyn CalendarAdapter>,
    task_list: Arc<dyn TaskListAdapter>,
    issues: Arc<dyn IssueAdapter>,
    debounce: Duration,
    shared: Arc<Mutex<Shared>>,
}

impl SnapshotService {
    /// Creates a service publishing a default snapshot for `initial_date`.
    /// Call [`Self::select_date`] to run the load protocol.
    pub fn new(
        store: Arc<dyn SnapshotStore>,
        calendar: Arc<dyn CalendarAdapter>,
        task_list: Arc<dyn TaskListAdapter>,
        issues: Arc<dyn IssueAdapter>,
        config: ServiceConfig,
        initial_date: NaiveDate,
    ) -> Self {
        Self {
            store,
            calendar,
            task_list,
            issues,
            debounce: config.debounce,
            shared: Arc::new(Mutex::new(Shared {
                date: initial_date,
                snapshot: build_default_snapshot(initial_date, &base_template()),
                sync: SyncState::idle("not loaded"),
                generation: 0,
                pending_persist: None,
            })),
        }
    }

    fn shared(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Clone of the currently published snapshot.
    pub fn snapshot(&self) -> DaySnapshot {
        self.shared().snapshot.clone()
    }

    /// The active date.
    pub fn date(&self) -> NaiveDate {
        self.shared().date
    }

    /// Current sync status for UI feedback.
    pub fn sync_state(&self) -> SyncState {
        self.shared().sync.clone()
    }

    /// Derived digest of the published snapshot.
    pub fn summary(&self) -> DaySummary {
        summarize(&self.shared().snapshot)
    }

    fn is_live(&self, generation: u64) -> bool {
        self.shared().generation == generation
    }

    fn set_sync(&self, generation: u64, sync: SyncState) {
        let mut shared = self.shared();
        if shared.generation == generation {
            shared.sync = sync;
        }
    }

    fn publish(&self, generation: u64, snapshot: DaySnapshot, sync: SyncState) {
        let mut shared = self.shared();
        if shared.generation != generation {
            return;
        }
        shared.snapshot = snapshot;
        shared.sync = sync;
    }

    /// Runs the full load protocol for `date`: pending edits for the
    /// outgoing date are flushed, then store load, default fallback, one-time
    /// goal inheritance, publication, and concurrent provider enrichment.
    pub async fn select_date(&self, date: NaiveDate) {
        self.flush().await;

        let generation = {
            let mut shared = self.shared();
            shared.generation += 1;
            shared.date = date;
            if let Some(handle) = shared.pending_persist.take() {
                handle.abort();
            }
            shared.sync = SyncState::loading("loading day...");
            shared.generation
        };
        info!("event=snapshot_load module=service status=start date={date}");

        let loaded = self.store.load(date).await;
        if !self.is_live(generation) {
            return;
        }

        let mut working = match loaded {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => build_default_snapshot(date, &base_template()),
            Err(err) => {
                error!("event=snapshot_load module=service status=error date={date} error={err}");
                self.publish(
                    generation,
                    build_default_snapshot(date, &base_template()),
                    SyncState::error("failed to load day"),
                );
                return;
            }
        };

        if working.goals_today.is_empty() {
            if let Some(previous) = date.pred_opt() {
                let inherited: Vec<Goal> = match self.store.load(previous).await {
                    Ok(Some(prev)) => {
                        prev.goals_tomorrow.iter().map(Goal::inherited_copy).collect()
                    }
                    Ok(None) => Vec::new(),
                    Err(err) => {
                        warn!(
                            "event=goal_inherit module=service status=load_failed date={date} error={err}"
                        );
                        Vec::new()
                    }
                };
                if !self.is_live(generation) {
                    return;
                }
                if !inherited.is_empty() {
                    working.goals_today = inherited;
                    // One-time migration write, deliberately not debounced:
                    // inheritance must happen at most once per date.
                    if let Err(err) = self.store.save(&working).await {
                        warn!(
                            "event=goal_inherit module=service status=save_failed date={date} error={err}"
                        );
                    }
                    if !self.is_live(generation) {
                        return;
                    }
                    info!(
                        "event=goal_inherit module=service status=ok date={date} count={}",
                        working.goals_today.len()
                    );
                }
            }
        }

        self.publish(generation, working, SyncState::idle("up to date"));
        info!("event=snapshot_load module=service status=ok date={date}");

        self.spawn_enrichment(generation, date);
    }

    /// Moves the selection by `days` relative to the active date.
    pub async fn shift_date(&self, days: i64) {
        let Some(next) = self.date().checked_add_signed(TimeDelta::days(days)) else {
            return;
        };
        self.select_date(next).await;
    }

    fn spawn_enrichment(&self, generation: u64, date: NaiveDate) {
        let service = self.clone();
        tokio::spawn(async move {
            match service.calendar.fetch_events(date).await {
                Ok(events) => service.apply_enrichment(generation, move |snapshot| {
                    let existing = std::mem::take(&mut snapshot.events);
                    snapshot.events = merge_sourced_events(existing, events);
                }),
                Err(err) => warn!(
                    "event=enrich_calendar module=service status=error date={date} error={err}"
                ),
            }
        });

        let service = self.clone();
        tokio::spawn(async move {
            match service.task_list.fetch_tasks(date).await {
                Ok(tasks) => service.apply_enrichment(generation, move |snapshot| {
                    snapshot.external_tasks = tasks;
                }),
                Err(err) => warn!(
                    "event=enrich_tasks module=service status=error date={date} error={err}"
                ),
            }
        });

        let service = self.clone();
        tokio::spawn(async move {
            match service.issues.fetch_assigned().await {
                Ok(issues) => service.apply_enrichment(generation, move |snapshot| {
                    snapshot.issues = issues;
                }),
                Err(err) => warn!(
                    "event=enrich_issues module=service status=error date={date} error={err}"
                ),
            }
        });
    }

    /// Merges one provider result into the published snapshot. Enrichment is
    /// provider state, so it republishes without scheduling an autosave; the
    /// next user edit persists it.
    fn apply_enrichment(&self, generation: u64, apply: impl FnOnce(&mut DaySnapshot)) {
        let mut shared = self.shared();
        if shared.generation != generation {
            return;
        }
        let mut working = shared.snapshot.clone();
        apply(&mut working);
        shared.snapshot = working;
    }

    /// Clone-apply-republish, then schedule the debounced autosave.
    /// Returns whether the transformation changed anything.
    fn mutate(&self, apply: impl FnOnce(&mut DaySnapshot) -> bool) -> bool {
        let generation = self.shared().generation;
        self.mutate_live(generation, apply)
    }

    fn mutate_live(&self, generation: u64, apply: impl FnOnce(&mut DaySnapshot) -> bool) -> bool {
        let changed = {
            let mut shared = self.shared();
            if shared.generation != generation {
                return false;
            }
            let mut working = shared.snapshot.clone();
            let changed = apply(&mut working);
            if changed {
                shared.snapshot = working;
            }
            changed
        };
        if changed {
            self.schedule_persist(generation);
        }
        changed
    }

    /// Replaces the pending persist timer with a fresh one. The single
    /// pending-write cell coalesces a burst of edits into one save.
    fn schedule_persist(&self, generation: u64) {
        let service = self.clone();
        let delay = self.debounce;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            service.run_persist(generation).await;
        });

        let mut shared = self.shared();
        if shared.generation != generation {
            task.abort();
            return;
        }
        if let Some(previous) = shared.pending_persist.take() {
            previous.abort();
        }
        shared.pending_persist = Some(task);
    }

    async fn run_persist(&self, generation: u64) {
        let snapshot = {
            let mut shared = self.shared();
            if shared.generation != generation {
                return;
            }
            shared.pending_persist = None;
            shared.sync = SyncState::saving("autosaving...");
            shared.snapshot.clone()
        };

        match self.store.save(&snapshot).await {
            Ok(()) => {
                self.set_sync(generation, SyncState::synced("autosaved"));
            }
            Err(err) => {
                error!(
                    "event=autosave module=service status=error date={} error={err}",
                    snapshot.date
                );
                self.set_sync(generation, SyncState::error(format!("autosave failed: {err}")));
            }
        }
    }

    /// Runs a pending autosave immediately, if one is scheduled. Used on
    /// teardown and before a date change so edits are not left in the timer.
    pub async fn flush(&self) {
        let generation = {
            let mut shared = self.shared();
            match shared.pending_persist.take() {
                Some(handle) => {
                    handle.abort();
                    shared.generation
                }
                None => return,
            }
        };
        self.run_persist(generation).await;
    }

    // --- task mutations ---

    /// Adds a pending task. Rejects blank titles.
    pub fn add_task(
        &self,
        title: &str,
        priority: TaskPriority,
        due_time: Option<String>,
    ) -> bool {
        let Some(title) = trimmed(title) else {
            return false;
        };
        self.mutate(move |snapshot| {
            snapshot.tasks.push(Task::new(title, priority, due_time));
            true
        })
    }

    pub fn set_task_status(&self, id: uuid::Uuid, status: TaskStatus) -> bool {
        self.mutate(move |snapshot| {
            update_by(&mut snapshot.tasks, |task| task.id == id, |task| task.status = status)
        })
    }

    /// Cycles the task status pending -> in-progress -> done -> pending.
    pub fn advance_task(&self, id: uuid::Uuid) -> bool {
        self.mutate(move |snapshot| {
            update_by(
                &mut snapshot.tasks,
                |task| task.id == id,
                |task| task.status = task.status.advanced(),
            )
        })
    }

    pub fn set_task_notes(&self, id: uuid::Uuid, notes: Option<String>) -> bool {
        self.mutate(move |snapshot| {
            update_by(&mut snapshot.tasks, |task| task.id == id, |task| task.notes = notes)
        })
    }

    pub fn remove_task(&self, id: uuid::Uuid) -> bool {
        self.mutate(move |snapshot| remove_by(&mut snapshot.tasks, |task| task.id == id))
    }

    // --- goal mutations, both lists ---

    /// Adds a goal to tomorrow's list. Rejects blank titles.
    pub fn add_goal_tomorrow(&self, title: &str, detail: Option<String>) -> bool {
        let Some(title) = trimmed(title) else {
            return false;
        };
        self.mutate(move |snapshot| {
            snapshot.goals_tomorrow.push(Goal::new(title, detail));
            true
        })
    }

    pub fn toggle_goal_tomorrow(&self, id: uuid::Uuid) -> bool {
        self.mutate(move |snapshot| {
            update_by(
                &mut snapshot.goals_tomorrow,
                |goal| goal.id == id,
                |goal| goal.completed = !goal.completed,
            )
        })
    }

    pub fn remove_goal_tomorrow(&self, id: uuid::Uuid) -> bool {
        self.mutate(move |snapshot| remove_by(&mut snapshot.goals_tomorrow, |goal| goal.id == id))
    }

    /// Adds a goal directly to today's list. Rejects blank titles.
    pub fn add_goal_today(&self, title: &str, detail: Option<String>) -> bool {
        let Some(title) = trimmed(title) else {
            return false;
        };
        self.mutate(move |snapshot| {
            snapshot.goals_today.push(Goal::new(title, detail));
            true
        })
    }

    pub fn toggle_goal_today(&self, id: uuid::Uuid) -> bool {
        self.mutate(move |snapshot| {
            update_by(
                &mut snapshot.goals_today,
                |goal| goal.id == id,
                |goal| goal.completed = !goal.completed,
            )
        })
    }

    /// Updates title and/or detail of one of today's goals; `None` keeps the
    /// current value.
    pub fn update_goal_today(
        &self,
        id: uuid::Uuid,
        title: Option<String>,
        detail: Option<String>,
    ) -> bool {
        self.mutate(move |snapshot| {
            update_by(
                &mut snapshot.goals_today,
                |goal| goal.id == id,
                |goal| {
                    if let Some(title) = title {
                        goal.title = title;
                    }
                    if let Some(detail) = detail {
                        goal.detail = Some(detail);
                    }
                },
            )
        })
    }

    pub fn remove_goal_today(&self, id: uuid::Uuid) -> bool {
        self.mutate(move |snapshot| remove_by(&mut snapshot.goals_today, |goal| goal.id == id))
    }

    // --- reflection mutations ---

    pub fn set_reflection_notes(&self, notes: String) -> bool {
        self.mutate(move |snapshot| {
            snapshot.reflection.notes = notes;
            true
        })
    }

    pub fn set_reflection_mood(&self, mood: Mood) -> bool {
        self.mutate(move |snapshot| {
            snapshot.reflection.mood = mood;
            true
        })
    }

    pub fn toggle_checklist_item(&self, id: uuid::Uuid) -> bool {
        self.mutate(move |snapshot| {
            update_by(
                &mut snapshot.reflection.checklist,
                |item| item.id == id,
                |item| item.checked = !item.checked,
            )
        })
    }

    // --- checklist template mutations (fan out to today's checklist) ---

    /// Appends a template item and a matching unchecked entry, sharing one
    /// identifier, to today's reflection checklist. Rejects blank labels.
    pub fn add_template_item(&self, label: &str, category: Option<String>) -> bool {
        let Some(label) = trimmed(label) else {
            return false;
        };
        self.mutate(move |snapshot| {
            let item = crate::model::snapshot::ChecklistItem::new(label, category);
            snapshot.reflection.checklist.push(item.clone());
            snapshot.checklist_template.push(item);
            true
        })
    }

    /// Renames a template item and the checklist entry sharing its id. The
    /// template edit wins over any per-day label customization.
    pub fn rename_template_item(&self, id: uuid::Uuid, label: &str) -> bool {
        let Some(label) = trimmed(label) else {
            return false;
        };
        self.mutate(move |snapshot| {
            let in_template = update_by(
                &mut snapshot.checklist_template,
                |item| item.id == id,
                |item| item.label = label.clone(),
            );
            let in_checklist = update_by(
                &mut snapshot.reflection.checklist,
                |item| item.id == id,
                |item| item.label = label.clone(),
            );
            in_template || in_checklist
        })
    }

    /// Removes a template item and the checklist entry sharing its id.
    pub fn remove_template_item(&self, id: uuid::Uuid) -> bool {
        self.mutate(move |snapshot| {
            let in_template = remove_by(&mut snapshot.checklist_template, |item| item.id == id);
            let in_checklist =
                remove_by(&mut snapshot.reflection.checklist, |item| item.id == id);
            in_template || in_checklist
        })
    }

    // --- event mutations ---

    /// Adds a locally authored event. Rejects blank titles.
    pub fn add_manual_event(&self, title: &str, start: &str, end: &str) -> bool {
        let Some(title) = trimmed(title) else {
            return false;
        };
        let start = start.to_string();
        let end = end.to_string();
        self.mutate(move |snapshot| {
            snapshot.events.push(CalendarEvent::manual(title, start, end));
            true
        })
    }

    /// Removes an event (manual or sourced) from the day's list.
    pub fn remove_event(&self, id: &str) -> bool {
        let id = id.to_string();
        self.mutate(move |snapshot| remove_by(&mut snapshot.events, |event| event.id == id))
    }

    // --- explicit provider syncs ---

    /// Refetches calendar events and replaces the day's sourced entries.
    /// Manual entries survive. Status moves loading -> synced/error; adapter
    /// failures never propagate to the caller.
    pub async fn sync_calendar(&self) {
        let (date, generation) = {
            let shared = self.shared();
            (shared.date, shared.generation)
        };
        self.set_sync(generation, SyncState::loading("syncing calendar..."));

        match self.calendar.fetch_events(date).await {
            Ok(events) if events.is_empty() => {
                self.set_sync(
                    generation,
                    SyncState::synced("calendar synced (no events found)"),
                );
            }
            Ok(events) => {
                let count = events.len();
                self.mutate_live(generation, move |snapshot| {
                    let existing = std::mem::take(&mut snapshot.events);
                    snapshot.events = merge_sourced_events(existing, events);
                    true
                });
                self.set_sync(
                    generation,
                    SyncState::synced(format!("calendar synced ({count} events)")),
                );
            }
            Err(err) => {
                error!("event=sync_calendar module=service status=error date={date} error={err}");
                self.set_sync(generation, SyncState::error(err.to_string()));
            }
        }
    }

    /// Refetches the external task list and replaces the projection
    /// wholesale.
    pub async fn sync_external_tasks(&self) {
        let (date, generation) = {
            let shared = self.shared();
            (shared.date, shared.generation)
        };
        self.set_sync(generation, SyncState::loading("syncing task list..."));

        match self.task_list.fetch_tasks(date).await {
            Ok(tasks) => {
                let count = tasks.len();
                self.mutate_live(generation, move |snapshot| {
                    snapshot.external_tasks = tasks;
                    true
                });
                self.set_sync(
                    generation,
                    SyncState::synced(format!("task list synced ({count} tasks)")),
                );
            }
            Err(err) => {
                error!("event=sync_tasks module=service status=error date={date} error={err}");
                self.set_sync(generation, SyncState::error(err.to_string()));
            }
        }
    }

    /// Refetches tracker obligations and replaces the projection wholesale.
    pub async fn sync_issues(&self) {
        let generation = self.shared().generation;
        self.set_sync(generation, SyncState::loading("syncing issues..."));

        match self.issues.fetch_assigned().await {
            Ok(issues) => {
                let count = issues.len();
                self.mutate_live(generation, move |snapshot| {
                    snapshot.issues = issues;
                    true
                });
                self.set_sync(
                    generation,
                    SyncState::synced(format!("issues synced ({count} items)")),
                );
            }
            Err(err) => {
                error!("event=sync_issues module=service status=error error={err}");
                self.set_sync(generation, SyncState::error(err.to_string()));
            }
        }
    }

    // --- forwarded provider writes ---

    /// Creates an event at the provider, then adds it to the day's list.
    pub async fn create_provider_event(&self, event: NewEvent) -> AdapterResult<CalendarEvent> {
        let created = self.calendar.create_event(event).await?;
        let published = created.clone();
        self.mutate(move |snapshot| {
            snapshot.events.push(published);
            true
        });
        Ok(created)
    }

    /// Deletes an event at the provider, then drops it from the day's list.
    pub async fn delete_provider_event(&self, event_id: &str) -> AdapterResult<()> {
        self.calendar.delete_event(event_id).await?;
        self.remove_event(event_id);
        Ok(())
    }

    /// Creates a task at the task-list provider and adds the projection.
    pub async fn create_external_task(
        &self,
        task: NewExternalTask,
    ) -> AdapterResult<ExternalTask> {
        let created = self.task_list.create_task(task).await?;
        let published = created.clone();
        self.mutate(move |snapshot| {
            snapshot.external_tasks.push(published);
            true
        });
        Ok(created)
    }

    /// Marks a provider task completed and mirrors that in the projection.
    pub async fn complete_external_task(&self, task_id: &str, list_id: &str) -> AdapterResult<()> {
        self.task_list.complete_task(task_id, list_id).await?;
        let task_id = task_id.to_string();
        self.mutate(move |snapshot| {
            update_by(
                &mut snapshot.external_tasks,
                |task| task.id == task_id,
                |task| task.status = ExternalTaskStatus::Completed,
            )
        });
        Ok(())
    }

    /// Deletes a provider task and drops it from the projection.
    pub async fn delete_external_task(&self, task_id: &str, list_id: &str) -> AdapterResult<()> {
        self.task_list.delete_task(task_id, list_id).await?;
        let task_id = task_id.to_string();
        self.mutate(move |snapshot| {
            remove_by(&mut snapshot.external_tasks, |task| task.id == task_id)
        });
        Ok(())
    }

    // --- reset ---

    /// Deletes the active date from both store tiers and republishes a fresh
    /// default snapshot. Pending edits for the date are discarded.
    pub async fn reset(&self) {
        let (date, generation) = {
            let mut shared = self.shared();
            shared.generation += 1;
            if let Some(handle) = shared.pending_persist.take() {
                handle.abort();
            }
            shared.sync = SyncState::saving("clearing day...");
            (shared.date, shared.generation)
        };

        match self.store.delete(date).await {
            Ok(()) => {
                self.publish(
                    generation,
                    build_default_snapshot(date, &base_template()),
                    SyncState::idle("up to date"),
                );
                info!("event=snapshot_reset module=service status=ok date={date}");
            }
            Err(err) => {
                error!("event=snapshot_reset module=service status=error date={date} error={err}");
                self.set_sync(
                    generation,
                    SyncState::error(format!("failed to clear day: {err}")),
                );
            }
        }
    }
}

/// Keeps manual events, replaces sourced ones with the provider result.
/// Fetched entries are tagged `Sourced` regardless of what the adapter set.
fn merge_sourced_events(
    existing: Vec<CalendarEvent>,
    fetched: Vec<CalendarEvent>,
) -> Vec<CalendarEvent> {
    let mut merged: Vec<CalendarEvent> = existing
        .into_iter()
        .filter(|event| event.source == EventSource::Manual)
        .collect();
    merged.extend(fetched.into_iter().map(|mut event| {
        event.source = EventSource::Sourced;
        event
    }));
    merged
}

fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn update_by<T>(
    items: &mut [T],
    matches: impl Fn(&T) -> bool,
    apply: impl FnOnce(&mut T),
) -> bool {
    match items.iter_mut().find(|item| matches(item)) {
        Some(item) => {
            apply(item);
            true
        }
        None => false,
    }
}

fn remove_by<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !matches(item));
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::merge_sourced_events;
    use crate::model::snapshot::{CalendarEvent, EventSource};

    fn sourced(id: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: format!("event {id}"),
            start: "2025-03-14T09:00:00Z".to_string(),
            end: "2025-03-14T10:00:00Z".to_string(),
            location: None,
            description: None,
            source: EventSource::Sourced,
        }
    }

    #[test]
    fn manual_events_survive_a_sourced_replace() {
        let manual = CalendarEvent::manual("dentist", "2025-03-14T11:00:00Z", "2025-03-14T12:00:00Z");
        let existing = vec![sourced("old"), manual.clone()];

        let merged = merge_sourced_events(existing, vec![sourced("new")]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, manual.id);
        assert_eq!(merged[1].id, "new");
    }

    #[test]
    fn fetched_events_are_tagged_sourced() {
        let mut fetched = sourced("a");
        fetched.source = EventSource::Manual;

        let merged = merge_sourced_events(Vec::new(), vec![fetched]);
        assert_eq!(merged[0].source, EventSource::Sourced);
    }
}
