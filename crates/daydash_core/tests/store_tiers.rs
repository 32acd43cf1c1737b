use std::fs;
use std::sync::Arc;

use chrono::NaiveDate;
use daydash_core::db::open_db_in_memory;
use daydash_core::{
    base_template, build_default_snapshot, CalendarEvent, DaySnapshot, DurableTier,
    ExternalTask, ExternalTaskStatus, FileSnapshotCache, Goal, Issue, IssueKind, IssueStatus,
    MemoryDurableStore, Mood, SnapshotStore, SqliteDurableStore, Task, TaskPriority, TaskStatus,
    TieredSnapshotStore,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn sample_snapshot(date: NaiveDate) -> DaySnapshot {
    let mut snapshot = build_default_snapshot(date, &base_template());
    let mut done = Task::new("review budget", TaskPriority::High, Some("09:30".to_string()));
    done.status = TaskStatus::Done;
    done.notes = Some("carry over receipts".to_string());
    snapshot.tasks.push(done);
    snapshot.tasks.push(Task::new("water plants", TaskPriority::Low, None));
    snapshot
        .events
        .push(CalendarEvent::manual("dentist", "2025-03-14T11:00:00Z", "2025-03-14T12:00:00Z"));
    snapshot.goals_today.push(Goal::new("inbox zero", None));
    snapshot
        .goals_tomorrow
        .push(Goal::new("plan sprint", Some("with notes".to_string())));
    snapshot.external_tasks.push(ExternalTask {
        id: "ext-1".to_string(),
        title: "buy milk".to_string(),
        notes: None,
        due: Some(date.to_string()),
        status: ExternalTaskStatus::NeedsAction,
        list_id: "list-1".to_string(),
        list_name: "Groceries".to_string(),
    });
    snapshot.issues.push(Issue {
        id: 99,
        number: 7,
        title: "fix login".to_string(),
        url: "https://example.com/o/r/issues/7".to_string(),
        repository: "o/r".to_string(),
        status: IssueStatus::Open,
        kind: IssueKind::Issue,
    });
    snapshot.reflection.notes = "solid day".to_string();
    snapshot.reflection.mood = Mood::Good;
    snapshot.reflection.checklist[0].checked = true;
    snapshot
}

fn file_and_sqlite_store(dir: &std::path::Path) -> impl SnapshotStore {
    let conn = open_db_in_memory().unwrap();
    TieredSnapshotStore::new(FileSnapshotCache::new(dir), SqliteDurableStore::new(conn))
}

#[tokio::test]
async fn save_then_load_roundtrips_deep_equal() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_and_sqlite_store(dir.path());

    let snapshot = sample_snapshot(date(14));
    store.save(&snapshot).await.unwrap();

    let loaded = store.load(date(14)).await.unwrap().unwrap();
    assert_eq!(loaded, snapshot);
}

#[tokio::test]
async fn absent_date_is_none_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_and_sqlite_store(dir.path());

    assert!(store.load(date(1)).await.unwrap().is_none());
}

#[tokio::test]
async fn durable_hit_is_mirrored_into_cache() {
    let dir = tempfile::tempdir().unwrap();
    let durable = Arc::new(MemoryDurableStore::new());
    let store = TieredSnapshotStore::new(FileSnapshotCache::new(dir.path()), durable.clone());

    let snapshot = sample_snapshot(date(14));
    // Seed the durable tier only, as if another session had written it.
    DurableTier::save(&*durable, &snapshot).await.unwrap();

    let loaded = store.load(date(14)).await.unwrap().unwrap();
    assert_eq!(loaded, snapshot);

    // The load above must have mirrored the record into the cache.
    durable.set_fail_reads(true);
    let from_cache = store.load(date(14)).await.unwrap().unwrap();
    assert_eq!(from_cache, snapshot);
}

#[tokio::test]
async fn save_reports_durable_failure_but_keeps_cache() {
    let dir = tempfile::tempdir().unwrap();
    let durable = Arc::new(MemoryDurableStore::new());
    let store = TieredSnapshotStore::new(FileSnapshotCache::new(dir.path()), durable.clone());

    durable.set_fail_writes(true);
    let snapshot = sample_snapshot(date(14));
    assert!(store.save(&snapshot).await.is_err());

    durable.set_fail_reads(true);
    let from_cache = store.load(date(14)).await.unwrap().unwrap();
    assert_eq!(from_cache, snapshot);
}

#[tokio::test]
async fn corrupted_cache_payload_is_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("snapshot-2025-03-14.json"), "{not json").unwrap();

    let durable = Arc::new(MemoryDurableStore::new());
    let store = TieredSnapshotStore::new(FileSnapshotCache::new(dir.path()), durable);

    assert!(store.load(date(14)).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_clears_cache_even_when_durable_fails() {
    let dir = tempfile::tempdir().unwrap();
    let durable = Arc::new(MemoryDurableStore::new());
    let store = TieredSnapshotStore::new(FileSnapshotCache::new(dir.path()), durable.clone());

    let snapshot = sample_snapshot(date(14));
    store.save(&snapshot).await.unwrap();

    durable.set_fail_writes(true);
    assert!(store.delete(date(14)).await.is_err());

    // Cache side is gone even though the durable delete failed.
    durable.set_fail_reads(true);
    assert!(store.load(date(14)).await.unwrap().is_none());

    // The durable record survived the failed delete.
    assert!(durable.stored(date(14)).is_some());
}

#[tokio::test]
async fn delete_removes_both_tiers() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_and_sqlite_store(dir.path());

    let snapshot = sample_snapshot(date(14));
    store.save(&snapshot).await.unwrap();
    store.delete(date(14)).await.unwrap();

    assert!(store.load(date(14)).await.unwrap().is_none());
}
