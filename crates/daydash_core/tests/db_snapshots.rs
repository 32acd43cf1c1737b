use chrono::NaiveDate;
use daydash_core::db::migrations::latest_version;
use daydash_core::db::{open_db, open_db_in_memory};
use daydash_core::{base_template, build_default_snapshot, DurableTier, SqliteDurableStore};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

#[test]
fn fresh_database_lands_on_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn reopening_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daydash.sqlite3");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[tokio::test]
async fn record_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daydash.sqlite3");

    let snapshot = build_default_snapshot(date(), &base_template());
    {
        let store = SqliteDurableStore::new(open_db(&path).unwrap());
        store.save(&snapshot).await.unwrap();
    }

    let store = SqliteDurableStore::new(open_db(&path).unwrap());
    let loaded = store.load(date()).await.unwrap().unwrap();
    assert_eq!(loaded, snapshot);
}

#[tokio::test]
async fn save_is_a_full_record_upsert() {
    let store = SqliteDurableStore::new(open_db_in_memory().unwrap());

    let mut snapshot = build_default_snapshot(date(), &base_template());
    store.save(&snapshot).await.unwrap();

    snapshot.reflection.notes = "rewritten".to_string();
    store.save(&snapshot).await.unwrap();

    let loaded = store.load(date()).await.unwrap().unwrap();
    assert_eq!(loaded.reflection.notes, "rewritten");
}

#[tokio::test]
async fn delete_then_load_is_none() {
    let store = SqliteDurableStore::new(open_db_in_memory().unwrap());

    let snapshot = build_default_snapshot(date(), &base_template());
    store.save(&snapshot).await.unwrap();
    store.delete(date()).await.unwrap();

    assert!(store.load(date()).await.unwrap().is_none());
}
