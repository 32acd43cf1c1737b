//! File-backed cache tier: one JSON document per date.
//!
//! # Responsibility
//! - Keep the current session's snapshots readable without the durable tier.
//!
//! # Invariants
//! - A corrupted or unreadable file is a miss, never an error.
//! - Write failures are logged and swallowed; the in-memory snapshot held by
//!   the service stays authoritative for the session.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::warn;

use crate::model::snapshot::DaySnapshot;

use super::CacheTier;

/// Cache tier storing `snapshot-<date>.json` files under one directory.
pub struct FileSnapshotCache {
    dir: PathBuf,
}

impl FileSnapshotCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("snapshot-{date}.json"))
    }
}

#[async_trait]
impl CacheTier for FileSnapshotCache {
    async fn load(&self, date: NaiveDate) -> Option<DaySnapshot> {
        let path = self.path_for(date);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(
                    "event=cache_load module=store status=miss date={date} error={err}"
                );
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                // Garbage in the cache must not take the dashboard down.
                warn!(
                    "event=cache_load module=store status=corrupt date={date} error={err}"
                );
                None
            }
        }
    }

    async fn save(&self, snapshot: &DaySnapshot) {
        let payload = match serde_json::to_string(snapshot) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=cache_save module=store status=error date={} error={err}",
                    snapshot.date
                );
                return;
            }
        };

        if let Err(err) = fs::create_dir_all(&self.dir) {
            warn!(
                "event=cache_save module=store status=error date={} error={err}",
                snapshot.date
            );
            return;
        }
        if let Err(err) = fs::write(self.path_for(snapshot.date), payload) {
            warn!(
                "event=cache_save module=store status=error date={} error={err}",
                snapshot.date
            );
        }
    }

    async fn delete(&self, date: NaiveDate) {
        match fs::remove_file(self.path_for(date)) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                warn!("event=cache_delete module=store status=error date={date} error={err}");
            }
        }
    }
}
