//! SQLite-backed durable tier.
//!
//! # Responsibility
//! - Persist one full snapshot record per date in the `snapshots` table.
//!
//! # Invariants
//! - Saves are full-record upserts; there are no partial-field updates.
//! - A missing row is `Ok(None)`, distinct from query errors.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::model::snapshot::DaySnapshot;

use super::{DurableTier, StoreResult};

/// Durable tier over an owned SQLite connection.
pub struct SqliteDurableStore {
    conn: Mutex<Connection>,
}

impl SqliteDurableStore {
    /// Wraps a connection prepared by [`crate::db::open_db`].
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DurableTier for SqliteDurableStore {
    async fn load(&self, date: NaiveDate) -> StoreResult<Option<DaySnapshot>> {
        let payload: Option<String> = self
            .lock()
            .query_row(
                "SELECT payload FROM snapshots WHERE date = ?1;",
                params![date.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, snapshot: &DaySnapshot) -> StoreResult<()> {
        let payload = serde_json::to_string(snapshot)?;

        self.lock().execute(
            "INSERT INTO snapshots (date, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(date) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![snapshot.date.to_string(), payload],
        )?;

        Ok(())
    }

    async fn delete(&self, date: NaiveDate) -> StoreResult<()> {
        self.lock().execute(
            "DELETE FROM snapshots WHERE date = ?1;",
            params![date.to_string()],
        )?;
        Ok(())
    }
}
