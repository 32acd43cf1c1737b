//! Snapshot persistence: a fast cache tier plus a durable tier.
//!
//! # Responsibility
//! - Define the tier contracts and the composed store contract consumed by
//!   the service layer.
//! - Isolate file/SQLite details from snapshot orchestration.
//!
//! # Invariants
//! - "No record for this date" is `Ok(None)`, never an error.
//! - Cache-tier failures degrade to a miss or a no-op; they never propagate.
//! - A durable-tier outage must not lose the current session's edits: the
//!   cache write in `save` happens unconditionally and first.

use std::error::Error;
use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::DbError;
use crate::model::snapshot::DaySnapshot;

mod file_cache;
mod memory;
mod sqlite_store;
mod tiered;

pub use file_cache::FileSnapshotCache;
pub use memory::MemoryDurableStore;
pub use sqlite_store::SqliteDurableStore;
pub use tiered::TieredSnapshotStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for snapshot load/save/delete operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Payload(serde_json::Error),
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Payload(err) => write!(f, "invalid snapshot payload: {err}"),
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Payload(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

/// Fast session-local tier. Infallible by policy: failures are logged and
/// degraded to a miss (load) or a no-op (save/delete).
#[async_trait]
pub trait CacheTier: Send + Sync {
    async fn load(&self, date: NaiveDate) -> Option<DaySnapshot>;
    async fn save(&self, snapshot: &DaySnapshot);
    async fn delete(&self, date: NaiveDate);
}

/// Durable backing tier keyed by date.
#[async_trait]
pub trait DurableTier: Send + Sync {
    async fn load(&self, date: NaiveDate) -> StoreResult<Option<DaySnapshot>>;
    async fn save(&self, snapshot: &DaySnapshot) -> StoreResult<()>;
    async fn delete(&self, date: NaiveDate) -> StoreResult<()>;
}

/// Composed store contract the snapshot service consumes.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Returns the snapshot for `date`, or `None` when the date was never
    /// visited. Absence is not an error.
    async fn load(&self, date: NaiveDate) -> StoreResult<Option<DaySnapshot>>;
    async fn save(&self, snapshot: &DaySnapshot) -> StoreResult<()>;
    async fn delete(&self, date: NaiveDate) -> StoreResult<()>;
}

// Tiers are often shared between a composed store and test assertions.

#[async_trait]
impl<T: CacheTier + ?Sized> CacheTier for std::sync::Arc<T> {
    async fn load(&self, date: NaiveDate) -> Option<DaySnapshot> {
        (**self).load(date).await
    }

    async fn save(&self, snapshot: &DaySnapshot) {
        (**self).save(snapshot).await;
    }

    async fn delete(&self, date: NaiveDate) {
        (**self).delete(date).await;
    }
}

#[async_trait]
impl<T: DurableTier + ?Sized> DurableTier for std::sync::Arc<T> {
    async fn load(&self, date: NaiveDate) -> StoreResult<Option<DaySnapshot>> {
        (**self).load(date).await
    }

    async fn save(&self, snapshot: &DaySnapshot) -> StoreResult<()> {
        (**self).save(snapshot).await
    }

    async fn delete(&self, date: NaiveDate) -> StoreResult<()> {
        (**self).delete(date).await
    }
}
