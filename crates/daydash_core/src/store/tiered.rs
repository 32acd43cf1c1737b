//! Read-through/write-through composition of the two tiers.
//!
//! # Responsibility
//! - Implement the load/save/delete ordering the service relies on.
//!
//! # Invariants
//! - `load`: durable first; a hit is mirrored into the cache; a durable miss
//!   or outage falls back to the cache; both missing means "never visited".
//! - `save`: the cache write happens first and unconditionally, so a durable
//!   outage never loses the active session's edits.
//! - `delete`: cache removal happens even when the durable delete fails.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};

use crate::model::snapshot::DaySnapshot;

use super::{CacheTier, DurableTier, SnapshotStore, StoreResult};

/// Two-tier snapshot store: `C` close to the session, `D` durable.
pub struct TieredSnapshotStore<C, D> {
    cache: C,
    durable: D,
}

impl<C: CacheTier, D: DurableTier> TieredSnapshotStore<C, D> {
    pub fn new(cache: C, durable: D) -> Self {
        Self { cache, durable }
    }
}

#[async_trait]
impl<C: CacheTier, D: DurableTier> SnapshotStore for TieredSnapshotStore<C, D> {
    async fn load(&self, date: NaiveDate) -> StoreResult<Option<DaySnapshot>> {
        match self.durable.load(date).await {
            Ok(Some(snapshot)) => {
                self.cache.save(&snapshot).await;
                debug!("event=store_load module=store status=ok date={date} tier=durable");
                return Ok(Some(snapshot));
            }
            Ok(None) => {}
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback date={date} error={err}"
                );
            }
        }

        Ok(self.cache.load(date).await)
    }

    async fn save(&self, snapshot: &DaySnapshot) -> StoreResult<()> {
        self.cache.save(snapshot).await;
        self.durable.save(snapshot).await
    }

    async fn delete(&self, date: NaiveDate) -> StoreResult<()> {
        self.cache.delete(date).await;
        self.durable.delete(date).await
    }
}
