//! In-memory durable tier with failure and latency injection.
//!
//! Backs unit and integration tests that need a controllable durable tier:
//! outage simulation for fallback paths and per-date latency for
//! stale-load-guard coverage. Also usable as a throwaway store in demos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::snapshot::DaySnapshot;

use super::{DurableTier, SnapshotStore, StoreError, StoreResult};

/// Durable tier keeping serialized records in a map.
#[derive(Default)]
pub struct MemoryDurableStore {
    records: Mutex<HashMap<NaiveDate, String>>,
    save_count: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    load_delays: Mutex<HashMap<NaiveDate, Duration>>,
}

impl MemoryDurableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent load return an error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent save/delete return an error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Delays loads of `date` by `delay` before responding.
    pub fn set_load_delay(&self, date: NaiveDate, delay: Duration) {
        self.load_delays
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(date, delay);
    }

    /// Number of successful saves since construction.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Returns the stored record for `date`, if any, bypassing failure
    /// injection. Intended for test assertions.
    pub fn stored(&self, date: NaiveDate) -> Option<DaySnapshot> {
        let records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records
            .get(&date)
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

#[async_trait]
impl DurableTier for MemoryDurableStore {
    async fn load(&self, date: NaiveDate) -> StoreResult<Option<DaySnapshot>> {
        let delay = {
            let delays = self
                .load_delays
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            delays.get(&date).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected read failure".to_string()));
        }

        let raw = {
            let records = self
                .records
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            records.get(&date).cloned()
        };
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, snapshot: &DaySnapshot) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "injected write failure".to_string(),
            ));
        }

        let payload = serde_json::to_string(snapshot)?;
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(snapshot.date, payload);
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, date: NaiveDate) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "injected write failure".to_string(),
            ));
        }

        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&date);
        Ok(())
    }
}

// Usable as a single-tier store directly; handy in tests and demos.
#[async_trait]
impl SnapshotStore for MemoryDurableStore {
    async fn load(&self, date: NaiveDate) -> StoreResult<Option<DaySnapshot>> {
        DurableTier::load(self, date).await
    }

    async fn save(&self, snapshot: &DaySnapshot) -> StoreResult<()> {
        DurableTier::save(self, snapshot).await
    }

    async fn delete(&self, date: NaiveDate) -> StoreResult<()> {
        DurableTier::delete(self, date).await
    }
}
