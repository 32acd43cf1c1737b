//! Domain model for the per-day dashboard snapshot.
//!
//! # Responsibility
//! - Define the canonical snapshot record and everything it owns.
//! - Keep one persisted shape shared by the cache and durable tiers.
//!
//! # Invariants
//! - A snapshot is identified by its calendar date; the store keeps at most
//!   one record per date.
//! - Locally authored objects (tasks, goals, checklist items, manual events)
//!   carry client-generated stable identifiers.

pub mod snapshot;
pub mod template;
