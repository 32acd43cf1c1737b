//! Snapshot orchestration services.
//!
//! # Responsibility
//! - Own the in-memory snapshot for the active date and every controlled
//!   mutation of it.
//! - Keep UI layers decoupled from store and provider details.

pub mod snapshot_service;
pub mod summary;
