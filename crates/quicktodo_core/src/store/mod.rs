//! Persistence adapter for the task collection snapshot.
//!
//! # Responsibility
//! - Define the blob storage contract used by the task list service.
//! - Keep SQLite access details inside the storage boundary.
//!
//! # Invariants
//! - A missing snapshot is a normal outcome, never an error.
//! - Writes overwrite unconditionally; last write wins.

pub mod snapshot_store;
