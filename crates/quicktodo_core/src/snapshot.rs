//! Persisted snapshot codec for the task collection.
//!
//! # Responsibility
//! - Serialize the ordered task collection into one opaque JSON blob.
//! - Decode and validate blobs read back from the store.
//!
//! # Invariants
//! - Encoding preserves insertion order.
//! - Decoded collections never contain duplicate ids or blank titles.

use crate::model::task::Task;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Failure while encoding or decoding a persisted snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    /// Blob was not a JSON array of task records.
    Malformed(serde_json::Error),
    /// Blob decoded structurally but violated a collection invariant.
    Invalid(String),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed snapshot: {err}"),
            Self::Invalid(message) => write!(f, "invalid snapshot: {message}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

/// Encodes the task collection as a JSON array of `{id, title}` records.
///
/// # Errors
/// - `SnapshotError::Malformed` when serialization fails.
pub fn encode_snapshot(tasks: &[Task]) -> SnapshotResult<String> {
    serde_json::to_string(tasks).map_err(SnapshotError::Malformed)
}

/// Decodes a stored blob back into an ordered task collection.
///
/// Record order in the blob becomes collection order, so a round trip
/// through `encode_snapshot` is observably identity.
///
/// # Errors
/// - `SnapshotError::Malformed` when the blob is not a JSON task array.
/// - `SnapshotError::Invalid` when a record fails task validation or an id
///   appears more than once.
pub fn decode_snapshot(blob: &str) -> SnapshotResult<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(blob).map_err(SnapshotError::Malformed)?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        task.validate()
            .map_err(|err| SnapshotError::Invalid(format!("task {}: {err}", task.id)))?;
        if !seen.insert(task.id) {
            return Err(SnapshotError::Invalid(format!(
                "duplicate task id {}",
                task.id
            )));
        }
    }

    Ok(tasks)
}
