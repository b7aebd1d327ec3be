//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record for a single to-do item.
//! - Enforce title and identity invariants at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is stored trimmed and is never empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failure for constructed or decoded task data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title was empty or whitespace-only after trimming.
    EmptyTitle,
    /// Task id was the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::NilId => write!(f, "task id cannot be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do item.
///
/// Both fields are immutable after creation. There is no edit feature, so a
/// task is only ever appended or removed, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID used for deletion targeting and persistence.
    pub id: TaskId,
    /// User-supplied title, stored trimmed.
    pub title: String,
}

impl Task {
    /// Creates a task from raw user input with a freshly generated ID.
    ///
    /// The input is trimmed before validation, so surrounding whitespace
    /// never reaches the collection.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when the trimmed input is empty.
    pub fn new(raw_title: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), raw_title)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by decode paths where identity already exists in a snapshot.
    ///
    /// # Errors
    /// - `TaskValidationError::NilId` when `id` is the nil UUID.
    /// - `TaskValidationError::EmptyTitle` when the trimmed title is empty.
    pub fn with_id(id: TaskId, raw_title: &str) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: raw_title.trim().to_string(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Re-checks task invariants.
    ///
    /// Decode paths call this so invalid persisted state is rejected instead
    /// of masked.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}
