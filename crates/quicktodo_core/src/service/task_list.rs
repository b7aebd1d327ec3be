//! Task list use-case service.
//!
//! # Responsibility
//! - Own the in-memory task collection as the single source of truth.
//! - Write the full collection through to the snapshot store at the end of
//!   each state-changing mutation.
//!
//! # Invariants
//! - Task ids in the collection are pairwise distinct.
//! - Insertion order is preserved; new tasks append at the end.
//! - The snapshot is read exactly once, during `initialize`.
//! - A failed persistence write never rolls back an in-memory mutation.

use crate::model::task::{Task, TaskId};
use crate::snapshot::{decode_snapshot, encode_snapshot};
use crate::store::snapshot_store::SnapshotStore;
use log::{debug, error, info, warn};

/// In-memory task collection controller with write-through persistence.
///
/// The store instance is injected once at construction and held for the
/// service lifetime.
pub struct TaskListService<S: SnapshotStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: SnapshotStore> TaskListService<S> {
    /// Creates a service with an empty collection.
    ///
    /// Call `initialize` to seed state from a previously stored snapshot.
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: Vec::new(),
        }
    }

    /// Seeds the collection from the stored snapshot.
    ///
    /// A missing snapshot, a load failure, and an undecodable blob all leave
    /// the collection empty ("fresh install"); none of them is escalated.
    /// Returns the number of tasks restored.
    pub fn initialize(&mut self) -> usize {
        match self.store.load() {
            Ok(Some(blob)) => match decode_snapshot(&blob) {
                Ok(tasks) => {
                    self.tasks = tasks;
                    info!(
                        "event=snapshot_load module=service status=ok tasks={}",
                        self.tasks.len()
                    );
                }
                Err(err) => {
                    self.tasks.clear();
                    warn!(
                        "event=snapshot_load module=service status=error fallback=empty error={err}"
                    );
                }
            },
            Ok(None) => {
                self.tasks.clear();
                info!("event=snapshot_load module=service status=ok tasks=0 fresh_install=true");
            }
            Err(err) => {
                self.tasks.clear();
                warn!(
                    "event=snapshot_load module=service status=error fallback=empty error={err}"
                );
            }
        }
        self.tasks.len()
    }

    /// Appends a task built from raw user input.
    ///
    /// Blank input (empty or whitespace-only) is a no-op that triggers no
    /// persistence write. Returns the id of the created task, or `None` when
    /// the input was ignored.
    pub fn add_task(&mut self, raw_title: &str) -> Option<TaskId> {
        let task = match Task::new(raw_title) {
            Ok(task) => task,
            Err(_) => {
                debug!("event=task_add module=service status=ignored reason=blank_input");
                return None;
            }
        };

        let id = task.id;
        self.tasks.push(task);
        self.persist("task_add");
        Some(id)
    }

    /// Removes the task with the given id, preserving the relative order of
    /// the remaining tasks.
    ///
    /// An unknown id is a no-op that triggers no persistence write. Returns
    /// whether a task was removed.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_remove module=service status=ignored reason=unknown_id id={id}");
            return false;
        }

        self.persist("task_remove");
        true
    }

    /// Empties the collection unconditionally.
    pub fn remove_all(&mut self) {
        self.tasks.clear();
        self.persist("task_remove_all");
    }

    /// Current collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // One full-collection write per state-changing mutation, issued in
    // mutation order. Failures are logged and absorbed; the in-memory
    // collection stays authoritative for the session, so the next successful
    // write still carries the latest state.
    fn persist(&self, event: &str) {
        let blob = match encode_snapshot(&self.tasks) {
            Ok(blob) => blob,
            Err(err) => {
                error!("event={event} module=service status=error stage=encode error={err}");
                return;
            }
        };

        match self.store.save(&blob) {
            Ok(()) => debug!(
                "event={event} module=service status=ok tasks={}",
                self.tasks.len()
            ),
            Err(err) => {
                error!("event={event} module=service status=error stage=save error={err}");
            }
        }
    }
}
