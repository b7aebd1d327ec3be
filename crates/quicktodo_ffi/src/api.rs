//! FFI use-case API for the mobile to-do screen.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI shell via FRB.
//! - Hold the process-wide task list controller behind a single lock.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The stored snapshot is read exactly once per process, on first use.
//! - Mutations are serialized; one handler runs at a time.

use quicktodo_core::db::open_db;
use quicktodo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    SqliteSnapshotStore, TaskListService,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

const APP_DB_FILE_NAME: &str = "quicktodo.sqlite3";
static APP_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static TASK_LIST: OnceLock<Mutex<Option<TaskListService<SqliteSnapshotStore>>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task row returned to the UI list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub id: String,
    /// Task title as entered (trimmed).
    pub title: String,
}

/// Response envelope for the task list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Current tasks in insertion order (empty on fresh install).
    pub items: Vec<TaskItem>,
    /// Human-readable message; carries the empty-state text when no tasks
    /// exist.
    pub message: String,
}

/// Generic action response envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation changed the collection.
    pub ok: bool,
    /// Optional affected task ID.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<String>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Adds a task from raw input text.
///
/// # FFI contract
/// - Sync call, DB-backed write-through execution.
/// - Blank input is ignored without an error dialog; `ok=false` with a
///   diagnostic message the shell may discard.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(title: String) -> TaskActionResponse {
    match with_task_list(|service| service.add_task(title.as_str())) {
        Ok(Some(id)) => TaskActionResponse::success("Task added.", Some(id.to_string())),
        Ok(None) => TaskActionResponse::failure("Blank task input ignored."),
        Err(err) => TaskActionResponse::failure(format!("add_task failed: {err}")),
    }
}

/// Returns the current task collection for rendering.
///
/// # FFI contract
/// - Sync call; reads in-memory state (storage is only read at startup).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks() -> TaskListResponse {
    match with_task_list(|service| {
        service
            .tasks()
            .iter()
            .map(|task| TaskItem {
                id: task.id.to_string(),
                title: task.title.clone(),
            })
            .collect::<Vec<_>>()
    }) {
        Ok(items) => {
            let message = if items.is_empty() {
                "No tasks yet!".to_string()
            } else {
                format!("{} task(s).", items.len())
            };
            TaskListResponse { items, message }
        }
        Err(err) => TaskListResponse {
            items: Vec::new(),
            message: format!("list_tasks failed: {err}"),
        },
    }
}

/// Removes one task by its stable ID.
///
/// # FFI contract
/// - Sync call, DB-backed write-through execution.
/// - Unknown or malformed ids are non-fatal no-ops.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_task(task_id: String) -> TaskActionResponse {
    let id = match Uuid::parse_str(task_id.trim()) {
        Ok(id) => id,
        Err(_) => return TaskActionResponse::failure(format!("invalid task id `{task_id}`")),
    };

    match with_task_list(|service| service.remove_task(id)) {
        Ok(true) => TaskActionResponse::success("Task removed.", Some(id.to_string())),
        Ok(false) => TaskActionResponse::failure("No task with that id."),
        Err(err) => TaskActionResponse::failure(format!("remove_task failed: {err}")),
    }
}

/// Removes every task.
///
/// # FFI contract
/// - Sync call, DB-backed write-through execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_all_tasks() -> TaskActionResponse {
    match with_task_list(|service| service.remove_all()) {
        Ok(()) => TaskActionResponse::success("All tasks removed.", None),
        Err(err) => TaskActionResponse::failure(format!("remove_all_tasks failed: {err}")),
    }
}

fn resolve_app_db_path() -> PathBuf {
    APP_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("QUICKTODO_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(APP_DB_FILE_NAME)
        })
        .clone()
}

fn build_task_list() -> Result<TaskListService<SqliteSnapshotStore>, String> {
    let db_path = resolve_app_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("app DB open failed: {err}"))?;
    let store = SqliteSnapshotStore::try_new(conn)
        .map_err(|err| format!("snapshot store init failed: {err}"))?;
    let mut service = TaskListService::new(store);
    let restored = service.initialize();
    log::info!("event=controller_init module=ffi status=ok tasks={restored}");
    Ok(service)
}

fn with_task_list<T>(
    f: impl FnOnce(&mut TaskListService<SqliteSnapshotStore>) -> T,
) -> Result<T, String> {
    let cell = TASK_LIST.get_or_init(|| Mutex::new(None));
    let mut guard = match cell.lock() {
        Ok(guard) => guard,
        // Never panic across the FFI boundary, even after a poisoned lock.
        Err(poisoned) => poisoned.into_inner(),
    };

    if guard.is_none() {
        *guard = Some(build_task_list()?);
    }

    match guard.as_mut() {
        Some(service) => Ok(f(service)),
        None => Err("task list controller unavailable".to_string()),
    }
}
