//! Snapshot store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist one opaque serialized blob under one fixed key.
//! - Guard against connections whose schema was never migrated.
//!
//! # Invariants
//! - `load` reports a missing key as `None` instead of failing.
//! - `save` is a pure overwrite with no merge, versioning, or transaction log.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the task collection snapshot is stored.
pub const SNAPSHOT_KEY: &str = "tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for snapshot persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
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

/// Storage contract for the persisted task collection snapshot.
///
/// Implementations own the on-disk representation; callers treat the blob as
/// opaque and never consult the store for reads outside startup.
pub trait SnapshotStore {
    /// Returns the previously stored blob, or `None` if none exists.
    fn load(&self) -> StoreResult<Option<String>>;

    /// Overwrites the stored blob unconditionally.
    fn save(&self, blob: &str) -> StoreResult<()>;
}

/// SQLite-backed snapshot store bound to the fixed snapshot key.
///
/// Owns its connection; constructed once at application startup and held for
/// the process lifetime.
pub struct SqliteSnapshotStore {
    conn: Connection,
}

impl SqliteSnapshotStore {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `StoreError::UninitializedConnection` when the connection's schema
    ///   version does not match this binary's latest migration.
    /// - `StoreError::MissingRequiredTable` when the `snapshots` table is
    ///   absent despite a matching version.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        if !table_exists(&conn, "snapshots")? {
            return Err(StoreError::MissingRequiredTable("snapshots"));
        }

        Ok(Self { conn })
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn load(&self) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM snapshots WHERE key = ?1;")?;

        let mut rows = stmt.query([SNAPSHOT_KEY])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn save(&self, blob: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO snapshots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![SNAPSHOT_KEY, blob],
        )?;

        Ok(())
    }
}

fn table_exists(conn: &Connection, table_name: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
