//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Mirror state store content to durable key-value storage and back.
//! - Keep the persisted JSON layout (`"tasks"` array, `"darkMode"` boolean)
//!   inside this persistence boundary.
//!
//! # Invariants
//! - An absent key decodes to the documented default (`[]` / `false`).
//! - A value that fails to decode is treated as absent: the default is
//!   returned and a warn event is emitted, but no error is raised.
//! - Save paths write the full snapshot; there are no partial updates.
//!
//! # See also
//! - docs/architecture/storage.md

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::task::Task;
use log::warn;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the JSON array of persisted tasks.
pub const TASKS_KEY: &str = "tasks";
/// Storage key holding the JSON boolean theme flag.
///
/// The camel-case name is kept verbatim for compatibility with snapshots
/// written by earlier versions of the tracker.
pub const THEME_KEY: &str = "darkMode";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot payload: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: expected schema version {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Persistence contract between the state store and durable storage.
pub trait SnapshotRepository {
    /// Loads the persisted task list; absent or corrupt snapshots yield `[]`.
    fn load_tasks(&self) -> RepoResult<Vec<Task>>;
    /// Persists the full task list under the tasks key.
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
    /// Loads the persisted theme flag; absent or corrupt values yield `false`.
    fn load_theme(&self) -> RepoResult<bool>;
    /// Persists the theme flag under the theme key.
    fn save_theme(&self, dark_mode: bool) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the `kv_entries` table.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version does not match
    ///   this binary's latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the key-value
    ///   schema is incomplete despite the version stamp.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn kv_get(&self, key: &str) -> RepoResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_entries WHERE key = ?1;")?;

        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get("value")?));
        }

        Ok(None)
    }

    fn kv_put(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;

        Ok(())
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        let raw = match self.kv_get(TASKS_KEY)? {
            Some(value) => value,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "event=snapshot_decode module=repo status=recovered key={TASKS_KEY} fallback=empty_list error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        let payload = serde_json::to_string(tasks)?;
        self.kv_put(TASKS_KEY, &payload)
    }

    fn load_theme(&self) -> RepoResult<bool> {
        let raw = match self.kv_get(THEME_KEY)? {
            Some(value) => value,
            None => return Ok(false),
        };

        match serde_json::from_str::<bool>(&raw) {
            Ok(flag) => Ok(flag),
            Err(err) => {
                warn!(
                    "event=snapshot_decode module=repo status=recovered key={THEME_KEY} fallback=false error={err}"
                );
                Ok(false)
            }
        }
    }

    fn save_theme(&self, dark_mode: bool) -> RepoResult<()> {
        let payload = serde_json::to_string(&dark_mode)?;
        self.kv_put(THEME_KEY, &payload)
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "kv_entries")? {
        return Err(RepoError::MissingRequiredTable("kv_entries"));
    }

    for column in ["key", "value", "updated_at"] {
        if !table_has_column(conn, "kv_entries", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "kv_entries",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
