//! SQLite bootstrap for the snapshot store.
//!
//! # Responsibility
//! - Open and configure the connection the key-value snapshots live behind.
//! - Bring the schema up to date before anyone touches it.
//!
//! # Invariants
//! - The applied schema version is mirrored in `PRAGMA user_version`.
//! - Snapshots are never read or written through an unmigrated connection.
//!
//! # See also
//! - docs/architecture/storage.md

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure opening or migrating the snapshot database.
#[derive(Debug)]
pub enum DbError {
    /// Underlying SQLite failure (open, pragma, statement).
    Sqlite(rusqlite::Error),
    /// The file was stamped by a newer build; refusing to touch it.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "database schema version {found} is newer than this build supports ({supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
