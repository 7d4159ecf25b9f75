//! Schema migrations for the key-value snapshot store.
//!
//! Migrations are `(version, ddl)` pairs registered in strictly increasing
//! order and applied inside a single transaction; the reached version is
//! stamped into `PRAGMA user_version` as part of that transaction, so a
//! half-applied upgrade can never be observed after a crash. A database
//! stamped with a version this build does not know is rejected outright
//! rather than guessed at.
//!
//! # See also
//! - docs/architecture/storage.md

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

const MIGRATIONS: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Highest schema version this build knows how to produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |&(version, _)| version)
}

/// Brings the connection's schema up to [`latest_version`].
///
/// Already-current databases are left untouched; newer ones are rejected
/// with [`DbError::UnsupportedSchemaVersion`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stamped = stamped_version(conn)?;
    let target = latest_version();

    if stamped > target {
        return Err(DbError::UnsupportedSchemaVersion {
            found: stamped,
            supported: target,
        });
    }
    if stamped == target {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for &(version, ddl) in MIGRATIONS.iter().filter(|&&(v, _)| v > stamped) {
        tx.execute_batch(ddl)?;
        tx.execute_batch(&format!("PRAGMA user_version = {version};"))?;
    }
    tx.commit()?;

    Ok(())
}

fn stamped_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}
