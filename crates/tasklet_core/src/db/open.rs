//! Connection opening and bootstrap.
//!
//! Both entry points hand back a connection that is fully migrated and has
//! its pragmas applied; a connection that fails any bootstrap step is never
//! surfaced to callers. Each open is traced with a `db_open` event carrying
//! the backing mode and elapsed time.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if needed) the snapshot database file and migrates it.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    bootstrapped("file", || Connection::open(path))
}

/// Opens a fresh in-memory snapshot database, mainly for tests.
pub fn open_db_in_memory() -> DbResult<Connection> {
    bootstrapped("memory", Connection::open_in_memory)
}

fn bootstrapped(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let clock = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result = connect().map_err(Into::into).and_then(|mut conn| {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        apply_migrations(&mut conn)?;
        Ok(conn)
    });

    let elapsed = clock.elapsed().as_millis();
    match &result {
        Ok(_) => info!("event=db_open module=db status=ok mode={mode} duration_ms={elapsed}"),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={elapsed} error={err}"
        ),
    }
    result
}
