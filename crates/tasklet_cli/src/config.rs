//! Runtime path configuration for the tasklet CLI.

use std::path::PathBuf;

const DB_FILE_NAME: &str = "tasklet.sqlite3";

/// Resolved filesystem locations for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file holding the `kv_entries` snapshots.
    pub db_path: PathBuf,
    /// Directory receiving the rolling log files.
    pub log_dir: PathBuf,
}

impl Config {
    /// Resolves paths from CLI overrides, defaulting under the platform
    /// data directory.
    pub fn resolve(db_override: Option<PathBuf>) -> Self {
        let data_dir = default_data_dir();
        Self {
            db_path: db_override.unwrap_or_else(|| data_dir.join(DB_FILE_NAME)),
            log_dir: data_dir.join("logs"),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasklet")
}
