//! Tasklet core: the task list, its pure command handlers, and the
//! write-through snapshot persistence that backs them. Presentation layers
//! depend on this crate and on nothing below it.

pub mod commands;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use commands::{add_task, delete_task, toggle_task};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, TASKS_KEY, THEME_KEY,
};
pub use store::state_store::StateStore;

/// Cheap linkage probe for embedding layers.
pub fn ping() -> &'static str {
    "pong"
}

/// Version of the core crate, as baked in at compile time.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
