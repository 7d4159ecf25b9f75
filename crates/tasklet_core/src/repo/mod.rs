//! Persistence bridge abstractions and SQLite implementation.
//!
//! # Responsibility
//! - Define the snapshot load/save contract the state store depends on.
//! - Isolate SQL and JSON codec details from state orchestration.
//!
//! # Invariants
//! - Absent or undecodable snapshots yield documented defaults, never errors.
//! - Substrate I/O failures surface as typed `RepoError` values.
//!
//! # See also
//! - docs/architecture/storage.md

pub mod snapshot_repo;
