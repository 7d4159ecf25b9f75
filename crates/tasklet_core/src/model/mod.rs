//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the canonical task record used by handlers, store and storage.
//! - Keep the persisted wire shape (`id`/`text`/`completed`) in one place.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - Deleting a task removes it for good; there is no tombstone state.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod task;
