//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its creation defaults.
//! - Provide the pure completion-flip helper used by the command handlers.
//!
//! # Invariants
//! - `id` is stable for the task's lifetime and never reused for another task.
//! - `text` is immutable after creation and assumed trimmed and non-empty;
//!   `commands::add_task` is the only creation gate in the application flow.
//! - `completed` starts as `false`.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Canonical task record.
///
/// The serde field names double as the persisted wire layout: the `"tasks"`
/// snapshot is a JSON array of exactly these three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for toggle/delete addressing.
    pub id: TaskId,
    /// Display text. Trimmed at creation, never edited afterwards.
    pub text: String,
    /// Completion flag. Flipped by toggle, never set any other way.
    pub completed: bool,
}

impl Task {
    /// Creates a new open task with a generated stable ID.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - Callers pass already-trimmed, non-empty text.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by deserialization fixtures and import paths where identity
    /// already exists externally.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Returns a copy of this task with the completion flag inverted.
    ///
    /// Identity and text are preserved; the original is left untouched so
    /// handlers can rebuild lists without in-place mutation.
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            completed: !self.completed,
        }
    }
}
