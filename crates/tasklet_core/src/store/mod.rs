//! In-memory state orchestration.
//!
//! # Responsibility
//! - Own the authoritative task list and theme flag for a running session.
//! - Couple every state transition to a persistence write-through.
//!
//! # Invariants
//! - All transformations go through the pure command handlers.
//! - Consumers only ever see whole snapshots, never partial mutations.

pub mod state_store;
