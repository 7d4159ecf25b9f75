//! Pure command handlers over a task list.
//!
//! # Responsibility
//! - Transform a task list in response to user intents (add/toggle/delete).
//! - Keep every transformation total: no I/O, no errors, no panics.
//!
//! # Invariants
//! - Handlers never mutate their input; they return a rebuilt list.
//! - Insertion order is preserved; new tasks are appended at the end.
//! - An id that matches no task leaves the list content-equal (silent no-op).
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::task::{Task, TaskId};

/// Appends a new task built from `raw_text`.
///
/// # Contract
/// - `raw_text` is trimmed first; input that trims to empty is rejected and
///   the list is returned unchanged. This is the only validation rule in the
///   system.
/// - The new task gets a freshly generated id, the trimmed text and
///   `completed = false`, and is appended after all existing tasks.
/// - Existing tasks keep their order, ids and values.
pub fn add_task(list: &[Task], raw_text: &str) -> Vec<Task> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return list.to_vec();
    }

    let mut next = list.to_vec();
    next.push(Task::new(trimmed));
    next
}

/// Flips the completion flag of the task with the given id.
///
/// # Contract
/// - Exactly the matching task has `completed` inverted; every other task is
///   carried over unchanged.
/// - Length and id order are preserved.
/// - An unknown id yields a list content-equal to the input.
pub fn toggle_task(list: &[Task], id: TaskId) -> Vec<Task> {
    list.iter()
        .map(|task| {
            if task.id == id {
                task.toggled()
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Removes the task with the given id.
///
/// # Contract
/// - The matching task is dropped; the relative order of the remaining tasks
///   is preserved.
/// - An unknown id yields a list content-equal to the input.
pub fn delete_task(list: &[Task], id: TaskId) -> Vec<Task> {
    list.iter()
        .filter(|task| task.id != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::add_task;

    #[test]
    fn add_task_trims_surrounding_whitespace_only() {
        let next = add_task(&[], "  water the plants\t");
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].text, "water the plants");
    }

    #[test]
    fn add_task_keeps_interior_whitespace() {
        let next = add_task(&[], "  a   b  ");
        assert_eq!(next[0].text, "a   b");
    }

    #[test]
    fn add_task_rejects_all_whitespace_variants() {
        for input in ["", " ", "   ", "\t", "\n", " \t\r\n "] {
            assert!(add_task(&[], input).is_empty(), "input {input:?} slipped through");
        }
    }
}
