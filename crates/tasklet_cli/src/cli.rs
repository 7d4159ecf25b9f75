//! CLI argument parsing and task id resolution for tasklet.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklet_core::{Task, TaskId};

#[derive(Parser, Debug)]
#[command(name = "tasklet")]
#[command(author, version, about = "Persisted task tracker", long_about = None)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task text (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List all tasks
    List,

    /// Toggle a task's completion state
    Toggle {
        /// Task id, or a prefix that matches exactly one task
        #[arg(required = true)]
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task id, or a prefix that matches exactly one task
        #[arg(required = true)]
        id: String,
    },

    /// Toggle dark mode
    Theme,
}

/// Resolves user-entered id text to the id of exactly one task.
///
/// Accepts a full id or any prefix of its canonical hyphenated form. Returns
/// `None` when no task matches or the prefix is ambiguous; the core layer is
/// only ever handed exact ids.
pub fn resolve_task_id(tasks: &[Task], input: &str) -> Option<TaskId> {
    let needle = input.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut hits = tasks
        .iter()
        .filter(|task| task.id.to_string().starts_with(&needle));

    let first = hits.next()?;
    if hits.next().is_some() {
        return None;
    }
    Some(first.id)
}

#[cfg(test)]
mod tests {
    use super::resolve_task_id;
    use tasklet_core::{Task, TaskId};

    fn fixed_task(id: &str, text: &str) -> Task {
        Task::with_id(TaskId::parse_str(id).unwrap(), text)
    }

    #[test]
    fn resolves_full_id_and_unique_prefix() {
        let tasks = vec![
            fixed_task("aaaaaaaa-0000-4000-8000-000000000001", "a"),
            fixed_task("bbbbbbbb-0000-4000-8000-000000000002", "b"),
        ];

        assert_eq!(
            resolve_task_id(&tasks, "aaaaaaaa-0000-4000-8000-000000000001"),
            Some(tasks[0].id)
        );
        assert_eq!(resolve_task_id(&tasks, "bbbb"), Some(tasks[1].id));
        assert_eq!(resolve_task_id(&tasks, "BBBB"), Some(tasks[1].id));
    }

    #[test]
    fn rejects_ambiguous_missing_and_empty_input() {
        let tasks = vec![
            fixed_task("cccccccc-0000-4000-8000-000000000001", "a"),
            fixed_task("cccccccc-1111-4000-8000-000000000002", "b"),
        ];

        assert_eq!(resolve_task_id(&tasks, "cccccccc"), None);
        assert_eq!(resolve_task_id(&tasks, "dddd"), None);
        assert_eq!(resolve_task_id(&tasks, "   "), None);
    }
}
