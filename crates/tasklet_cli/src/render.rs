//! Terminal rendering for the task list.
//!
//! Rendering happens after every command, mirroring the render-on-change loop
//! of the tracker UI: mutate, persist, re-read from the store, print.

use colored::*;
use tasklet_core::{Task, TaskId};

const EMPTY_STATE_MESSAGE: &str = "No tasks yet. Add one to get started!";

/// Prints the current task list followed by a one-line status summary.
pub fn render_list(tasks: &[Task], dark_mode: bool) {
    if tasks.is_empty() {
        println!("{}", EMPTY_STATE_MESSAGE.dimmed());
    } else {
        for task in tasks {
            render_task(task);
        }
    }

    let open = tasks.iter().filter(|task| !task.completed).count();
    let theme = if dark_mode { "on" } else { "off" };
    println!(
        "{}",
        format!("{open} open / {} total; dark mode {theme}", tasks.len()).dimmed()
    );
}

fn render_task(task: &Task) {
    let marker = if task.completed {
        "[x]".green()
    } else {
        "[ ]".normal()
    };
    let text = if task.completed {
        task.text.dimmed().strikethrough()
    } else {
        task.text.normal()
    };
    println!("{marker} {text}  {}", short_id(&task.id).dimmed());
}

/// First group of the hyphenated id form; enough to address a task by prefix.
pub fn short_id(id: &TaskId) -> String {
    id.to_string().chars().take(8).collect()
}
