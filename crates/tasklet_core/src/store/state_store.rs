//! State store: authoritative session state with write-through persistence.
//!
//! # Responsibility
//! - Hold the current task list and theme flag as the single source of truth.
//! - Dispatch user intents through the pure handlers and persist the result.
//!
//! # Invariants
//! - `initialize` never fails: load errors downgrade to documented defaults.
//! - Every accepted mutation is written through before the call returns.
//! - A persistence failure leaves the in-memory state authoritative; the
//!   error is propagated for reporting and the next write-through heals the
//!   stored mirror.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::commands;
use crate::model::task::{Task, TaskId};
use crate::repo::snapshot_repo::{RepoResult, SnapshotRepository};
use log::{debug, error, info, warn};

/// Session state facade over a snapshot repository.
pub struct StateStore<R: SnapshotRepository> {
    repo: R,
    tasks: Vec<Task>,
    dark_mode: bool,
}

impl<R: SnapshotRepository> StateStore<R> {
    /// Builds a store by loading persisted state through the repository.
    ///
    /// # Contract
    /// - Never fails. A load error falls back to the documented defaults
    ///   (empty list, light theme) and is surfaced as a warn event only.
    pub fn initialize(repo: R) -> Self {
        let tasks = match repo.load_tasks() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(
                    "event=state_init module=store status=recovered field=tasks fallback=empty_list error={err}"
                );
                Vec::new()
            }
        };

        let dark_mode = match repo.load_theme() {
            Ok(flag) => flag,
            Err(err) => {
                warn!(
                    "event=state_init module=store status=recovered field=dark_mode fallback=false error={err}"
                );
                false
            }
        };

        info!(
            "event=state_init module=store status=ok task_count={} dark_mode={dark_mode}",
            tasks.len()
        );

        Self {
            repo,
            tasks,
            dark_mode,
        }
    }

    /// Returns the current task list snapshot.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the current theme flag.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Replaces the task list wholesale and writes it through.
    ///
    /// No validation happens here; producing a well-formed list is the
    /// handlers' job.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) -> RepoResult<()> {
        self.tasks = tasks;
        if let Err(err) = self.repo.save_tasks(&self.tasks) {
            error!(
                "event=tasks_replace module=store status=error task_count={} error={err}",
                self.tasks.len()
            );
            return Err(err);
        }

        debug!(
            "event=tasks_replace module=store status=ok task_count={}",
            self.tasks.len()
        );
        Ok(())
    }

    /// Sets the theme flag and writes it through.
    ///
    /// Applying a visual theme marker is the presentation layer's concern.
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> RepoResult<()> {
        self.dark_mode = dark_mode;
        if let Err(err) = self.repo.save_theme(dark_mode) {
            error!("event=theme_set module=store status=error dark_mode={dark_mode} error={err}");
            return Err(err);
        }

        info!("event=theme_set module=store status=ok dark_mode={dark_mode}");
        Ok(())
    }

    /// Adds a task from raw user input.
    ///
    /// Returns the created id, or `None` when the input trimmed to empty and
    /// the add was silently rejected.
    pub fn add(&mut self, raw_text: &str) -> RepoResult<Option<TaskId>> {
        let next = commands::add_task(&self.tasks, raw_text);
        if next.len() == self.tasks.len() {
            debug!("event=task_add module=store status=noop reason=empty_text");
            return Ok(None);
        }

        let created = next.last().map(|task| task.id);
        self.replace_tasks(next)?;
        if let Some(id) = created {
            info!("event=task_add module=store status=ok task_id={id}");
        }
        Ok(created)
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Returns whether a task matched; an unknown id is a silent no-op.
    pub fn toggle(&mut self, id: TaskId) -> RepoResult<bool> {
        if !self.contains(id) {
            debug!("event=task_toggle module=store status=noop task_id={id}");
            return Ok(false);
        }

        let next = commands::toggle_task(&self.tasks, id);
        self.replace_tasks(next)?;
        info!("event=task_toggle module=store status=ok task_id={id}");
        Ok(true)
    }

    /// Deletes the task with the given id.
    ///
    /// Returns whether a task matched; an unknown id is a silent no-op.
    pub fn remove(&mut self, id: TaskId) -> RepoResult<bool> {
        if !self.contains(id) {
            debug!("event=task_delete module=store status=noop task_id={id}");
            return Ok(false);
        }

        let next = commands::delete_task(&self.tasks, id);
        self.replace_tasks(next)?;
        info!("event=task_delete module=store status=ok task_id={id}");
        Ok(true)
    }

    /// Flips the theme flag, persists it and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> RepoResult<bool> {
        let next = !self.dark_mode;
        self.set_dark_mode(next)?;
        Ok(next)
    }

    fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }
}
