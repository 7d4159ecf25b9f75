//! CLI entry point for the tasklet task tracker.
//!
//! # Responsibility
//! - Wire the persisted state store to a terminal presentation surface.
//! - Keep command dispatch thin: every mutation goes through the core store.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use tasklet_core::db::open_db;
use tasklet_core::{SqliteSnapshotRepository, StateStore};

mod cli;
mod config;
mod render;

use cli::{resolve_task_id, Cli, Command};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.db.clone());

    setup_logging(cli.log_level.as_deref(), &config);
    info!("event=cli_start module=cli status=ok");

    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .context(format!("failed to create data directory {}", parent.display()))?;
        }
    }

    let conn = open_db(&config.db_path)
        .context(format!("failed to open database {}", config.db_path.display()))?;
    let repo = SqliteSnapshotRepository::try_new(&conn)?;
    let mut store = StateStore::initialize(repo);

    match cli.command {
        Command::Add { text } => {
            let raw = text.join(" ");
            match store.add(&raw)? {
                Some(id) => println!(
                    "{} Added task {}",
                    "✓".green(),
                    render::short_id(&id).cyan()
                ),
                None => println!("{}", "Nothing to add: task text is empty.".yellow()),
            }
        }
        Command::List => {}
        Command::Toggle { id } => match resolve_task_id(store.tasks(), &id) {
            Some(task_id) => {
                store.toggle(task_id)?;
                println!(
                    "{} Toggled task {}",
                    "✓".green(),
                    render::short_id(&task_id).cyan()
                );
            }
            None => println!("{} No single task matches `{id}`", "!".yellow()),
        },
        Command::Rm { id } => match resolve_task_id(store.tasks(), &id) {
            Some(task_id) => {
                store.remove(task_id)?;
                println!(
                    "{} Removed task {}",
                    "✓".green(),
                    render::short_id(&task_id).cyan()
                );
            }
            None => println!("{} No single task matches `{id}`", "!".yellow()),
        },
        Command::Theme => {
            let dark_mode = store.toggle_dark_mode()?;
            let state = if dark_mode { "on" } else { "off" };
            println!("{} Dark mode {state}", "✓".green());
        }
    }

    render::render_list(store.tasks(), store.dark_mode());
    Ok(())
}

fn setup_logging(level_override: Option<&str>, config: &Config) {
    let level = level_override
        .map(str::to_string)
        .unwrap_or_else(|| tasklet_core::default_log_level().to_string());
    let log_dir = config.log_dir.display().to_string();

    // File logging is best-effort for a CLI session; a read-only or relative
    // data directory must not block the command itself.
    if let Err(err) = tasklet_core::init_logging(&level, &log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
}
