//! File logging for the tracker core.
//!
//! Logging is set up at most once per process: the first successful
//! `init_logging` call wins and later calls must agree with it. Log files
//! roll over by size and old files are pruned, so a long-lived data
//! directory stays bounded. A panic hook mirrors panics into the log with
//! the payload clipped, since panic messages can embed user-entered task
//! text.
//!
//! # See also
//! - docs/architecture/logging.md

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

const FILE_BASENAME: &str = "tasklet";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_FILES: usize = 5;
const PANIC_CLIP_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogging {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Validated logging configuration: a canonical level name plus an absolute
/// log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    dir: PathBuf,
}

impl LogSettings {
    fn parse(level: &str, dir: &str) -> Result<Self, String> {
        let level = match level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" | "warning" => "warn",
            "error" => "error",
            other => {
                return Err(format!(
                    "unsupported log level `{other}` (expected trace|debug|info|warn|error)"
                ))
            }
        };

        let dir = dir.trim();
        if dir.is_empty() {
            return Err("log directory cannot be empty".to_string());
        }
        let dir = PathBuf::from(dir);
        if !dir.is_absolute() {
            return Err(format!(
                "log directory must be absolute, got `{}`",
                dir.display()
            ));
        }

        Ok(Self { level, dir })
    }
}

/// Starts rolling file logging under `log_dir` at the given level.
///
/// Idempotent for the configuration that is already active; a call asking
/// for a different level or directory is rejected with an explanatory
/// message rather than silently reconfiguring a live logger. Never panics.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let wanted = LogSettings::parse(level, log_dir)?;

    let active = ACTIVE.get_or_try_init(|| start_logger(wanted.clone()))?;

    // Either we initialized just now, or an earlier (possibly concurrent)
    // call did; in both cases the surviving settings must match the request.
    if active.settings != wanted {
        return Err(format!(
            "logging already active with level `{}` at `{}`; refusing to switch to level `{}` at `{}`",
            active.settings.level,
            active.settings.dir.display(),
            wanted.level,
            wanted.dir.display()
        ));
    }
    Ok(())
}

fn start_logger(settings: LogSettings) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&settings.dir).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            settings.dir.display()
        )
    })?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", settings.level))?
        .log_to_file(
            FileSpec::default()
                .directory(&settings.dir)
                .basename(FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // detailed_format prefixes timestamp + source location.
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=logging_init module=core status=ok level={} log_dir={} version={} build={}",
        settings.level,
        settings.dir.display(),
        env!("CARGO_PKG_VERSION"),
        build_mode()
    );

    Ok(ActiveLogging {
        settings,
        _handle: handle,
    })
}

/// Returns `(level, log_dir)` of the active logger, or `None` before init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.settings.level, active.settings.dir.clone()))
}

/// Default file-log level: `debug` in debug builds, `info` in release.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let inner = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic module=core status=error location={location} payload={}",
            clip_payload(panic_info)
        );
        inner(panic_info);
    }));
}

fn clip_payload(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    clip_line(&payload, PANIC_CLIP_CHARS)
}

fn clip_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut clipped: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        clipped.push_str("...");
    }
    clipped
}
