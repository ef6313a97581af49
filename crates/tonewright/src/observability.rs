//! Logging and tracing setup.
//!
//! Two layers share one [`EnvFilter`]: human-readable events on stderr
//! (warnings and errors only unless `-v` is given) and JSON lines in a log
//! file. stdout is never written to, so the MCP stdio transport stays clean.
//!
//! The log file location is resolved in order:
//! 1. `TONEWRIGHT_LOG_PATH` (an explicit file, never rotated)
//! 2. `TONEWRIGHT_LOG_DIR` (daily rotation)
//! 3. `log_dir` from the configuration
//! 4. the platform's local data directory, under `logs/`

use std::path::{Path, PathBuf};

use anyhow::Context;
use tonewright_core::config::user_data_local_dir;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_PREFIX: &str = "tonewright";
const LOG_PATH_ENV: &str = "TONEWRIGHT_LOG_PATH";
const LOG_DIR_ENV: &str = "TONEWRIGHT_LOG_DIR";
/// Rotated log files kept on disk.
const MAX_LOG_FILES: usize = 7;

/// Where JSONL logs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// One file, appended to forever.
    File(PathBuf),
    /// Daily-rotated files in a directory.
    Directory(PathBuf),
}

/// Resolved observability settings.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// JSONL destination; `None` disables file logging.
    pub target: Option<LogTarget>,
}

impl ObservabilityConfig {
    /// Resolve the log target from the environment, falling back to the
    /// configured directory and then the platform default.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let target = env_path(LOG_PATH_ENV)
            .map(LogTarget::File)
            .or_else(|| env_path(LOG_DIR_ENV).map(LogTarget::Directory))
            .or_else(|| config_log_dir.map(LogTarget::Directory))
            .or_else(|| default_log_dir().map(LogTarget::Directory));
        Self { target }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn default_log_dir() -> Option<PathBuf> {
    user_data_local_dir().map(|dir| dir.join("logs").into_std_path_buf())
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, `-v` debug,
/// `-vv` trace, and the configured level applies by default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Cap for the stderr layer, on top of the shared filter.
pub const fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose == 0 {
        LevelFilter::WARN
    } else {
        LevelFilter::TRACE
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// lines are flushed. A log file that cannot be opened disables the file
/// layer rather than failing the command.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    stderr_cap: LevelFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_cap);

    let file = config.target.as_ref().and_then(|target| {
        file_writer(target)
            .map_err(|err| eprintln!("warning: file logging disabled: {err:#}"))
            .ok()
    });
    let (file_layer, guard) = match file {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_current_span(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer(target: &LogTarget) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let appender = match target {
        LogTarget::File(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            build_appender(dir, Rotation::NEVER, &name.to_string_lossy(), None)?
        }
        LogTarget::Directory(dir) => build_appender(dir, Rotation::DAILY, LOG_FILE_PREFIX, Some("jsonl"))?,
    };
    Ok(tracing_appender::non_blocking(appender))
}

fn build_appender(
    dir: &Path,
    rotation: Rotation,
    prefix: &str,
    suffix: Option<&str>,
) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix)
        .max_log_files(MAX_LOG_FILES);
    if let Some(suffix) = suffix {
        builder = builder.filename_suffix(suffix);
    }
    builder
        .build(dir)
        .with_context(|| format!("failed to open log file in {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_is_quiet_by_default() {
        assert_eq!(stderr_level(false, 0), LevelFilter::WARN);
        assert_eq!(stderr_level(true, 3), LevelFilter::ERROR);
        assert_eq!(stderr_level(false, 1), LevelFilter::TRACE);
    }

    #[test]
    fn config_dir_used_when_env_unset() {
        if std::env::var_os(LOG_PATH_ENV).is_some() || std::env::var_os(LOG_DIR_ENV).is_some() {
            return;
        }
        let config = ObservabilityConfig::from_env_with_overrides(Some(PathBuf::from("/tmp/tw")));
        assert_eq!(
            config.target,
            Some(LogTarget::Directory(PathBuf::from("/tmp/tw")))
        );
    }

    #[test]
    fn file_writer_creates_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let result = file_writer(&LogTarget::Directory(dir.clone()));
        assert!(result.is_ok());
        assert!(dir.is_dir());
    }
}
