//! File logging for the kundli binaries
//!
//! Logs go to `$XDG_STATE_HOME/kundli/` and rotate daily, one file per day
//! named `kundli.YYYY-MM-DD.log`. Only the newest `max_files` are kept.

use crate::config::{Config, LoggingConfig};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const FILE_PREFIX: &str = "kundli";
const FILE_SUFFIX: &str = "log";

/// Keeps the background writer alive. Pending lines are flushed on drop.
pub struct LoggingGuard {
    log_dir: PathBuf,
    _worker: WorkerGuard,
}

impl LoggingGuard {
    /// Directory the rotating log files are written to.
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Install the global subscriber writing to the rotating log file.
///
/// `RUST_LOG` takes precedence over `config.level`. Can only succeed once
/// per process.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard> {
    let log_dir = Config::state_dir();
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(FILE_PREFIX)
        .filename_suffix(FILE_SUFFIX)
        .max_log_files(config.max_files.max(1))
        .build(&log_dir)
        .map_err(|e| Error::Config(format!("failed to open log file: {}", e)))?;
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {}", e)))?;

    tracing::info!(log_dir = %log_dir.display(), level = %config.level, "Logging initialized");

    Ok(LoggingGuard {
        log_dir,
        _worker: worker,
    })
}

/// Rotated log files in `dir`, oldest first.
pub fn log_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(format!("{}.*.{}", FILE_PREFIX, FILE_SUFFIX));
    let entries = glob::glob(&pattern.to_string_lossy())
        .map_err(|e| Error::Config(format!("invalid log file pattern: {}", e)))?;

    // glob yields paths in alphabetical order; date stamps sort chronologically
    Ok(entries.flatten().filter(|path| path.is_file()).collect())
}
