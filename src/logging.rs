//! Log sink setup.
//!
//! Every run appends structured events to a log file through a non-blocking
//! writer. A second, human-oriented layer on stderr is added when
//! `logging.console` (or `--verbose`) is set.
//!
//! Setup is an explicit step in `main`: the log directory is created here,
//! and any failure is returned instead of silently disabling logging.

use crate::config::LoggingConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot create log directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("log file path has no usable file name: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("cannot open log file {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },
    #[error("invalid log level '{level}': {reason}")]
    Level { level: String, reason: String },
    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the level filter for the configured level name.
pub fn level_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|e| LoggingError::Level {
        level: level.to_string(),
        reason: e.to_string(),
    })
}

/// Split the log file path into its directory and file name, creating the
/// directory if needed.
pub fn prepare_log_file(file: &Path) -> Result<(PathBuf, OsString), LoggingError> {
    let name = file
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(file.to_path_buf()))?
        .to_os_string();
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(|source| LoggingError::Directory {
        path: dir.clone(),
        source,
    })?;
    Ok((dir, name))
}

/// Open the log file for appending, without rotation.
pub fn open_log_file(file: &Path) -> Result<RollingFileAppender, LoggingError> {
    let (dir, name) = prepare_log_file(file)?;
    let name = name
        .to_str()
        .ok_or_else(|| LoggingError::InvalidPath(file.to_path_buf()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(&dir)
        .map_err(|e| LoggingError::Open {
            path: file.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Install the global subscriber.
///
/// Returns a guard that must be held for the duration of the program to
/// flush buffered events on exit.
pub fn setup_logging(config: &LoggingConfig) -> Result<WorkerGuard, LoggingError> {
    let filter = level_filter(&config.level)?;
    let file_appender = open_log_file(Path::new(&config.file))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let console_layer = config.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    tracing::debug!(
        file = %config.file,
        level = %config.level,
        console = config.console,
        "Logging initialized"
    );

    Ok(guard)
}
