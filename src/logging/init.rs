//! Logging bootstrap.
//!
//! # Responsibilities
//! - Create the log directory (with parents) before any sink opens
//! - Open the rotating `app.log` and `error.log` sinks
//! - Install the process-wide subscriber: console plus both files, one
//!   shared line format, per-sink severity filters
//!
//! # Design Decisions
//! - A broken logging stack is fatal at startup; the service must not take
//!   traffic it cannot observe
//! - Per-record write failures stay inside the subscriber and never reach
//!   the request path
//! - `RUST_LOG` overrides the configured baseline level

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::logging::format::LineFormat;
use crate::logging::rotation::RollingWriter;

/// Primary sink file name: everything at INFO and above.
pub const APP_LOG: &str = "app.log";
/// Error sink file name: ERROR and above only.
pub const ERROR_LOG: &str = "error.log";

/// Failure to bring up the logging stack. Always fatal to startup.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to open log file {}: {source}", path.display())]
    OpenSink { path: PathBuf, source: io::Error },
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Keeps the file sinks alive and flushes them when the process winds down.
///
/// Hold it in `main` for the lifetime of the service.
#[derive(Debug)]
pub struct LogGuard {
    app: RollingWriter,
    error: RollingWriter,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        use std::io::Write;
        let _ = self.app.flush();
        let _ = self.error.flush();
    }
}

/// Install the process-wide logging stack.
///
/// Three sinks share one [`LineFormat`]: the console (stdout) carries no
/// filter of its own, `app.log` takes INFO and above, `error.log` takes
/// ERROR and above. The baseline filter comes from `RUST_LOG` when set and
/// from `config.level` otherwise; records below the baseline are dropped
/// before any sink sees them.
///
/// Fails if the log directory cannot be created, a sink cannot be opened,
/// or a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<LogGuard, LoggingError> {
    std::fs::create_dir_all(&config.dir).map_err(|source| LoggingError::CreateDir {
        path: config.dir.clone(),
        source,
    })?;

    let app = open_sink(config, APP_LOG)?;
    let error = open_sink(config, ERROR_LOG)?;

    let baseline =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console_layer = fmt::layer()
        .event_format(LineFormat)
        .with_writer(io::stdout);
    let app_layer = fmt::layer()
        .event_format(LineFormat)
        .with_writer({
            let writer = app.clone();
            move || writer.clone()
        })
        .with_filter(LevelFilter::INFO);
    let error_layer = fmt::layer()
        .event_format(LineFormat)
        .with_writer({
            let writer = error.clone();
            move || writer.clone()
        })
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(baseline)
        .with(console_layer)
        .with(app_layer)
        .with(error_layer)
        .try_init()?;

    Ok(LogGuard { app, error })
}

fn open_sink(config: &LoggingConfig, name: &str) -> Result<RollingWriter, LoggingError> {
    let path = config.dir.join(name);
    RollingWriter::open(&path, config.max_file_size, config.max_backups)
        .map_err(|source| LoggingError::OpenSink { path, source })
}
