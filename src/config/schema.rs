//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a config file.
//! Every field carries a default, so a missing or partial file still yields
//! the stock setup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,

    /// Log sink settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Log sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory holding `app.log`, `error.log` and their rotated backups.
    /// Created with parents at startup.
    pub dir: PathBuf,

    /// Baseline level (trace, debug, info, warn, error). Records below it
    /// never reach a sink; `RUST_LOG` overrides it when set.
    pub level: String,

    /// Size in bytes at which an active log file is rotated.
    pub max_file_size: u64,

    /// Number of rotated backups kept per file; the oldest is discarded.
    pub max_backups: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            level: "info".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10 MiB
            max_backups: 5,
        }
    }
}
