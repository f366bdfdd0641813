//! Health-check service binary.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                    VITALS                      │
//!                    │                                                │
//!     Client Request │  ┌────────────┐   ┌────────┐   ┌───────────┐  │
//!     ───────────────┼─▶│  timing    │──▶│  CORS  │──▶│  handlers │  │
//!                    │  │ middleware │   │ layer  │   │  /health  │  │
//!     Client Response│  └─────┬──────┘   └────────┘   └─────┬─────┘  │
//!     ◀──────────────┼────────┘                             │        │
//!                    │        │ entry/exit records          │ record │
//!                    │        ▼                             ▼        │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │ logging: console + app.log + error.log   │ │
//!                    │  │ (one format, per-sink severity floors,   │ │
//!                    │  │  10 MiB size rotation × 5 backups)       │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use vitals::config::{load_config, ServiceConfig};
use vitals::http::HttpServer;
use vitals::lifecycle::Shutdown;
use vitals::logging;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "vitals", about = "Health-check service with request observability", version)]
struct Args {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    // Logging comes up before the listener; a broken stack aborts startup.
    let _log_guard = logging::init(&config.logging)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "vitals starting");
    tracing::info!(
        bind_address = %config.server.bind_address,
        log_dir = %config.logging.dir.display(),
        level = %config.logging.level,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signals();

    let server = HttpServer::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
