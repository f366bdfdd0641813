//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::OnceLock;

use tempfile::TempDir;
use tokio::net::TcpListener;

use vitals::config::LoggingConfig;
use vitals::http::HttpServer;
use vitals::lifecycle::Shutdown;
use vitals::logging;

/// Log directory shared by every test in this binary.
///
/// The subscriber is process-global, so it is installed exactly once; all
/// service instances spawned here log into the same sinks.
fn shared_log_dir() -> PathBuf {
    static LOGS: OnceLock<(TempDir, PathBuf)> = OnceLock::new();
    let (_, path) = LOGS.get_or_init(|| {
        let dir = TempDir::new().expect("create temp log dir");
        let path = dir.path().join("logs");
        let config = LoggingConfig {
            dir: path.clone(),
            ..LoggingConfig::default()
        };
        logging::init(&config).expect("install test logging");
        (dir, path)
    });
    path.clone()
}

/// A running service instance bound to an ephemeral port.
pub struct TestService {
    pub base_url: String,
    pub log_dir: PathBuf,
    shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn app_log(&self) -> String {
        std::fs::read_to_string(self.log_dir.join(logging::APP_LOG)).unwrap_or_default()
    }

    #[allow(dead_code)]
    pub fn error_log(&self) -> String {
        std::fs::read_to_string(self.log_dir.join(logging::ERROR_LOG)).unwrap_or_default()
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Spawn the production server on 127.0.0.1:0 with process-wide logging.
///
/// The listener is bound before this returns, so requests connect
/// immediately via the accept backlog.
pub async fn spawn_service() -> TestService {
    let log_dir = shared_log_dir();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr: SocketAddr = listener.local_addr().expect("listener address");

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = HttpServer::new().run(listener, receiver).await;
    });

    TestService {
        base_url: format!("http://{addr}"),
        log_dir,
        shutdown,
    }
}
