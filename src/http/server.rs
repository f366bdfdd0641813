//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request timing, CORS)
//! - Bind the router to a listener
//! - Drain in-flight requests on shutdown
//!
//! # Design Decisions
//! - Axum runs the last-added layer first, so the timing middleware is
//!   added last: it wraps CORS and the not-found fallback, and every
//!   request (preflights included) gets an entry/exit record
//! - CORS mirrors the request origin with credentials allowed, the wire
//!   behavior of a fully permissive policy

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;

use crate::http::handlers::health_check;
use crate::http::middleware::log_requests;

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the full route table and layer stack.
    pub fn new() -> Self {
        Self {
            router: build_router(),
        }
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the Axum router with all routes and middleware layers.
///
/// Exposed so tests can drive the production router without a socket.
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .layer(CorsLayer::very_permissive())
        .layer(axum::middleware::from_fn(log_requests))
}
