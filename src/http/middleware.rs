//! Request timing middleware.
//!
//! Wraps every route (and the not-found fallback) with entry/exit records
//! and wall-clock latency measurement. The middleware only observes: the
//! response passes through unmodified, and a downstream failure propagates
//! untouched without a completion record.

use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

/// Log entry and exit for one request, timing the downstream chain.
///
/// Emits exactly one `Request started` record per request and, provided the
/// downstream returns, exactly one `Request completed` record carrying the
/// status code and the elapsed seconds to four decimal places.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    info!("Request started: {} {}", method, path);

    let response = next.run(req).await;

    info!(
        "Request completed: {} {} - Status: {} - Time: {:.4}s",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
