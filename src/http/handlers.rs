//! Route handlers.

use axum::Json;
use serde::Serialize;
use tracing::info;

/// Body of the health response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /health`: reports that the service is up.
///
/// Emits its own INFO record, separate from the timing middleware's
/// entry/exit pair, so one health call yields three log lines.
pub async fn health_check() -> Json<HealthStatus> {
    info!("Health check endpoint called");
    Json(HealthStatus { status: "ok" })
}
