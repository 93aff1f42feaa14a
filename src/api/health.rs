use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use super::envelope::epoch_seconds;

/// Name the service reports to cloud health probes.
const SERVICE_NAME: &str = "Parking AI System";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving
    pub status: String,
    /// Unix timestamp in fractional seconds
    pub timestamp: f64,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
}

/// Liveness probe. Depends on nothing and never fails.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: epoch_seconds(Utc::now()),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(health_check))
}
