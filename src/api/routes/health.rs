// Health Check Route

use crate::api::{models::response::HealthResponse, server::OPENAPI_PATH, state::AppState};
use axum::{extract::State, Json};
use std::sync::Arc;

/// Health check endpoint
///
/// Returns the health status of the service and its database
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, database) = match state.db.pool().ping().await {
        Ok(()) => ("healthy", "connected".to_string()),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            ("degraded", format!("error: {}", e))
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        database,
        openapi: state.config.enable_openapi.then(|| OPENAPI_PATH.to_string()),
    })
}
