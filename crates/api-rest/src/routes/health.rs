//! Health check endpoints.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Readiness check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Datastore check
    pub database: DatabaseCheck,
}

/// Result of probing the datastore through the pool
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DatabaseCheck {
    /// Whether `SELECT 1` succeeded
    pub healthy: bool,

    /// Probe latency in milliseconds
    pub latency_ms: u64,

    /// Open connections
    pub pool_size: u32,

    /// Idle connections
    pub idle_connections: usize,

    /// Failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

/// Basic health check
///
/// Returns service status and version information.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check
///
/// Probes the datastore through the connection pool.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Datastore reachable", body = ReadinessResponse),
        (status = 503, description = "Datastore unreachable", body = ReadinessResponse)
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let status = state.database.health_check().await;

    let response = ReadinessResponse {
        ready: status.healthy,
        database: DatabaseCheck {
            healthy: status.healthy,
            latency_ms: u64::try_from(status.latency.as_millis()).unwrap_or(u64::MAX),
            pool_size: status.pool_size,
            idle_connections: status.idle_connections,
            error: status.error,
        },
    };

    let code = if response.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
