//! Root endpoint.

use crate::state::AppState;
use axum::{routing::get, Router};

/// Plain-text banner served at `/`
pub const BANNER: &str = "🚗 API - Sistema de Vendas de Carros Esportivos";

/// Root routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(banner))
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service banner", body = String, content_type = "text/plain")
    )
)]
pub async fn banner() -> &'static str {
    BANNER
}
