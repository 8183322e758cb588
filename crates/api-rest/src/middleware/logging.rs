//! Access logging.

use axum::{
    body::Body,
    http::{Request, Response},
    middleware::Next,
};
use std::time::Instant;
use tracing::{info, warn, Instrument};

use super::request_id::RequestId;

/// Log one line per request with its outcome and latency.
///
/// Everything downstream runs inside a `request` span carrying the request
/// id, so repository logs can be correlated with the access line.
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    let span = tracing::info_span!("request", request_id = %request_id);
    let response = next.run(req).instrument(span).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match status {
        500.. => warn!(%request_id, %method, %path, status, elapsed_ms, "Request errored"),
        400..=499 => info!(%request_id, %method, %path, status, elapsed_ms, "Request rejected"),
        _ => info!(%request_id, %method, %path, status, elapsed_ms, "Request served"),
    }

    response
}
