//! Conversion of layer failures and panics into error responses.

use crate::error::{ApiError, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use tracing::error;

/// Map an error raised by a tower layer (e.g. the request timeout) to an
/// [`ApiError`]
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

/// Handle panics and convert to 500 errors
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!(details = %details, "Handler panicked");

    let body = ErrorResponse::new("INTERNAL_ERROR", "Internal server error");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_layer_error_is_internal() {
        let err: BoxError = "connection reset".into();
        let api_error = handle_middleware_error(err).await;
        assert!(matches!(api_error, ApiError::Internal(ref d) if d == "connection reset"));
    }

    #[test]
    fn test_panic_becomes_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
