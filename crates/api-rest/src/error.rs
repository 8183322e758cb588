//! HTTP error handling and conversion.
//!
//! This module provides error types for the REST API and implements
//! conversion from domain and infrastructure errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sportscar_sales_domain::ViewError;
use sportscar_sales_infrastructure::Error as InfrastructureError;
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Message returned for every rejected or failed view request
pub const INVALID_VIEW_MESSAGE: &str = "Invalid or nonexistent view";

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Datastore failure while listing or creating rows
    #[error("{}", .0.datastore_message())]
    Repository(#[from] InfrastructureError),

    /// Request body could not be decoded into the create payload
    #[error("{0}")]
    InvalidBody(String),

    /// View name outside the allow-list, or a failed view query
    #[error("Invalid or nonexistent view")]
    InvalidView(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Payload too large
    #[error("Payload too large")]
    PayloadTooLarge,

    /// Service unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Repository(_) | Self::InvalidBody(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::InvalidView(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(_) => "DATABASE_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidView(_) => "INVALID_VIEW",
            Self::Timeout => "TIMEOUT",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Standardized error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,

    /// Machine-readable error code
    pub code: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        match &self {
            Self::InvalidView(name) => {
                warn!(error_code, view = %name, "Rejected view request")
            }
            Self::Internal(details) => {
                error!(error_code, details = %details, "Request error")
            }
            _ if status.is_server_error() => error!(error_code, message = %message, "Request error"),
            _ => warn!(error_code, message = %message, "Request error"),
        }

        let body = ErrorResponse::new(error_code, message);

        (status, Json(body)).into_response()
    }
}

impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        match err {
            ViewError::Unknown(name) => Self::InvalidView(name),
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidView("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidBody("bad".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Timeout.status_code(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            ApiError::Repository(InfrastructureError::Configuration("closed".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_view_message_hides_name() {
        let err = ApiError::from(ViewError::Unknown("DROP TABLE clientes;--".into()));
        assert_eq!(err.to_string(), INVALID_VIEW_MESSAGE);
        assert_eq!(err.error_code(), "INVALID_VIEW");
    }

    #[test]
    fn test_repository_message_has_no_layer_prefix() {
        let err = ApiError::Repository(InfrastructureError::Configuration("pool closed".into()));
        assert_eq!(err.to_string(), "pool closed");
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("INVALID_VIEW", INVALID_VIEW_MESSAGE))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "Invalid or nonexistent view", "code": "INVALID_VIEW" })
        );
    }
}
