//! HTTP middleware components.
//!
//! This module provides middleware for request/response processing including:
//! - Request logging
//! - Request ID propagation
//! - Conversion of layer failures and panics into error responses

pub mod error_handler;
pub mod logging;
pub mod request_id;

pub use error_handler::{handle_middleware_error, handle_panic};
pub use logging::logging_middleware;
pub use request_id::{request_id_middleware, RequestId};
