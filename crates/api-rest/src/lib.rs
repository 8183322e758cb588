//! Sports-Car Sales REST API
//!
//! This crate provides the Axum-based REST API over the dealership database:
//! list/create endpoints for the six entity tables, allow-listed analytical
//! views, health probes and an OpenAPI document.
//!
//! ## Architecture
//!
//! The API is organized into the following modules:
//!
//! - **app**: Application builder and middleware stack
//! - **cli**: Command-line flags of the binary
//! - **routes**: HTTP route handlers organized by concern
//! - **middleware**: Request/response middleware (request id, logging, errors)
//! - **extractors**: Custom Axum extractors
//! - **responses**: Standardized response types
//! - **error**: HTTP error handling and conversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sportscar_sales_api_rest::{create_app, AppState};
//! use sportscar_sales_common::AppConfig;
//! use sportscar_sales_infrastructure::{DatabaseConfig, DatabasePool};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load()?;
//!     let database = DatabasePool::with_schema(&DatabaseConfig::from(&config.database)).await?;
//!     let app = create_app(AppState::new(config.clone(), database));
//!
//!     let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::{create_app, ApiDoc};
pub use cli::Cli;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
