//! Shared functionality for the sports-car sales services.
//!
//! This crate provides:
//! - Layered configuration loading
//! - Telemetry (structured logging) initialisation

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, DatabaseConfig, ServerConfig, TelemetryConfig};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
