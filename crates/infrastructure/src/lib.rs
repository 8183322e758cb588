//! Infrastructure layer for the sports-car sales API
//!
//! This crate provides implementations for:
//! - Database access (SQLite with sqlx)
//! - Schema bootstrap for the six tables and the named views
//! - Repository pattern implementations
//!
//! ## Architecture
//!
//! The infrastructure layer follows the repository pattern, providing concrete
//! implementations of data access that can be swapped for testing or different
//! storage backends.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sportscar_sales_domain::Vehicle;
//! use sportscar_sales_infrastructure::{
//!     database::{DatabaseConfig, DatabasePool},
//!     repositories::{ResourceRepository, SqliteResourceRepository},
//! };
//!
//! let pool = DatabasePool::with_schema(&DatabaseConfig::default()).await?;
//! let repo = SqliteResourceRepository::new(pool.pool().clone());
//! let vehicles = ResourceRepository::<Vehicle>::list(&repo).await?;
//! ```

pub mod database;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use database::{DatabaseConfig, DatabaseLocation, DatabasePool, HealthStatus, PoolStats};
pub use repositories::{
    JsonRow, ResourceRepository, SqliteResource, SqliteResourceRepository,
    SqliteViewRepository, ViewRepository, ViewRow,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database errors from sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// The datastore's own message, without the layer prefix.
    ///
    /// For errors raised by SQLite itself this is the engine message, e.g.
    /// `no such table: clientes`.
    pub fn datastore_message(&self) -> String {
        match self {
            Error::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            Error::Database(other) => other.to_string(),
            Error::Configuration(message) => message.clone(),
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Database(sqlx::Error::PoolTimedOut)
                | Error::Database(sqlx::Error::Io(_))
                | Error::Database(sqlx::Error::WorkerCrashed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let timeout = Error::Database(sqlx::Error::PoolTimedOut);
        assert!(timeout.is_retryable());

        let config = Error::Configuration("bad config".to_string());
        assert!(!config.is_retryable());
    }

    #[test]
    fn test_datastore_message_strips_prefix() {
        let err = Error::Database(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error: "));
        assert!(!err.datastore_message().starts_with("Database error: "));

        let config = Error::Configuration("max_connections must be greater than 0".into());
        assert_eq!(
            config.datastore_message(),
            "max_connections must be greater than 0"
        );
    }
}
