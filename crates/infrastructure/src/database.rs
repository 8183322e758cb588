//! Database module - SQLite connection pool and utilities
//!
//! The datastore is a single SQLite file opened once at start-up. Access goes
//! through a bounded pool so connection acquisition and statement execution
//! are explicit suspension points with their own timeouts.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::{schema, Error, Result};

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// A database file, created when missing
    File(PathBuf),
    /// A private in-memory database, gone when the pool closes
    InMemory,
}

/// Database configuration for SQLite connections.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database file or in-memory database
    pub location: DatabaseLocation,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to keep open
    pub min_connections: u32,
    /// Timeout for acquiring a connection from the pool
    pub acquire_timeout: Duration,
    /// Time SQLite waits on a locked database
    pub busy_timeout: Duration,
    /// Maximum time a connection can be idle before being closed
    pub idle_timeout: Option<Duration>,
    /// Maximum lifetime of a connection
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            location: DatabaseLocation::File(PathBuf::from("vendas_carros_esportivos.db")),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_secs(5),
            idle_timeout: Some(Duration::from_secs(600)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }
}

impl From<&sportscar_sales_common::DatabaseConfig> for DatabaseConfig {
    fn from(settings: &sportscar_sales_common::DatabaseConfig) -> Self {
        Self {
            location: DatabaseLocation::File(settings.path.clone()),
            max_connections: settings.max_connections,
            acquire_timeout: Duration::from_secs(settings.acquire_timeout_seconds),
            busy_timeout: Duration::from_secs(settings.busy_timeout_seconds),
            ..Default::default()
        }
    }
}

impl DatabaseConfig {
    /// Create a test configuration backed by an in-memory database.
    ///
    /// The pool holds exactly one connection that is never recycled, so the
    /// database survives for as long as the pool does.
    pub fn in_memory() -> Self {
        Self {
            location: DatabaseLocation::InMemory,
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_secs(5),
            idle_timeout: None,
            max_lifetime: None,
        }
    }

    fn connect_options(&self) -> Result<SqliteConnectOptions> {
        let options = match &self.location {
            DatabaseLocation::File(path) => SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal),
            DatabaseLocation::InMemory => {
                SqliteConnectOptions::from_str("sqlite::memory:").map_err(Error::Database)?
            }
        };

        // References between tables are documentation only.
        Ok(options.busy_timeout(self.busy_timeout).foreign_keys(false))
    }

    fn describe(&self) -> String {
        match &self.location {
            DatabaseLocation::File(path) => path.display().to_string(),
            DatabaseLocation::InMemory => ":memory:".to_string(),
        }
    }
}

/// Database connection pool wrapper with health monitoring.
#[derive(Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Open the database and create the connection pool.
    #[instrument(skip(config), fields(max_connections = config.max_connections))]
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        if config.max_connections == 0 {
            return Err(Error::Configuration(
                "max_connections must be greater than 0".to_string(),
            ));
        }

        let target = config.describe();
        info!(database = %target, "Connecting to SQLite");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections.min(config.max_connections))
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .connect_with(config.connect_options()?)
            .await
            .map_err(|e| {
                warn!(database = %target, error = %e, "Failed to connect to SQLite");
                Error::Database(e)
            })?;

        info!(database = %target, "Connected to SQLite");
        Ok(Self { pool })
    }

    /// Open the database and create any missing tables and views.
    pub async fn with_schema(config: &DatabaseConfig) -> Result<Self> {
        let database = Self::new(config).await?;
        database.bootstrap_schema().await?;
        Ok(database)
    }

    /// Get reference to the underlying pool.
    #[inline]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create any missing tables and views.
    pub async fn bootstrap_schema(&self) -> Result<()> {
        schema::bootstrap(&self.pool).await
    }

    /// Check database health by executing a simple query.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> HealthStatus {
        let start = std::time::Instant::now();

        match sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => {
                let latency = start.elapsed();
                debug!(latency_ms = latency.as_millis(), "Health check passed");
                HealthStatus {
                    healthy: true,
                    latency,
                    pool_size: self.pool.size(),
                    idle_connections: self.pool.num_idle(),
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "Health check failed");
                HealthStatus {
                    healthy: false,
                    latency: start.elapsed(),
                    pool_size: self.pool.size(),
                    idle_connections: self.pool.num_idle(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Get current pool statistics.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            size: self.pool.size(),
            idle: self.pool.num_idle(),
        }
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        info!("Closing database pool");
        self.pool.close().await;
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("idle", &self.pool.num_idle())
            .finish()
    }
}

/// Health status for database connections.
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the database is healthy
    pub healthy: bool,
    /// Query latency
    pub latency: Duration,
    /// Current pool size
    pub pool_size: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Error message if unhealthy
    pub error: Option<String>,
}

/// Pool statistics.
#[derive(Debug, Clone, Copy)]
pub struct PoolStats {
    /// Current number of connections in the pool
    pub size: u32,
    /// Number of idle connections
    pub idle: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_settings() {
        let mut settings = sportscar_sales_common::DatabaseConfig::default();
        settings.path = PathBuf::from("/data/vendas.db");
        settings.max_connections = 8;
        settings.busy_timeout_seconds = 2;

        let config = DatabaseConfig::from(&settings);
        assert_eq!(
            config.location,
            DatabaseLocation::File(PathBuf::from("/data/vendas.db"))
        );
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.busy_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_in_memory_config() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.location, DatabaseLocation::InMemory);
        assert_eq!(config.max_connections, 1);
        assert!(config.idle_timeout.is_none());
        assert!(config.max_lifetime.is_none());
    }

    #[tokio::test]
    async fn test_in_memory_pool_is_healthy() {
        let database = DatabasePool::new(&DatabaseConfig::in_memory()).await.unwrap();
        let status = database.health_check().await;
        assert!(status.healthy);
        assert!(status.error.is_none());
        database.close().await;
    }

    #[tokio::test]
    async fn test_zero_connections_rejected() {
        let mut config = DatabaseConfig::in_memory();
        config.max_connections = 0;
        let err = DatabasePool::new(&config).await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
