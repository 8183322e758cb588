//! Test database setup.
//!
//! Provides private in-memory SQLite databases with the full schema applied,
//! one per test, so tests never share state.

use sqlx::SqlitePool;

use sportscar_sales_infrastructure::{
    DatabaseConfig, DatabasePool, SqliteResourceRepository, SqliteViewRepository,
};

/// Test database wrapper around an in-memory pool
#[derive(Debug, Clone)]
pub struct TestDatabase {
    database: DatabasePool,
}

impl TestDatabase {
    /// Create a fresh in-memory database with tables and views bootstrapped
    pub async fn new() -> anyhow::Result<Self> {
        let database = DatabasePool::with_schema(&DatabaseConfig::in_memory()).await?;
        Ok(Self { database })
    }

    /// Create a fresh in-memory database with no schema at all
    pub async fn empty() -> anyhow::Result<Self> {
        let database = DatabasePool::new(&DatabaseConfig::in_memory()).await?;
        Ok(Self { database })
    }

    /// Get the wrapped database pool
    pub fn database(&self) -> &DatabasePool {
        &self.database
    }

    /// Get a reference to the raw sqlx pool
    pub fn pool(&self) -> &SqlitePool {
        self.database.pool()
    }

    /// Repository over the entity tables
    pub fn resources(&self) -> SqliteResourceRepository {
        SqliteResourceRepository::new(self.pool().clone())
    }

    /// Repository over the named views
    pub fn views(&self) -> SqliteViewRepository {
        SqliteViewRepository::new(self.pool().clone())
    }

    /// Count the rows of a table
    pub async fn count(&self, table: &str) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}
