//! SQLite implementation of the list/create repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::row::{row_to_json, JsonRow};
use super::{ResourceRepository, SqliteResource};
use crate::Result;

/// Repository serving every entity table from one pool.
///
/// A single value implements [`ResourceRepository`] for all six entities;
/// callers pick the entity by type.
#[derive(Debug, Clone)]
pub struct SqliteResourceRepository {
    pool: SqlitePool,
}

impl SqliteResourceRepository {
    /// Create a new repository instance.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<R: SqliteResource> ResourceRepository<R> for SqliteResourceRepository {
    #[instrument(skip(self), fields(table = R::TABLE))]
    async fn list(&self) -> Result<Vec<JsonRow>> {
        let rows = sqlx::query(&R::select_all_statement())
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed {} rows", R::LABEL);
        rows.iter()
            .map(|row| row_to_json(row, R::FLAG_COLUMNS))
            .collect()
    }

    #[instrument(skip(self, new), fields(table = R::TABLE))]
    async fn create(&self, new: &R::New) -> Result<i64> {
        let statement = R::insert_statement();
        let result = R::bind_new(new, sqlx::query(&statement))
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Created {}", R::LABEL);
        Ok(id)
    }
}
