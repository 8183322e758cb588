//! SQLite implementation of named-view access.
//!
//! View shapes are not known to the type system, so each row is converted to
//! a JSON object by the storage class of every column.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use sportscar_sales_domain::NamedView;

use super::row::{row_to_json, JsonRow};
use super::ViewRepository;
use crate::Result;

/// One view row: column name to JSON value, in column order.
pub type ViewRow = JsonRow;

/// Repository reading the allow-listed views.
#[derive(Debug, Clone)]
pub struct SqliteViewRepository {
    pool: SqlitePool,
}

impl SqliteViewRepository {
    /// Create a new repository instance.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewRepository for SqliteViewRepository {
    #[instrument(skip(self), fields(view = view.name()))]
    async fn fetch(&self, view: NamedView) -> Result<Vec<ViewRow>> {
        // The statement text comes from the allow-list, never from the caller.
        let rows = sqlx::query(view.query()).fetch_all(&self.pool).await?;

        debug!(count = rows.len(), "Fetched view rows");
        rows.iter().map(|row| row_to_json(row, &[])).collect()
    }
}
