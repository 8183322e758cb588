//! Repository implementations for data persistence.
//!
//! This module provides SQLite-backed implementations of the two data access
//! seams the API needs: list/create over the six entity tables, and read-only
//! access to the named views.

mod mapping;
mod resource_repository;
mod row;
mod view_repository;

pub use mapping::{SqliteQuery, SqliteResource};
pub use resource_repository::SqliteResourceRepository;
pub use row::JsonRow;
pub use view_repository::{SqliteViewRepository, ViewRow};

use async_trait::async_trait;
use sportscar_sales_domain::{NamedView, Resource};

/// List/create access to one entity table.
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// Every stored row, in storage order, with every column as stored.
    ///
    /// Values are not coerced to the record type, so rows written outside
    /// the API are returned rather than failing the whole list.
    async fn list(&self) -> crate::Result<Vec<JsonRow>>;

    /// Insert one row and return the generated id.
    ///
    /// Fields absent from the payload are stored as NULL.
    async fn create(&self, new: &R::New) -> crate::Result<i64>;
}

/// Read-only access to the allow-listed views.
#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Every row the view returns, each as a column-name to value object.
    async fn fetch(&self, view: NamedView) -> crate::Result<Vec<ViewRow>>;
}
