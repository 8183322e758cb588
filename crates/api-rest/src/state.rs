//! Application state and dependency injection.
//!
//! This module defines the shared application state that is passed
//! to all route handlers via Axum's state extraction.

use sportscar_sales_common::AppConfig;
use sportscar_sales_infrastructure::{
    DatabasePool, SqliteResourceRepository, SqliteViewRepository, ViewRepository,
};
use std::sync::Arc;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Database pool, used by the readiness probe
    pub database: DatabasePool,

    /// List/create access to every entity table
    pub resources: SqliteResourceRepository,

    /// Read access to the named views (type-erased)
    pub views: Arc<dyn ViewRepository>,
}

impl AppState {
    /// Create the application state over an open database pool
    pub fn new(config: AppConfig, database: DatabasePool) -> Self {
        let pool = database.pool().clone();

        Self {
            config: Arc::new(config),
            resources: SqliteResourceRepository::new(pool.clone()),
            views: Arc::new(SqliteViewRepository::new(pool)),
            database,
        }
    }

    /// Replace the view repository, e.g. with a test double
    pub fn with_views(mut self, views: Arc<dyn ViewRepository>) -> Self {
        self.views = views;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}
