//! HTTP route handlers.
//!
//! This module organizes all API endpoints by concern.

pub mod health;
pub mod resources;
pub mod root;
pub mod views;

// Re-export for convenience
pub use health::routes as health_routes;
pub use resources::routes as resource_routes;
pub use root::routes as root_routes;
pub use views::routes as view_routes;
