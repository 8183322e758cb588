//! Testing utilities for the sports-car sales API
//!
//! This crate provides:
//! - Test fixtures producing realistic create payloads for every entity
//! - Builder patterns for payloads that need specific values
//! - An in-memory SQLite database with the schema already applied
//!
//! # Examples
//!
//! ```
//! use sportscar_sales_testing::{builders::*, fixtures::*};
//!
//! // A random customer
//! let customer = create_test_customer();
//! assert!(customer.nome.is_some());
//!
//! // A specific vehicle
//! let vehicle = VehicleBuilder::new()
//!     .with_marca("Ferrari")
//!     .with_modelo("Roma")
//!     .build();
//! assert_eq!(vehicle.marca.as_deref(), Some("Ferrari"));
//! ```

pub mod builders;
pub mod database;
pub mod fixtures;

// Re-export commonly used types
pub use builders::*;
pub use database::TestDatabase;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
