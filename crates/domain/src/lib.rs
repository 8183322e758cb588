//! Sports-Car Sales Domain Types
//!
//! This crate provides the domain model of the sports-car sales API: the six
//! persisted entities, their typed create payloads, the [`Resource`] trait
//! that ties each entity to its table, and the allow-list of named views.
//!
//! ## Architecture
//!
//! - **identifiers**: typed wrappers around SQLite integer row ids
//! - **resource**: table metadata shared by every entity
//! - **customer**, **salesperson**, **vehicle**, **sale**, **test_drive**,
//!   **post_sale_service**: stored records and create payloads
//! - **views**: named read-only views callers may query
//! - **errors**: domain error types
//!
//! ## Usage
//!
//! ```rust
//! use sportscar_sales_domain::{NamedView, Resource, Vehicle};
//!
//! assert_eq!(Vehicle::TABLE, "veiculos");
//! assert!("vw_vendas_por_estado".parse::<NamedView>().is_ok());
//! assert!("DROP TABLE clientes;--".parse::<NamedView>().is_err());
//! ```

#![warn(clippy::all)]

pub mod customer;
pub mod datetime;
pub mod errors;
pub mod identifiers;
pub mod post_sale_service;
pub mod resource;
pub mod sale;
pub mod salesperson;
pub mod test_drive;
pub mod vehicle;
pub mod views;

pub use customer::{Customer, NewCustomer};
pub use errors::{ViewError, ViewResult};
pub use identifiers::*;
pub use post_sale_service::{NewPostSaleService, PostSaleService};
pub use resource::Resource;
pub use sale::{NewSale, Sale};
pub use salesperson::{NewSalesperson, Salesperson};
pub use test_drive::{NewTestDrive, TestDrive};
pub use vehicle::{NewVehicle, Vehicle};
pub use views::{NamedView, ViewDescriptor};
