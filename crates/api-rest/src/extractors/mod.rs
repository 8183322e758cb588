//! Custom Axum extractors.
//!
//! This module provides reusable extractors for typed JSON payloads.

pub mod typed_json;

pub use typed_json::TypedJson;
