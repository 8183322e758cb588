//! The resource abstraction shared by every persisted entity.
//!
//! Each entity lives in exactly one table, is keyed by an auto-generated
//! integer and supports two operations: list every row and insert one row.
//! [`Resource`] carries the table metadata those operations need so the
//! storage and HTTP layers can be written once for all six entities.

use serde::{de::DeserializeOwned, Serialize};

/// A persisted entity exposed as a list/create collection.
///
/// Implemented on the stored record type; [`Resource::New`] is the typed
/// create payload. `COLUMNS` lists the insertable columns in the exact order
/// the storage layer binds them.
pub trait Resource: Serialize + Send + Sync + Unpin + 'static {
    /// Typed create payload
    type New: DeserializeOwned + Send + Sync + 'static;

    /// Table name, also used as the collection path segment
    const TABLE: &'static str;

    /// Name of the integer primary-key column, also the create response field
    const ID_FIELD: &'static str;

    /// Insertable columns in bind order
    const COLUMNS: &'static [&'static str];

    /// Short human-readable name used in logs
    const LABEL: &'static str;

    /// `SELECT` returning every row in storage order
    fn select_all_statement() -> String {
        format!("SELECT * FROM {} ORDER BY {}", Self::TABLE, Self::ID_FIELD)
    }

    /// Positional `INSERT` with one placeholder per column
    fn insert_statement() -> String {
        let placeholders = vec!["?"; Self::COLUMNS.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            Self::TABLE,
            Self::COLUMNS.join(", "),
            placeholders
        )
    }
}
