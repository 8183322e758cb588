//! Strongly-typed identifier types for the sales domain.
//!
//! Every table uses an auto-generated SQLite integer key. Wrapping those keys
//! in distinct types keeps a sale's `cliente_id` from being mixed up with its
//! `veiculo_id` at compile time, while serializing as a bare JSON number.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use utoipa::ToSchema;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row id
            #[inline]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the raw row id
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(CustomerId, "Identifier of a row in `clientes`");
define_id!(SalespersonId, "Identifier of a row in `vendedores`");
define_id!(VehicleId, "Identifier of a row in `veiculos`");
define_id!(SaleId, "Identifier of a row in `vendas`");
define_id!(TestDriveId, "Identifier of a row in `test_drives`");
define_id!(ServiceId, "Identifier of a row in `servicos_pos_venda`");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_number() {
        let id = VehicleId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: VehicleId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed.get(), 7);
    }

    #[test]
    fn test_id_conversions() {
        let id = CustomerId::from(3);
        assert_eq!(i64::from(id), 3);
        assert_eq!(id.to_string(), "3");
    }
}
