//! Customers (`clientes`).
//!
//! Buyers and prospects. `data_cadastro` is stamped by the datastore when the
//! row is inserted and cannot be supplied by callers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{identifiers::CustomerId, resource::Resource};

/// A stored customer row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Generated identifier
    pub cliente_id: CustomerId,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub genero: Option<String>,
    pub cidade: Option<String>,
    /// Two-letter state code, e.g. `SP`
    pub estado: Option<String>,
    pub renda_anual: Option<f64>,
    pub profissao: Option<String>,
    /// Registration timestamp set by the datastore
    pub data_cadastro: Option<NaiveDateTime>,
}

/// Create payload for `POST /clientes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewCustomer {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub genero: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub renda_anual: Option<f64>,
    pub profissao: Option<String>,
}

impl Resource for Customer {
    type New = NewCustomer;

    const TABLE: &'static str = "clientes";
    const ID_FIELD: &'static str = "cliente_id";
    const COLUMNS: &'static [&'static str] = &[
        "nome",
        "email",
        "telefone",
        "data_nascimento",
        "genero",
        "cidade",
        "estado",
        "renda_anual",
        "profissao",
    ];
    const LABEL: &'static str = "customer";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let payload: NewCustomer = serde_json::from_value(serde_json::json!({
            "nome": "Ana Souza",
            "estado": "SP",
            "cliente_id": 99,
            "favorite_color": "red"
        }))
        .unwrap();

        assert_eq!(payload.nome.as_deref(), Some("Ana Souza"));
        assert_eq!(payload.estado.as_deref(), Some("SP"));
        assert!(payload.email.is_none());
    }

    #[test]
    fn test_payload_rejects_wrong_types() {
        let result = serde_json::from_value::<NewCustomer>(serde_json::json!({
            "renda_anual": "lots"
        }));
        assert!(result.is_err());

        let result = serde_json::from_value::<NewCustomer>(serde_json::json!({
            "data_nascimento": "31/12/1980"
        }));
        assert!(result.is_err());
    }
}
