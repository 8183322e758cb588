//! Standardized API response types.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

/// Response to a successful create: one field, named after the table's id
/// column, holding the generated id.
///
/// Serializes as e.g. `{ "veiculo_id": 1 }` with status 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedId {
    /// Name of the id column
    pub field: &'static str,
    /// Generated row id
    pub id: i64,
}

impl CreatedId {
    /// Create a new created-id response
    pub fn new(field: &'static str, id: i64) -> Self {
        Self { field, id }
    }

    /// The JSON object sent to the client
    pub fn to_json(self) -> Value {
        let mut body = Map::with_capacity(1);
        body.insert(self.field.to_string(), Value::from(self.id));
        Value::Object(body)
    }
}

impl IntoResponse for CreatedId {
    fn into_response(self) -> Response {
        Json(self.to_json()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_created_id_body() {
        let created = CreatedId::new("veiculo_id", 1);
        assert_eq!(created.to_json(), serde_json::json!({ "veiculo_id": 1 }));
    }

    #[test]
    fn test_created_id_status_is_ok() {
        let response = CreatedId::new("cliente_id", 7).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
