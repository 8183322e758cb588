//! Sales (`vendas`).
//!
//! A sale references a customer, a vehicle and a salesperson by id. The
//! references are stored as given: nothing checks that the rows exist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    identifiers::{CustomerId, SaleId, SalespersonId, VehicleId},
    resource::Resource,
};

/// A stored sale row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sale {
    pub venda_id: SaleId,
    pub cliente_id: Option<CustomerId>,
    pub veiculo_id: Option<VehicleId>,
    pub vendedor_id: Option<SalespersonId>,
    pub data_venda: Option<NaiveDate>,
    pub valor_venda: Option<f64>,
    pub desconto_percentual: Option<f64>,
    /// e.g. `À vista`, `Financiamento`, `Consórcio`, `Leasing`
    pub forma_pagamento: Option<String>,
    pub numero_parcelas: Option<i64>,
    pub valor_entrada: Option<f64>,
    /// e.g. `Concluída`, `Cancelada`
    pub status_venda: Option<String>,
}

/// Create payload for `POST /vendas`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewSale {
    pub cliente_id: Option<CustomerId>,
    pub veiculo_id: Option<VehicleId>,
    pub vendedor_id: Option<SalespersonId>,
    pub data_venda: Option<NaiveDate>,
    pub valor_venda: Option<f64>,
    pub desconto_percentual: Option<f64>,
    pub forma_pagamento: Option<String>,
    pub numero_parcelas: Option<i64>,
    pub valor_entrada: Option<f64>,
    pub status_venda: Option<String>,
}

impl Resource for Sale {
    type New = NewSale;

    const TABLE: &'static str = "vendas";
    const ID_FIELD: &'static str = "venda_id";
    const COLUMNS: &'static [&'static str] = &[
        "cliente_id",
        "veiculo_id",
        "vendedor_id",
        "data_venda",
        "valor_venda",
        "desconto_percentual",
        "forma_pagamento",
        "numero_parcelas",
        "valor_entrada",
        "status_venda",
    ];
    const LABEL: &'static str = "sale";
}
