//! Salespeople (`vendedores`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{identifiers::SalespersonId, resource::Resource};

/// A stored salesperson row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Salesperson {
    pub vendedor_id: SalespersonId,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub data_contratacao: Option<NaiveDate>,
    pub comissao_percentual: Option<f64>,
    pub regiao_atuacao: Option<String>,
    pub ativo: Option<bool>,
}

/// Create payload for `POST /vendedores`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewSalesperson {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub data_contratacao: Option<NaiveDate>,
    pub comissao_percentual: Option<f64>,
    pub regiao_atuacao: Option<String>,
    pub ativo: Option<bool>,
}

impl Resource for Salesperson {
    type New = NewSalesperson;

    const TABLE: &'static str = "vendedores";
    const ID_FIELD: &'static str = "vendedor_id";
    const COLUMNS: &'static [&'static str] = &[
        "nome",
        "email",
        "data_contratacao",
        "comissao_percentual",
        "regiao_atuacao",
        "ativo",
    ];
    const LABEL: &'static str = "salesperson";
}
