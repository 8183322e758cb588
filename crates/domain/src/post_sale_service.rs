//! After-sale services (`servicos_pos_venda`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    identifiers::{SaleId, ServiceId},
    resource::Resource,
};

/// A stored post-sale service row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostSaleService {
    pub servico_id: ServiceId,
    pub venda_id: Option<SaleId>,
    /// e.g. `Revisão`, `Manutenção`, `Reparo`, `Garantia`
    pub tipo_servico: Option<String>,
    pub data_servico: Option<NaiveDate>,
    pub valor_servico: Option<f64>,
    /// Score from 1 to 5
    pub satisfacao_cliente: Option<i64>,
    pub observacoes: Option<String>,
}

/// Create payload for `POST /servicos_pos_venda`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewPostSaleService {
    pub venda_id: Option<SaleId>,
    pub tipo_servico: Option<String>,
    pub data_servico: Option<NaiveDate>,
    pub valor_servico: Option<f64>,
    pub satisfacao_cliente: Option<i64>,
    pub observacoes: Option<String>,
}

impl Resource for PostSaleService {
    type New = NewPostSaleService;

    const TABLE: &'static str = "servicos_pos_venda";
    const ID_FIELD: &'static str = "servico_id";
    const COLUMNS: &'static [&'static str] = &[
        "venda_id",
        "tipo_servico",
        "data_servico",
        "valor_servico",
        "satisfacao_cliente",
        "observacoes",
    ];
    const LABEL: &'static str = "post-sale service";
}
