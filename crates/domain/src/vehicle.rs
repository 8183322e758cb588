//! Vehicle catalogue (`veiculos`).
//!
//! `estoque` is informational only: recording a sale never decrements it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{identifiers::VehicleId, resource::Resource};

/// A stored vehicle row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    pub veiculo_id: VehicleId,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano_fabricacao: Option<i64>,
    pub cor: Option<String>,
    pub tipo_motor: Option<String>,
    /// Horsepower
    pub potencia_cv: Option<i64>,
    /// Engine displacement in litres
    pub cilindradas: Option<f64>,
    pub transmissao: Option<String>,
    pub tracao: Option<String>,
    pub preco_base: Option<f64>,
    pub estoque: Option<i64>,
    pub categoria: Option<String>,
}

/// Create payload for `POST /veiculos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewVehicle {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano_fabricacao: Option<i64>,
    pub cor: Option<String>,
    pub tipo_motor: Option<String>,
    pub potencia_cv: Option<i64>,
    pub cilindradas: Option<f64>,
    pub transmissao: Option<String>,
    pub tracao: Option<String>,
    pub preco_base: Option<f64>,
    pub estoque: Option<i64>,
    pub categoria: Option<String>,
}

impl Resource for Vehicle {
    type New = NewVehicle;

    const TABLE: &'static str = "veiculos";
    const ID_FIELD: &'static str = "veiculo_id";
    const COLUMNS: &'static [&'static str] = &[
        "marca",
        "modelo",
        "ano_fabricacao",
        "cor",
        "tipo_motor",
        "potencia_cv",
        "cilindradas",
        "transmissao",
        "tracao",
        "preco_base",
        "estoque",
        "categoria",
    ];
    const LABEL: &'static str = "vehicle";
}
