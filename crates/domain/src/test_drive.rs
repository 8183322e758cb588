//! Test drives (`test_drives`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    identifiers::{CustomerId, SalespersonId, TestDriveId, VehicleId},
    resource::Resource,
};

/// A stored test-drive row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestDrive {
    pub test_drive_id: TestDriveId,
    pub cliente_id: Option<CustomerId>,
    pub veiculo_id: Option<VehicleId>,
    #[serde(default, deserialize_with = "crate::datetime::deserialize_optional")]
    pub data_test_drive: Option<NaiveDateTime>,
    /// Rating from 1 to 5
    pub avaliacao: Option<i64>,
    pub comentario: Option<String>,
    pub resultou_venda: Option<bool>,
    pub vendedor_responsavel_id: Option<SalespersonId>,
}

/// Create payload for `POST /test_drives`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewTestDrive {
    pub cliente_id: Option<CustomerId>,
    pub veiculo_id: Option<VehicleId>,
    #[serde(default, deserialize_with = "crate::datetime::deserialize_optional")]
    pub data_test_drive: Option<NaiveDateTime>,
    pub avaliacao: Option<i64>,
    pub comentario: Option<String>,
    pub resultou_venda: Option<bool>,
    pub vendedor_responsavel_id: Option<SalespersonId>,
}

impl Resource for TestDrive {
    type New = NewTestDrive;

    const TABLE: &'static str = "test_drives";
    const ID_FIELD: &'static str = "test_drive_id";
    const COLUMNS: &'static [&'static str] = &[
        "cliente_id",
        "veiculo_id",
        "data_test_drive",
        "avaliacao",
        "comentario",
        "resultou_venda",
        "vendedor_responsavel_id",
    ];
    const LABEL: &'static str = "test drive";
}
