//! Named read-only views.
//!
//! `GET /views/:name` only ever runs one of the constant statements below.
//! A caller-supplied name is resolved through [`NamedView::from_str`] first;
//! anything that is not an exact allow-list entry is rejected before a query
//! string exists.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::errors::ViewError;

/// A view on the allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedView {
    /// Sale count and total value per customer state
    SalesByState,
    /// Average ticket per salesperson
    AverageTicketBySalesperson,
    /// Completed sale count and revenue per brand
    SalesByBrand,
    /// Test-drive conversion rate and average rating per vehicle
    TestDriveConversion,
    /// Service count, value and satisfaction per service type
    ServiceSatisfaction,
}

impl NamedView {
    /// Every allow-listed view, in display order
    pub const ALL: [NamedView; 5] = [
        NamedView::SalesByState,
        NamedView::AverageTicketBySalesperson,
        NamedView::SalesByBrand,
        NamedView::TestDriveConversion,
        NamedView::ServiceSatisfaction,
    ];

    /// Name of the view in the datastore and in the URL
    pub const fn name(self) -> &'static str {
        match self {
            Self::SalesByState => "vw_vendas_por_estado",
            Self::AverageTicketBySalesperson => "vw_ticket_medio_vendedor",
            Self::SalesByBrand => "vw_vendas_por_marca",
            Self::TestDriveConversion => "vw_conversao_test_drives",
            Self::ServiceSatisfaction => "vw_satisfacao_servicos",
        }
    }

    /// The constant statement run for this view
    pub const fn query(self) -> &'static str {
        match self {
            Self::SalesByState => "SELECT * FROM vw_vendas_por_estado",
            Self::AverageTicketBySalesperson => "SELECT * FROM vw_ticket_medio_vendedor",
            Self::SalesByBrand => "SELECT * FROM vw_vendas_por_marca",
            Self::TestDriveConversion => "SELECT * FROM vw_conversao_test_drives",
            Self::ServiceSatisfaction => "SELECT * FROM vw_satisfacao_servicos",
        }
    }

    /// One-line description for the view index
    pub const fn description(self) -> &'static str {
        match self {
            Self::SalesByState => "Sales count and total value per customer state",
            Self::AverageTicketBySalesperson => "Average sale value per salesperson",
            Self::SalesByBrand => "Completed sales and revenue per vehicle brand",
            Self::TestDriveConversion => "Test-drive conversion rate and rating per vehicle",
            Self::ServiceSatisfaction => "Post-sale service volume and satisfaction per type",
        }
    }

    /// Descriptor used by the view index endpoint
    pub fn descriptor(self) -> ViewDescriptor {
        ViewDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }
}

impl FromStr for NamedView {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.name() == s)
            .ok_or_else(|| ViewError::Unknown(s.to_string()))
    }
}

impl fmt::Display for NamedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Public description of an allow-listed view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViewDescriptor {
    pub name: String,
    pub description: String,
}
