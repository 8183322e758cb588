//! Named-view endpoints.
//!
//! The view name in the path is resolved against the [`NamedView`] allow-list
//! before any statement exists. Unknown names, including injection attempts,
//! are rejected without touching the datastore.

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use sportscar_sales_domain::{NamedView, ViewDescriptor};
use sportscar_sales_infrastructure::ViewRow;
use tracing::{debug, error};

/// View routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/views", get(list_views))
        .route("/views/:name", get(fetch_view))
}

/// List the queryable views
#[utoipa::path(
    get,
    path = "/views",
    tag = "views",
    responses(
        (status = 200, description = "Allow-listed views", body = [ViewDescriptor])
    )
)]
pub async fn list_views() -> Json<Vec<ViewDescriptor>> {
    Json(NamedView::ALL.iter().map(|view| view.descriptor()).collect())
}

/// Fetch every row of a named view
#[utoipa::path(
    get,
    path = "/views/{name}",
    tag = "views",
    params(
        ("name" = String, Path, description = "View name, e.g. `vw_vendas_por_estado`")
    ),
    responses(
        (status = 200, description = "Rows of the view as column-name to value objects"),
        (status = 400, description = "Invalid or nonexistent view", body = ErrorResponse)
    )
)]
pub async fn fetch_view(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<ViewRow>>> {
    let Path(name) = name.map_err(|rejection| {
        debug!(error = %rejection, "Unreadable view name");
        ApiError::InvalidView(rejection.body_text())
    })?;
    let view: NamedView = name.parse()?;

    let rows = state.views.fetch(view).await.map_err(|e| {
        error!(view = view.name(), error = %e, "View query failed");
        ApiError::InvalidView(view.name().to_string())
    })?;

    Ok(Json(rows))
}
