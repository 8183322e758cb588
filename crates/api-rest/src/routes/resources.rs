//! Collection endpoints for the six entity tables.
//!
//! Every collection supports exactly two operations: `GET` lists every row in
//! storage order and `POST` inserts one row from a typed payload. The
//! per-collection handlers are thin documented wrappers around [`list_rows`]
//! and [`create_row`].

use crate::{
    error::ApiResult,
    extractors::TypedJson,
    responses::CreatedId,
    state::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use sportscar_sales_domain::{
    Customer, NewCustomer, NewPostSaleService, NewSale, NewSalesperson, NewTestDrive, NewVehicle,
    PostSaleService, Sale, Salesperson, TestDrive, Vehicle,
};
use sportscar_sales_infrastructure::{JsonRow, ResourceRepository, SqliteResource};
use tracing::info;

/// Collection routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clientes", get(list_clientes).post(create_cliente))
        .route("/vendedores", get(list_vendedores).post(create_vendedor))
        .route("/veiculos", get(list_veiculos).post(create_veiculo))
        .route("/vendas", get(list_vendas).post(create_venda))
        .route("/test_drives", get(list_test_drives).post(create_test_drive))
        .route(
            "/servicos_pos_venda",
            get(list_servicos_pos_venda).post(create_servico_pos_venda),
        )
}

/// List every row of `R`'s table with its values as stored.
pub async fn list_rows<R: SqliteResource>(state: &AppState) -> ApiResult<Json<Vec<JsonRow>>> {
    let rows = ResourceRepository::<R>::list(&state.resources).await?;
    Ok(Json(rows))
}

/// Insert one row into `R`'s table and report the generated id.
pub async fn create_row<R: SqliteResource>(
    state: &AppState,
    payload: R::New,
) -> ApiResult<CreatedId> {
    let id = ResourceRepository::<R>::create(&state.resources, &payload).await?;
    info!(table = R::TABLE, id, "Created {}", R::LABEL);
    Ok(CreatedId::new(R::ID_FIELD, id))
}

/// List customers
#[utoipa::path(
    get,
    path = "/clientes",
    tag = "clientes",
    responses(
        (status = 200, description = "Every customer", body = [Customer]),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn list_clientes(State(state): State<AppState>) -> ApiResult<Json<Vec<JsonRow>>> {
    list_rows::<Customer>(&state).await
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/clientes",
    tag = "clientes",
    request_body = NewCustomer,
    responses(
        (status = 200, description = "Generated `cliente_id`"),
        (status = 500, description = "Invalid body or datastore error", body = ErrorResponse)
    )
)]
pub async fn create_cliente(
    State(state): State<AppState>,
    TypedJson(payload): TypedJson<NewCustomer>,
) -> ApiResult<CreatedId> {
    create_row::<Customer>(&state, payload).await
}

/// List salespeople
#[utoipa::path(
    get,
    path = "/vendedores",
    tag = "vendedores",
    responses(
        (status = 200, description = "Every salesperson", body = [Salesperson]),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn list_vendedores(State(state): State<AppState>) -> ApiResult<Json<Vec<JsonRow>>> {
    list_rows::<Salesperson>(&state).await
}

/// Create a salesperson
#[utoipa::path(
    post,
    path = "/vendedores",
    tag = "vendedores",
    request_body = NewSalesperson,
    responses(
        (status = 200, description = "Generated `vendedor_id`"),
        (status = 500, description = "Invalid body or datastore error", body = ErrorResponse)
    )
)]
pub async fn create_vendedor(
    State(state): State<AppState>,
    TypedJson(payload): TypedJson<NewSalesperson>,
) -> ApiResult<CreatedId> {
    create_row::<Salesperson>(&state, payload).await
}

/// List vehicles
#[utoipa::path(
    get,
    path = "/veiculos",
    tag = "veiculos",
    responses(
        (status = 200, description = "Every vehicle", body = [Vehicle]),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn list_veiculos(State(state): State<AppState>) -> ApiResult<Json<Vec<JsonRow>>> {
    list_rows::<Vehicle>(&state).await
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/veiculos",
    tag = "veiculos",
    request_body = NewVehicle,
    responses(
        (status = 200, description = "Generated `veiculo_id`"),
        (status = 500, description = "Invalid body or datastore error", body = ErrorResponse)
    )
)]
pub async fn create_veiculo(
    State(state): State<AppState>,
    TypedJson(payload): TypedJson<NewVehicle>,
) -> ApiResult<CreatedId> {
    create_row::<Vehicle>(&state, payload).await
}

/// List sales
#[utoipa::path(
    get,
    path = "/vendas",
    tag = "vendas",
    responses(
        (status = 200, description = "Every sale", body = [Sale]),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn list_vendas(State(state): State<AppState>) -> ApiResult<Json<Vec<JsonRow>>> {
    list_rows::<Sale>(&state).await
}

/// Create a sale
#[utoipa::path(
    post,
    path = "/vendas",
    tag = "vendas",
    request_body = NewSale,
    responses(
        (status = 200, description = "Generated `venda_id`"),
        (status = 500, description = "Invalid body or datastore error", body = ErrorResponse)
    )
)]
pub async fn create_venda(
    State(state): State<AppState>,
    TypedJson(payload): TypedJson<NewSale>,
) -> ApiResult<CreatedId> {
    create_row::<Sale>(&state, payload).await
}

/// List test drives
#[utoipa::path(
    get,
    path = "/test_drives",
    tag = "test_drives",
    responses(
        (status = 200, description = "Every test drive", body = [TestDrive]),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn list_test_drives(State(state): State<AppState>) -> ApiResult<Json<Vec<JsonRow>>> {
    list_rows::<TestDrive>(&state).await
}

/// Create a test drive
#[utoipa::path(
    post,
    path = "/test_drives",
    tag = "test_drives",
    request_body = NewTestDrive,
    responses(
        (status = 200, description = "Generated `test_drive_id`"),
        (status = 500, description = "Invalid body or datastore error", body = ErrorResponse)
    )
)]
pub async fn create_test_drive(
    State(state): State<AppState>,
    TypedJson(payload): TypedJson<NewTestDrive>,
) -> ApiResult<CreatedId> {
    create_row::<TestDrive>(&state, payload).await
}

/// List post-sale services
#[utoipa::path(
    get,
    path = "/servicos_pos_venda",
    tag = "servicos_pos_venda",
    responses(
        (status = 200, description = "Every post-sale service", body = [PostSaleService]),
        (status = 500, description = "Datastore error", body = ErrorResponse)
    )
)]
pub async fn list_servicos_pos_venda(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<JsonRow>>> {
    list_rows::<PostSaleService>(&state).await
}

/// Create a post-sale service
#[utoipa::path(
    post,
    path = "/servicos_pos_venda",
    tag = "servicos_pos_venda",
    request_body = NewPostSaleService,
    responses(
        (status = 200, description = "Generated `servico_id`"),
        (status = 500, description = "Invalid body or datastore error", body = ErrorResponse)
    )
)]
pub async fn create_servico_pos_venda(
    State(state): State<AppState>,
    TypedJson(payload): TypedJson<NewPostSaleService>,
) -> ApiResult<CreatedId> {
    create_row::<PostSaleService>(&state, payload).await
}
