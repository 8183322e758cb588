//! Application builder and configuration.
//!
//! This module provides the main application builder that assembles
//! all routes, middleware, and state into an Axum router.

use crate::{
    error::ErrorResponse,
    middleware::{handle_middleware_error, handle_panic, logging_middleware, request_id_middleware},
    routes,
    state::AppState,
};
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    Json, Router,
};
use sportscar_sales_common::ServerConfig;
use sportscar_sales_domain::{
    Customer, CustomerId, NewCustomer, NewPostSaleService, NewSale, NewSalesperson, NewTestDrive,
    NewVehicle, PostSaleService, Sale, SaleId, Salesperson, SalespersonId, ServiceId, TestDrive,
    TestDriveId, Vehicle, VehicleId, ViewDescriptor,
};
use std::time::Duration;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;

/// OpenAPI document for every route
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sports-Car Sales API",
        version = "1.0.0",
        description = "REST API over the sports-car dealership sales database",
        license(name = "MIT"),
    ),
    paths(
        routes::root::banner,
        routes::health::health,
        routes::health::ready,
        routes::resources::list_clientes,
        routes::resources::create_cliente,
        routes::resources::list_vendedores,
        routes::resources::create_vendedor,
        routes::resources::list_veiculos,
        routes::resources::create_veiculo,
        routes::resources::list_vendas,
        routes::resources::create_venda,
        routes::resources::list_test_drives,
        routes::resources::create_test_drive,
        routes::resources::list_servicos_pos_venda,
        routes::resources::create_servico_pos_venda,
        routes::views::list_views,
        routes::views::fetch_view,
    ),
    components(schemas(
        Customer, NewCustomer, CustomerId,
        Salesperson, NewSalesperson, SalespersonId,
        Vehicle, NewVehicle, VehicleId,
        Sale, NewSale, SaleId,
        TestDrive, NewTestDrive, TestDriveId,
        PostSaleService, NewPostSaleService, ServiceId,
        ViewDescriptor,
        ErrorResponse,
        routes::health::HealthResponse,
        routes::health::ReadinessResponse,
        routes::health::DatabaseCheck,
    )),
    tags(
        (name = "health", description = "Banner and health check endpoints"),
        (name = "clientes", description = "Customers"),
        (name = "vendedores", description = "Salespeople"),
        (name = "veiculos", description = "Vehicle catalogue"),
        (name = "vendas", description = "Sales"),
        (name = "test_drives", description = "Test drives"),
        (name = "servicos_pos_venda", description = "Post-sale services"),
        (name = "views", description = "Read-only analytical views"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut app = Router::new()
        .merge(routes::root_routes())
        .merge(routes::health_routes())
        .merge(routes::resource_routes())
        .merge(routes::view_routes())
        .with_state(state);

    if config.server.enable_openapi {
        app = app.route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));
    }

    with_middleware(app, &config.server)
}

/// Wrap a router in the shared middleware stack.
///
/// Outermost first: request id, tracing, request logging, panic recovery,
/// compression, CORS, then the request timeout.
pub fn with_middleware(app: Router, config: &ServerConfig) -> Router {
    app.layer(DefaultBodyLimit::max(config.max_body_size)).layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(logging_middleware))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(CompressionLayer::new())
            .layer(build_cors_layer(config))
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_seconds,
            ))),
    )
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn server_config(timeout_seconds: u64) -> ServerConfig {
        ServerConfig {
            request_timeout_seconds: timeout_seconds,
            ..ServerConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_times_out_with_408() {
        let app = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                "done"
            }),
        );
        let app = with_middleware(app, &server_config(1));

        let response = app
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_500() {
        let app = Router::new().route(
            "/panic",
            get(|| async { panic!("handler exploded") as () }),
        );
        let app = with_middleware(app, &server_config(30));

        let response = app
            .oneshot(Request::get("/panic").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_openapi_lists_every_collection() {
        let doc = ApiDoc::openapi();
        for path in [
            "/clientes",
            "/vendedores",
            "/veiculos",
            "/vendas",
            "/test_drives",
            "/servicos_pos_venda",
            "/views/{name}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
