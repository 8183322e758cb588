//! Integration tests for REST API
//!
//! Drives the full router, middleware included, against a private in-memory
//! database per test.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use sportscar_sales_api_rest::{create_app, AppState};
use sportscar_sales_common::AppConfig;
use sportscar_sales_domain::NamedView;
use sportscar_sales_infrastructure::{repositories::ViewRepository, ViewRow};
use sportscar_sales_testing::{fixtures::*, TestDatabase};
use std::sync::Arc;
use tower::ServiceExt;

async fn test_app() -> (TestDatabase, Router) {
    let db = TestDatabase::new().await.unwrap();
    let app = create_app(AppState::new(AppConfig::default(), db.database().clone()));
    (db, app)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn get(app: &Router, uri: &str) -> Response {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_root_banner() {
    let (_db, app) = test_app().await;

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let body = body_bytes(response).await;
    assert_eq!(body, "🚗 API - Sistema de Vendas de Carros Esportivos".as_bytes());
}

#[tokio::test]
async fn test_health_and_ready() {
    let (_db, app) = test_app().await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");

    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ready"], true);
    assert_eq!(body["database"]["healthy"], true);
}

#[tokio::test]
async fn test_ready_reports_closed_pool() {
    let (db, app) = test_app().await;
    db.database().close().await;

    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["ready"], false);
}

#[tokio::test]
async fn test_ferrari_create_then_list() {
    let (_db, app) = test_app().await;

    let response = post_json(
        &app,
        "/veiculos",
        json!({
            "marca": "Ferrari",
            "modelo": "F8",
            "ano_fabricacao": 2022,
            "preco_base": 350000
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "veiculo_id": 1 }));

    let response = get(&app, "/veiculos").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!([{
            "veiculo_id": 1,
            "marca": "Ferrari",
            "modelo": "F8",
            "ano_fabricacao": 2022,
            "cor": null,
            "tipo_motor": null,
            "potencia_cv": null,
            "cilindradas": null,
            "transmissao": null,
            "tracao": null,
            "preco_base": 350000.0,
            "estoque": null,
            "categoria": null
        }])
    );
}

#[tokio::test]
async fn test_every_collection_create_then_list() {
    let (_db, app) = test_app().await;

    let cliente = serde_json::to_value(create_test_customer()).unwrap();
    let vendedor = serde_json::to_value(create_test_salesperson()).unwrap();
    let veiculo = serde_json::to_value(create_test_vehicle()).unwrap();

    let collections = [
        ("/clientes", "cliente_id", cliente),
        ("/vendedores", "vendedor_id", vendedor),
        ("/veiculos", "veiculo_id", veiculo),
        (
            "/vendas",
            "venda_id",
            json!({ "cliente_id": 1, "veiculo_id": 1, "vendedor_id": 1, "valor_venda": 950000.0, "status_venda": "Concluída" }),
        ),
        (
            "/test_drives",
            "test_drive_id",
            json!({ "cliente_id": 1, "veiculo_id": 1, "data_test_drive": "2024-03-01T10:30:00", "avaliacao": 5, "resultou_venda": true }),
        ),
        (
            "/servicos_pos_venda",
            "servico_id",
            json!({ "venda_id": 1, "tipo_servico": "Revisão", "valor_servico": 4500.0, "satisfacao_cliente": 5 }),
        ),
    ];

    for (uri, id_field, payload) in collections {
        let response = post_json(&app, uri, payload.clone()).await;
        assert_eq!(response.status(), StatusCode::OK, "create {}", uri);
        let created = body_json(response).await;
        assert_eq!(created, json!({ id_field: 1 }), "create {}", uri);

        let rows = body_json(get(&app, uri).await).await;
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 1, "list {}", uri);
        assert_eq!(rows[0][id_field], 1, "list {}", uri);

        for (field, value) in payload.as_object().unwrap() {
            if let (Some(sent), Some(stored)) = (value.as_f64(), rows[0][field].as_f64()) {
                assert_eq!(sent, stored, "{} {}", uri, field);
            } else if field != "data_test_drive" {
                assert_eq!(&rows[0][field], value, "{} {}", uri, field);
            }
        }
    }
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let (_db, app) = test_app().await;
    post_json(&app, "/clientes", json!({ "nome": "Ana" })).await;

    let first = body_json(get(&app, "/clientes").await).await;
    let second = body_json(get(&app, "/clientes").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let (_db, app) = test_app().await;

    let response = post_json(
        &app,
        "/vendedores",
        json!({ "nome": "Carlos", "salario": 10000, "vendedor_id": 99 }),
    )
    .await;
    assert_eq!(body_json(response).await, json!({ "vendedor_id": 1 }));
}

#[tokio::test]
async fn test_wrong_type_is_rejected_without_writing() {
    let (db, app) = test_app().await;

    let response = post_json(
        &app,
        "/veiculos",
        json!({ "marca": "Porsche", "ano_fabricacao": "dois mil e vinte" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_BODY");
    assert!(body["error"].as_str().unwrap().contains("ano_fabricacao"));

    assert_eq!(db.count("veiculos").await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_a_server_error() {
    let (db, app) = test_app().await;

    let request = Request::post("/clientes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(db.count("clientes").await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_table_returns_datastore_message() {
    let db = TestDatabase::empty().await.unwrap();
    let app = create_app(AppState::new(AppConfig::default(), db.database().clone()));

    let response = get(&app, "/vendas").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], "DATABASE_ERROR");
    assert!(body["error"].as_str().unwrap().contains("no such table: vendas"));
}

#[tokio::test]
async fn test_off_type_rows_do_not_break_listing() {
    let (db, app) = test_app().await;
    post_json(&app, "/veiculos", json!({ "marca": "Ferrari", "ano_fabricacao": 2022 })).await;

    for statement in [
        "INSERT INTO veiculos (marca, ano_fabricacao) VALUES ('Lotus', 'desconhecido')",
        "INSERT INTO clientes (nome, data_nascimento) VALUES ('Bruno', '15/03/1980')",
        "INSERT INTO vendedores (nome, ativo) VALUES ('Carla', 'True')",
    ] {
        sqlx::query(statement).execute(db.pool()).await.unwrap();
    }

    let response = get(&app, "/veiculos").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["ano_fabricacao"], 2022);
    assert_eq!(body[1]["ano_fabricacao"], "desconhecido");

    let response = get(&app, "/clientes").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await[0]["data_nascimento"], "15/03/1980");

    let response = get(&app, "/vendedores").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await[0]["ativo"], "True");
}

#[tokio::test]
async fn test_view_list() {
    let (_db, app) = test_app().await;

    let body = body_json(get(&app, "/views").await).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = NamedView::ALL.iter().map(|v| v.name()).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_known_view_matches_direct_query() {
    let (db, app) = test_app().await;

    for valor in [500000.0, 700000.0] {
        post_json(&app, "/clientes", json!({ "nome": "Ana", "estado": "SP" })).await;
        let cliente_id = db.count("clientes").await.unwrap();
        post_json(
            &app,
            "/vendas",
            json!({ "cliente_id": cliente_id, "valor_venda": valor, "status_venda": "Concluída" }),
        )
        .await;
    }

    let response = get(&app, "/views/vw_vendas_por_estado").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let direct: (String, i64, f64) =
        sqlx::query_as("SELECT estado, total_vendas, valor_total FROM vw_vendas_por_estado")
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(
        body,
        json!([{ "estado": direct.0, "total_vendas": direct.1, "valor_total": direct.2 }])
    );
    assert_eq!(body[0]["total_vendas"], 2);
}

#[tokio::test]
async fn test_injection_attempt_is_rejected() {
    let (db, app) = test_app().await;
    post_json(&app, "/clientes", json!({ "nome": "Ana" })).await;

    let response = get(&app, "/views/DROP%20TABLE%20clientes%3B--").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid or nonexistent view", "code": "INVALID_VIEW" })
    );

    assert_eq!(db.count("clientes").await.unwrap(), 1);
}

#[tokio::test]
async fn test_undecodable_view_name_gets_json_error() {
    let (_db, app) = test_app().await;

    let response = get(&app, "/views/%FF").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid or nonexistent view", "code": "INVALID_VIEW" })
    );
}

#[tokio::test]
async fn test_table_name_is_not_a_view() {
    let (_db, app) = test_app().await;

    let response = get(&app, "/views/clientes").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

struct FailingViews;

#[async_trait]
impl ViewRepository for FailingViews {
    async fn fetch(&self, _view: NamedView) -> sportscar_sales_infrastructure::Result<Vec<ViewRow>> {
        Err(sportscar_sales_infrastructure::Error::Configuration(
            "view unavailable".to_string(),
        ))
    }
}

#[tokio::test]
async fn test_view_datastore_failure_is_reported_as_invalid_view() {
    let db = TestDatabase::new().await.unwrap();
    let state = AppState::new(AppConfig::default(), db.database().clone())
        .with_views(Arc::new(FailingViews));
    let app = create_app(state);

    let response = get(&app, "/views/vw_satisfacao_servicos").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid or nonexistent view");
}

#[tokio::test]
async fn test_request_id_header() {
    let (_db, app) = test_app().await;

    let response = get(&app, "/veiculos").await;
    assert!(response.headers().contains_key("x-request-id"));

    let request = Request::get("/views/nope")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (_db, app) = test_app().await;

    let response = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/veiculos"]["post"].is_object());
}
