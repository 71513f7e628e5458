//! Router-level tests: requests go through the full middleware stack via
//! `oneshot`, against an in-memory store.

mod support;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, bytes)
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

async fn create_cidade(app: &Router, nome: &str) -> i64 {
    let (status, body) = send(app, "POST", "/cidades", Some(json!({"nome": nome}))).await;
    assert_eq!(status, StatusCode::OK);
    json_of(&body)["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_ok() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn create_then_fetch_cidade() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let id = create_cidade(&app, "Joao Pessoa").await;

    let (status, body) = send(&app, "GET", &format!("/cidades/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({"id": id, "nome": "Joao Pessoa", "comercios": []}));
    Ok(())
}

#[tokio::test]
async fn unknown_cidade_is_404_without_body() -> anyhow::Result<()> {
    let app = support::test_app().await?;

    let (status, body) = send(&app, "GET", "/cidades/123", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(&app, "PUT", "/cidades/123", Some(json!({"nome": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (_, body) = send(&app, "GET", "/cidades", None).await;
    assert_eq!(json_of(&body), json!([]));
    Ok(())
}

#[tokio::test]
async fn unknown_comercio_update_is_404_without_body() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let cidade = create_cidade(&app, "Maceio").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/comercios/321",
        Some(json!({"nome": "Padaria", "responsavel": "Ivo", "tipo": "PADARIA", "cidadeId": cidade})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (_, body) = send(&app, "GET", "/comercios", None).await;
    assert_eq!(json_of(&body), json!([]));
    Ok(())
}

#[tokio::test]
async fn update_with_null_nome_is_400_and_keeps_row() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let id = create_cidade(&app, "Belem").await;

    let (status, body) = send(&app, "PUT", &format!("/cidades/{id}"), Some(json!({"nome": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json_of(&body)["details"]["nome"].is_array());

    let (_, body) = send(&app, "GET", &format!("/cidades/{id}"), None).await;
    assert_eq!(json_of(&body)["nome"], "Belem");
    Ok(())
}

#[tokio::test]
async fn missing_cidade_id_is_named_as_sent() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let (status, body) = send(
        &app,
        "POST",
        "/comercios",
        Some(json!({"nome": "Posto", "responsavel": "Rita", "tipo": "POSTO_GASOLINA"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = json_of(&body)["details"].clone();
    assert!(details["cidadeId"].is_array());
    assert!(details.get("cidade_id").is_none());
    Ok(())
}

#[tokio::test]
async fn null_nome_is_400_naming_the_field() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let (status, body) = send(&app, "POST", "/cidades", Some(json!({"nome": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v = json_of(&body);
    assert_eq!(v["error"], "Validation Error");
    assert!(v["details"]["nome"].is_array());

    let (_, body) = send(&app, "GET", "/cidades", None).await;
    assert_eq!(json_of(&body), json!([]));
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_400() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/cidades")
        .header("content-type", "application/json")
        .body(Body::from("{\"nome\": "))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_tipo_is_rejected_and_not_stored() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let cidade = create_cidade(&app, "Aracaju").await;

    let (status, body) = send(
        &app,
        "POST",
        "/comercios",
        Some(json!({"nome": "Mercadinho", "responsavel": "Bia", "tipo": "MERCADO", "cidadeId": cidade})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json_of(&body)["details"]["tipo"].is_array());

    let (_, body) = send(&app, "GET", "/comercios", None).await;
    assert_eq!(json_of(&body), json!([]));
    Ok(())
}

#[tokio::test]
async fn comercio_for_missing_cidade_is_server_error() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let (status, _) = send(
        &app,
        "POST",
        "/comercios",
        Some(json!({"nome": "Farmacia", "responsavel": "Caio", "tipo": "FARMACIA", "cidadeId": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, body) = send(&app, "GET", "/comercios", None).await;
    assert_eq!(json_of(&body), json!([]));
    Ok(())
}

#[tokio::test]
async fn comercio_crud_and_no_single_fetch_route() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let cidade = create_cidade(&app, "Teresina").await;

    let (status, body) = send(
        &app,
        "POST",
        "/comercios",
        Some(json!({"nome": "Lanche Feliz", "responsavel": "Davi", "tipo": "LANCHONETE", "cidadeId": cidade})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created = json_of(&body);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["tipo"], "LANCHONETE");
    assert_eq!(created["cidadeId"], cidade);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/comercios/{id}"),
        Some(json!({"id": 777, "nome": "Lanche Feliz 2", "responsavel": "Davi", "tipo": "PADARIA", "cidadeId": cidade})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = json_of(&body);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["tipo"], "PADARIA");

    let (status, _) = send(&app, "GET", &format!("/comercios/{id}"), None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, "DELETE", &format!("/comercios/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &format!("/comercios/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/comercios", None).await;
    assert_eq!(json_of(&body), json!([]));
    Ok(())
}

#[tokio::test]
async fn metrics_exposes_request_counter() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    send(&app, "GET", "/health", None).await;
    let (status, body) = send(&app, "GET", "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body)?;
    assert!(text.contains("cidades_api_http_requests_total"));
    Ok(())
}

#[tokio::test]
async fn openapi_document_served() -> anyhow::Result<()> {
    let app = support::test_app().await?;
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json_of(&body)["paths"]["/cidades/{id}"].is_object());
    Ok(())
}
