use std::str::FromStr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use aviva_api::{app, AppState};
use aviva_order::OrderService;
use aviva_pay::{CazaPagos, PagaFacil, ProviderRegistry};
use aviva_store::MemoryOrderStore;

fn test_app() -> Router {
    let mut registry = ProviderRegistry::new();
    registry.register(Arc::new(CazaPagos::new()));
    registry.register(Arc::new(PagaFacil::new()));

    let store = Arc::new(MemoryOrderStore::new());
    let service = Arc::new(OrderService::new(store, Arc::new(registry)));

    app(AppState { orders: service })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn decimal(v: &Value) -> Decimal {
    Decimal::from_str(v.as_str().expect("amount serialized as decimal string")).unwrap()
}

fn sample_request() -> Value {
    json!({
        "payment_mode": "CREDIT_CARD",
        "items": [
            { "product_name": "Plan básico", "quantity": 2, "unit_price": 100 },
            { "product_name": "Soporte 30 días", "quantity": 1, "unit_price": 50 }
        ]
    })
}

async fn create_sample_order(app: &Router) -> Value {
    let (status, body) = send(app, "POST", "/api/orders", Some(sample_request())).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn create_order_quotes_the_cheapest_provider() {
    let app = test_app();

    let order = create_sample_order(&app).await;

    assert_eq!(decimal(&order["total_amount"]), dec!(250));
    assert_eq!(order["payment_mode"], json!("CREDIT_CARD"));
    assert_eq!(order["status"], json!("CREATED"));
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    assert_eq!(decimal(&order["items"][0]["subtotal"]), dec!(200));
    assert_eq!(decimal(&order["items"][1]["subtotal"]), dec!(50));

    // 250 on card: PagaFacil 1% (2.50) beats CazaPagos 2% (5.00)
    assert_eq!(order["provider_name"], json!("PagaFacil"));
    assert_eq!(decimal(&order["provider_fee"]), dec!(2.50));
    assert!(order["provider_order_id"]
        .as_str()
        .unwrap()
        .starts_with("PF-"));
}

#[tokio::test]
async fn create_order_with_no_items_is_a_bad_request() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "payment_mode": "CASH", "items": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("at least one item"));
}

#[tokio::test]
async fn create_order_with_missing_items_field_is_a_bad_request() {
    let app = test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({ "payment_mode": "CASH" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_order_with_invalid_quantity_is_a_bad_request() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "payment_mode": "CASH",
            "items": [{ "product_name": "Plan básico", "quantity": 0, "unit_price": 100 }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Plan básico"));
}

#[tokio::test]
async fn get_order_round_trips() {
    let app = test_app();
    let created = create_sample_order(&app).await;
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/api/orders/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(decimal(&fetched["total_amount"]), dec!(250));
}

#[tokio::test]
async fn get_unknown_order_is_not_found() {
    let app = test_app();

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/orders/{}", uuid::Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_orders_returns_newest_first() {
    let app = test_app();
    let first = create_sample_order(&app).await;
    let second = create_sample_order(&app).await;

    let (status, list) = send(&app, "GET", "/api/orders", None).await;

    assert_eq!(status, StatusCode::OK);
    let orders = list.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["id"], second["id"]);
    assert_eq!(orders[1]["id"], first["id"]);
}

#[tokio::test]
async fn cancel_is_idempotent() {
    let app = test_app();
    let created = create_sample_order(&app).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&app, "POST", &format!("/api/orders/{id}/cancel"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = send(&app, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(fetched["status"], json!("CANCELLED"));

    // a second cancel short-circuits to success
    let (status, _) = send(&app, "POST", &format!("/api/orders/{id}/cancel"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn cancel_unknown_order_is_not_found() {
    let app = test_app();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/orders/{}/cancel", uuid::Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pay_then_cancel_walks_the_lifecycle() {
    let app = test_app();
    let created = create_sample_order(&app).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&app, "POST", &format!("/api/orders/{id}/pay"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = send(&app, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(fetched["status"], json!("PAID"));

    // paying again is a no-op success
    let (status, _) = send(&app, "POST", &format!("/api/orders/{id}/pay"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // a paid order can still be cancelled
    let (status, _) = send(&app, "POST", &format!("/api/orders/{id}/cancel"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = send(&app, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(fetched["status"], json!("CANCELLED"));
}

#[tokio::test]
async fn pay_after_cancel_is_a_conflict() {
    let app = test_app();
    let created = create_sample_order(&app).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&app, "POST", &format!("/api/orders/{id}/cancel"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "POST", &format!("/api/orders/{id}/pay"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("transition"));
}
