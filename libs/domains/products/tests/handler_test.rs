//! Handler tests for the products domain over the in-memory repository.
//!
//! These drive the domain router end to end: JSON in, status code and body
//! out, with real repository rules underneath.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

fn widget(name: &str) -> Value {
    json!({"name": name, "quantity": 10, "price": 100.25})
}

#[tokio::test]
async fn test_empty_catalogue_lists_as_404() {
    let app = handlers::router(InMemoryProductRepository::new());

    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"No products detected in the database");
}

#[tokio::test]
async fn test_create_then_list_and_get() {
    let repo = InMemoryProductRepository::new();
    let app = handlers::router(repo.clone());

    let (status, body) = send(&app, "POST", "/", Some(widget("Product 1"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["message"], messages::ADDED);

    send(&app, "POST", "/", Some(widget("Product 2"))).await;

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let list: Vec<ProductDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(list.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(list[0].name, "Product 1");

    let (status, body) = send(&app, "GET", "/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json(&body),
        json!({"id": 2, "name": "Product 2", "quantity": 10, "price": 100.25})
    );

    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_duplicate_create_is_400_and_count_unchanged() {
    let repo = InMemoryProductRepository::new();
    let app = handlers::router(repo.clone());

    send(&app, "POST", "/", Some(widget("Existing product"))).await;
    let (status, body) = send(&app, "POST", "/", Some(widget("Existing product"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json(&body),
        json!({"success": false, "message": "Existing product already added"})
    );
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_validation_failure_leaves_store_untouched() {
    let repo = InMemoryProductRepository::new();
    let app = handlers::router(repo.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({"name": "   ", "quantity": 1, "price": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"], "BadRequest");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_price_the_store_cannot_hold_is_400() {
    let repo = InMemoryProductRepository::new();
    let app = handlers::router(repo.clone());

    for price in [json!(9.999), json!(1e20)] {
        let (status, body) = send(
            &app,
            "POST",
            "/",
            Some(json!({"name": "Widget", "quantity": 1, "price": price})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json(&body)["details"]["price"].is_array());
    }
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_missing_required_field_is_400() {
    let repo = InMemoryProductRepository::new();
    let app = handlers::router(repo.clone());

    let (status, _) = send(&app, "POST", "/", Some(json!({"name": "Widget"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_update_flow() {
    let repo = InMemoryProductRepository::new();
    let app = handlers::router(repo.clone());
    send(&app, "POST", "/", Some(widget("Widget"))).await;
    send(&app, "POST", "/", Some(widget("Gadget"))).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/",
        Some(json!({"id": 1, "name": "Widget v2", "quantity": 0, "price": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["message"], "Product is updated successfully");

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.name, "Widget v2");
    assert_eq!(stored.quantity, 0);

    let (status, body) = send(
        &app,
        "PUT",
        "/",
        Some(json!({"id": 1, "name": "Gadget", "quantity": 1, "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["message"], messages::NAME_TAKEN);

    let (status, body) = send(
        &app,
        "PUT",
        "/",
        Some(json!({"id": 40, "name": "Nobody", "quantity": 1, "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["message"], "Product not found!");
}

#[tokio::test]
async fn test_delete_flow() {
    let repo = InMemoryProductRepository::new();
    let app = handlers::router(repo.clone());
    send(&app, "POST", "/", Some(widget("Widget"))).await;

    let (status, body) = send(&app, "DELETE", "/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json(&body),
        json!({"success": true, "message": "Product is deleted successfully"})
    );
    assert!(repo.is_empty().await);

    let (status, body) = send(&app, "DELETE", "/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["message"], "Product not found!");

    let (status, body) = send(&app, "GET", "/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"Product requested not found");
}
