/// Common test utilities for Cardboard integration tests
///
/// This file contains the test application setup and helpers for sending
/// requests to it and reading the responses back.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use cardboard::{create_app, db::init_pool, models::Card};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::Service;

/// Creates a test application with a fresh in-memory SQLite database
///
/// Every connection in the pool shares one named in-memory database, so the
/// schema created by the migrations is visible to all of them. Using a unique
/// name per call keeps tests isolated from each other.
pub fn create_test_app() -> Router {
    let database_url = format!("file:it_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = Arc::new(init_pool(&database_url).unwrap());

    let conn = &mut pool.get().unwrap();
    cardboard::run_migrations(conn).unwrap();

    create_app(pool)
}

/// Creates a test application whose database has no `cards` table
pub fn create_broken_app() -> Router {
    let database_url = format!("file:it_broken_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    create_app(Arc::new(init_pool(&database_url).unwrap()))
}

/// Sends a request and returns the status and raw body
///
/// ### Arguments
///
/// * `app` - The test application
/// * `method` - The HTTP method
/// * `uri` - The request path
/// * `body` - Optional raw body, sent with a JSON content type
pub async fn send(app: &mut Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

/// Sends a request with a JSON body
pub async fn send_json(app: &mut Router, method: &str, uri: &str, body: &Value) -> (StatusCode, Vec<u8>) {
    send(app, method, uri, Some(&body.to_string())).await
}

/// Creates a card via the API and returns it
pub async fn create_card(app: &mut Router, status: &str) -> Card {
    let (status_code, body) = send_json(app, "POST", "/cards", &json!({ "status": status })).await;
    assert_eq!(status_code, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

/// Lists all cards via the API
pub async fn list_cards(app: &mut Router) -> Vec<Card> {
    let (status, body) = send(app, "GET", "/cards", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}
