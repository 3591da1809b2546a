//! Router-level behavior outside the entity handlers

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use common::{TestApp, test_config};
use serde_json::json;
use tower::ServiceExt;
use training_server::db::DbService;
use training_server::{ServerState, build_app};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/users").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Route not found" }));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/tables")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"tableNumber\": 20,"))
        .unwrap();
    let (status, body) = app.raw(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Malformed JSON body"));
}

#[tokio::test]
async fn test_non_json_body_is_validated_as_empty() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/orders")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("tableId=1"))
        .unwrap();
    let (status, body) = app.raw(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_request_id_and_cors_headers() {
    let db = DbService::in_memory().await.unwrap();
    let state = ServerState::from_db(test_config(), db);
    let router = build_app(&state).with_state(state);

    let request = Request::builder()
        .uri("/tables")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn test_seeded_sample_data() {
    let app = TestApp::seeded().await;

    let (_, tables) = app.get("/tables").await;
    assert_eq!(tables.as_array().unwrap().len(), 3);
    assert_eq!(
        tables[0],
        json!({ "id": 1, "tableNumber": 5, "section": "Patio", "capacity": 4, "status": "occupied" })
    );

    let (_, item) = app.get("/menuitems/3").await;
    assert_eq!(
        item,
        json!({ "id": 3, "name": "Tiramisu", "price": 7.5, "category": "Dessert", "available": 0 })
    );

    let (_, order) = app.get("/orders/2").await;
    assert_eq!(order["specialInstructions"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_file_database_persists_across_restarts() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("training.db");
    let path = path.to_str().unwrap();

    let mut config = test_config();
    config.database_path = path.to_string();
    config.seed_data = true;

    let app = TestApp::from_state(ServerState::initialize(&config).await.unwrap());
    let id = app
        .create(
            "/tables",
            json!({ "tableNumber": 40, "section": "Private Room", "capacity": 10, "status": "reserved" }),
        )
        .await;
    app.state.close().await;

    // Seeding is skipped once tables exist
    let reopened = TestApp::from_state(ServerState::initialize(&config).await.unwrap());
    let (status, body) = reopened.get(&format!("/tables/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tableNumber"], 40);

    let (_, all) = reopened.get("/tables").await;
    assert_eq!(all.as_array().unwrap().len(), 4);
    reopened.state.close().await;
}
