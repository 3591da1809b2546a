//! In-process test harness
//!
//! Drives the fully assembled router with `tower::ServiceExt::oneshot`, so
//! requests go through the same middleware stack as the real server.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use training_server::db::DbService;
use training_server::{Config, ServerState, build_app};

/// Configuration that ignores the process environment
pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_PATH" => Some(":memory:".to_string()),
        "SEED_DATA" => Some("false".to_string()),
        _ => None,
    })
}

pub struct TestApp {
    pub state: ServerState,
    router: Router,
}

impl TestApp {
    /// Empty in-memory database
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.unwrap();
        Self::from_state(ServerState::from_db(test_config(), db))
    }

    /// In-memory database with the sample rows
    pub async fn seeded() -> Self {
        let mut config = test_config();
        config.seed_data = true;
        Self::from_state(ServerState::initialize(&config).await.unwrap())
    }

    pub fn from_state(state: ServerState) -> Self {
        let router = build_app(&state).with_state(state.clone());
        Self { state, router }
    }

    /// Send a request and return status and JSON body (`Null` if empty)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.raw(builder.body(body).unwrap()).await
    }

    pub async fn raw(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// POST and return the new id, asserting 201
    pub async fn create(&self, uri: &str, body: Value) -> i64 {
        let (status, created) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "{created}");
        created["id"].as_i64().unwrap()
    }
}

/// `details` as a list of strings
pub fn details(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
