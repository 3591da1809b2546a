//! Router assembly
//!
//! [`build_router`] registers the routes, [`build_app`] adds the middleware
//! stack. Both the HTTP server and the in-process tests go through
//! [`build_app`].

use axum::middleware as axum_middleware;
use axum::{Json, Router, http::StatusCode};
use http::{HeaderName, HeaderValue};
use shared::response::ErrorResponse;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api::{health, menu_items, orders, tables};
use crate::core::ServerState;
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(tables::router())
        .merge(menu_items::router())
        .merge(orders::router())
        .merge(health::router())
}

/// Build a fully configured application with all middleware
///
/// Unmatched paths are served from `STATIC_DIR` when it is configured,
/// otherwise they get a JSON 404.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let router = match &state.config.static_dir {
        Some(dir) => build_router().fallback_service(ServeDir::new(dir)),
        None => build_router().fallback(route_not_found),
    };

    router
        // CORS - 允许所有来源
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every inner layer sees the id
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

async fn route_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
}
