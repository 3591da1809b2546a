//! Validated CRUD resource
//!
//! One generic set of handlers serves every entity. A [`Resource`] ties an
//! entity to its validator, its normalization and its repository; the
//! handlers do the rest:
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/` | 200 array | 500 |
//! | GET | `/{id}` | 200 entity | 404, 500 |
//! | POST | `/` | 201 entity | 400, 500 |
//! | PUT | `/{id}` | 200 entity | 400, 404, 500 |
//! | DELETE | `/{id}` | 200 message | 404, 500 |
//!
//! Validation runs before any store access; a rejected record never reaches
//! the repository.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use shared::JsonRecord;
use shared::response::MessageResponse;

use super::extract::JsonBody;
use crate::core::ServerState;
use crate::db::repository::{Record, Repository};
use crate::utils::{AppError, AppResult};

/// An entity exposed over HTTP
pub trait Resource: Send + Sync + 'static {
    type Entity: Record;

    /// Singular display name, e.g. `"Menu item"`
    const NAME: &'static str;

    /// Every violated rule, empty when the record is acceptable
    fn validate(record: &JsonRecord) -> Vec<String>;

    /// Stored form of a record that passed validation
    fn normalize(record: &JsonRecord) -> Result<Payload<Self>, serde_json::Error>;

    fn repository(state: &ServerState) -> &Arc<dyn Repository<Self::Entity>>;
}

/// Write payload of a resource's entity
pub type Payload<R> = <<R as Resource>::Entity as Record>::Payload;

/// Collection and item routes for `R`, to be nested under its path
pub fn routes<R: Resource>() -> Router<ServerState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(get_by_id::<R>).put(update::<R>).delete(delete::<R>),
        )
}

/// Path token as a row id
///
/// Tokens that are not a positive integer cannot name a row.
pub fn parse_id(token: &str) -> Option<i64> {
    token.parse::<i64>().ok().filter(|id| *id > 0)
}

fn validated<R: Resource>(record: &JsonRecord) -> AppResult<Payload<R>> {
    let errors = R::validate(record);
    if !errors.is_empty() {
        tracing::warn!(resource = R::NAME, errors = ?errors, "Validation failed");
        return Err(AppError::Validation(errors));
    }
    R::normalize(record).map_err(|e| AppError::Internal(e.to_string()))
}

/// GET / - 获取全部
pub async fn list<R: Resource>(State(state): State<ServerState>) -> AppResult<Json<Vec<R::Entity>>> {
    let rows = R::repository(&state).find_all().await?;
    Ok(Json(rows))
}

/// GET /{id} - 获取单个
pub async fn get_by_id<R: Resource>(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<R::Entity>> {
    let id = parse_id(&id).ok_or(AppError::NotFound(R::NAME))?;
    R::repository(&state)
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(R::NAME))
}

/// POST / - 创建
pub async fn create<R: Resource>(
    State(state): State<ServerState>,
    JsonBody(record): JsonBody,
) -> AppResult<(StatusCode, Json<R::Entity>)> {
    let payload = validated::<R>(&record)?;
    let id = R::repository(&state).create(&payload).await?;

    tracing::info!(resource = R::NAME, id, "Created");
    Ok((StatusCode::CREATED, Json(<R::Entity as Record>::from_payload(id, payload))))
}

/// PUT /{id} - 整体替换
///
/// Validation comes first, so an invalid body on an unknown id is a 400.
pub async fn update<R: Resource>(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(record): JsonBody,
) -> AppResult<Json<R::Entity>> {
    let payload = validated::<R>(&record)?;
    let id = parse_id(&id).ok_or(AppError::NotFound(R::NAME))?;

    if R::repository(&state).update(id, &payload).await? == 0 {
        return Err(AppError::NotFound(R::NAME));
    }

    tracing::info!(resource = R::NAME, id, "Updated");
    Ok(Json(<R::Entity as Record>::from_payload(id, payload)))
}

/// DELETE /{id} - 删除
pub async fn delete<R: Resource>(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id).ok_or(AppError::NotFound(R::NAME))?;

    if R::repository(&state).delete(id).await? == 0 {
        return Err(AppError::NotFound(R::NAME));
    }

    tracing::info!(resource = R::NAME, id, "Deleted");
    Ok(Json(MessageResponse::deleted(R::NAME)))
}
