//! 统一错误处理
//!
//! [`AppError`] is the error type of every HTTP handler. Its response bodies
//! always carry an `error` key:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `Validation` | 400 | `{"error":"Validation Error","details":[...]}` |
//! | `NotFound` | 404 | `{"error":"<Name> not found"}` |
//! | `Invalid` | 400 | `{"error":"<message>"}` |
//! | `Rejected` | as given (e.g. 413) | `{"error":"<message>"}` |
//! | `Database` | 500 | `{"error":"<store message>"}` |
//! | `Internal` | 500 | `{"error":"<message>"}` |
//!
//! Store messages are passed through verbatim.
//!
//! # 使用示例
//!
//! ```ignore
//! Err(AppError::NotFound("Table"))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::response::ErrorResponse;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 客户端错误 (4xx) ==========
    #[error("Validation failed: {}", .0.join("; "))]
    /// 验证失败 (400), every violated rule
    Validation(Vec<String>),

    #[error("{0} not found")]
    /// 资源不存在 (404), singular display name of the entity
    NotFound(&'static str),

    #[error("Invalid request: {0}")]
    /// 无效请求 (400)
    Invalid(String),

    #[error("Request rejected ({0}): {1}")]
    /// 请求体无法读取, keeps the extractor's status (e.g. 413)
    Rejected(StatusCode, String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rejected(status, _) => *status,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body for this error
    pub fn body(&self) -> ErrorResponse {
        match self {
            AppError::Validation(details) => ErrorResponse::validation(details.clone()),
            AppError::NotFound(name) => ErrorResponse::not_found(name),
            AppError::Invalid(msg)
            | AppError::Rejected(_, msg)
            | AppError::Database(msg)
            | AppError::Internal(msg) => {
                ErrorResponse::new(msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
            }
            _ => {}
        }

        (self.status(), Json(self.body())).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
