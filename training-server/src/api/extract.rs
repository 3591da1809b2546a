//! Request body extraction
//!
//! Bodies are taken as untyped JSON objects so that validation can report
//! every problem at once instead of failing on the first field serde trips
//! over.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;
use shared::JsonRecord;

use crate::utils::AppError;

/// Untyped JSON object body
///
/// | Body | Result |
/// |------|--------|
/// | JSON object | that object |
/// | empty, other JSON value, non-JSON content type | empty record |
/// | malformed JSON | 400 `{"error": ...}` |
/// | unreadable body (e.g. over the size limit) | the rejection's status |
#[derive(Debug, Clone, Default)]
pub struct JsonBody(pub JsonRecord);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(record)) => Ok(Self(record)),
            Ok(_) => Ok(Self::default()),
            Err(e) => Err(AppError::Invalid(format!("Malformed JSON body: {e}"))),
        }
    }
}

/// `application/json`, `application/*+json`, parameters allowed
fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
