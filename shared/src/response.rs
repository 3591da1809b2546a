//! API Response types
//!
//! Entities are returned as bare JSON objects/arrays. Everything else uses one
//! of the two bodies below, so every failure carries an `error` key.

use serde::{Deserialize, Serialize};

/// `error` value used for every validation failure
pub const VALIDATION_ERROR: &str = "Validation Error";

/// Error body
///
/// ```json
/// { "error": "Validation Error", "details": ["capacity must be between 1 and 12"] }
/// { "error": "Table not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Error body without details
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Validation failure listing every violated rule
    pub fn validation(details: Vec<String>) -> Self {
        Self {
            error: VALIDATION_ERROR.to_string(),
            details: Some(details),
        }
    }

    /// `"<Name> not found"`
    pub fn not_found(name: &str) -> Self {
        Self::new(format!("{name} not found"))
    }
}

/// Confirmation body returned by deletes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// `"<Name> deleted successfully"`
    pub fn deleted(name: &str) -> Self {
        Self {
            message: format!("{name} deleted successfully"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_has_no_details_key() {
        let body = serde_json::to_value(ErrorResponse::not_found("Menu item")).unwrap();
        assert_eq!(body, json!({ "error": "Menu item not found" }));
    }

    #[test]
    fn test_validation_body_shape() {
        let body = serde_json::to_value(ErrorResponse::validation(vec![
            "quantity must be between 1 and 20".to_string(),
        ]))
        .unwrap();
        assert_eq!(
            body,
            json!({
                "error": "Validation Error",
                "details": ["quantity must be between 1 and 20"]
            })
        );
    }

    #[test]
    fn test_deleted_message() {
        assert_eq!(
            MessageResponse::deleted("Order").message,
            "Order deleted successfully"
        );
    }
}
