//! Input validation
//!
//! One validator per entity. Each takes the raw JSON object from the request
//! body and returns every violated rule as a message, in field order. An empty
//! list means the record may be stored. Validators never stop at the first
//! failure.
//!
//! Required numbers follow a truthiness rule: `0` counts as missing, so it
//! fails exactly like an absent field. `price` is the exception and accepts
//! `0`. Integer fields take any number without a fractional part, so `4.0`
//! is `4`.

use serde_json::{Map, Value};

use crate::models::{
    Enumerated, MenuCategory, OrderStatus, Section, TableStatus, availability_flag, whole_number,
};


/// Untyped request record
pub type JsonRecord = Map<String, Value>;

// ── Limits ──────────────────────────────────────────────────────────

/// Menu item names
pub const MAX_NAME_LEN: usize = 100;

/// Order special instructions
pub const MAX_INSTRUCTIONS_LEN: usize = 200;

/// Seats per table
pub const CAPACITY_RANGE: (i64, i64) = (1, 12);

/// Portions per order line
pub const QUANTITY_RANGE: (i64, i64) = (1, 20);

/// Menu price, currency unit
pub const PRICE_RANGE: (f64, f64) = (0.0, 999.99);

// ── Validators ──────────────────────────────────────────────────────

/// Validate a dining table record
pub fn validate_table(record: &JsonRecord) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_integer_in(record, "tableNumber", 1, i64::MAX) {
        errors.push(positive_message("tableNumber"));
    }
    if !is_member::<Section>(record, "section") {
        errors.push(one_of_message::<Section>("section"));
    }
    let (min, max) = CAPACITY_RANGE;
    if !is_integer_in(record, "capacity", min, max) {
        errors.push(format!("capacity must be between {min} and {max}"));
    }
    if !is_member::<TableStatus>(record, "status") {
        errors.push(one_of_message::<TableStatus>("status"));
    }

    errors
}

/// Validate a menu item record
pub fn validate_menu_item(record: &JsonRecord) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_non_blank_string(record, "name") {
        errors.push("name is required and must be a non-empty string".to_string());
    }
    if char_len(record, "name").is_some_and(|len| len > MAX_NAME_LEN) {
        errors.push(format!("name must be {MAX_NAME_LEN} characters or less"));
    }
    let (min, max) = PRICE_RANGE;
    if !is_number_in(record, "price", min, max) {
        errors.push(format!("price must be a number between {min} and {max}"));
    }
    if !is_member::<MenuCategory>(record, "category") {
        errors.push(one_of_message::<MenuCategory>("category"));
    }
    if record.get("available").is_some_and(|v| availability_flag(v).is_none()) {
        errors.push("available must be a boolean".to_string());
    }

    errors
}

/// Validate an order record
///
/// `tableId` and `menuItemId` are only checked for shape; whether the rows
/// exist is not this function's concern.
pub fn validate_order(record: &JsonRecord) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_integer_in(record, "tableId", 1, i64::MAX) {
        errors.push(positive_message("tableId"));
    }
    if !is_integer_in(record, "menuItemId", 1, i64::MAX) {
        errors.push(positive_message("menuItemId"));
    }
    let (min, max) = QUANTITY_RANGE;
    if !is_integer_in(record, "quantity", min, max) {
        errors.push(format!("quantity must be between {min} and {max}"));
    }
    if !is_member::<OrderStatus>(record, "status") {
        errors.push(one_of_message::<OrderStatus>("status"));
    }
    if present(record, "specialInstructions").is_some_and(|v| !v.is_string()) {
        errors.push("specialInstructions must be a string".to_string());
    }
    if char_len(record, "specialInstructions").is_some_and(|len| len > MAX_INSTRUCTIONS_LEN) {
        errors.push(format!(
            "specialInstructions must be {MAX_INSTRUCTIONS_LEN} characters or less"
        ));
    }

    errors
}

// ── Field rules ─────────────────────────────────────────────────────

/// Field value unless it is absent or null
fn present<'a>(record: &'a JsonRecord, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|v| !v.is_null())
}

fn is_integer_in(record: &JsonRecord, field: &str, min: i64, max: i64) -> bool {
    record
        .get(field)
        .and_then(whole_number)
        .is_some_and(|v| (min..=max).contains(&v))
}

fn is_number_in(record: &JsonRecord, field: &str, min: f64, max: f64) -> bool {
    record
        .get(field)
        .and_then(Value::as_f64)
        .is_some_and(|v| (min..=max).contains(&v))
}

fn is_non_blank_string(record: &JsonRecord, field: &str) -> bool {
    record
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}

fn is_member<E: Enumerated>(record: &JsonRecord, field: &str) -> bool {
    record
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| E::parse(s).is_some())
}

fn char_len(record: &JsonRecord, field: &str) -> Option<usize> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(|s| s.chars().count())
}

fn positive_message(field: &str) -> String {
    format!("{field} must be a positive number")
}

fn one_of_message<E: Enumerated>(field: &str) -> String {
    format!("{field} must be one of: {}", E::allowed())
}
