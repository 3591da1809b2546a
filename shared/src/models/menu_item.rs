//! Menu Item Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::MenuCategory;
use super::numeric::whole_number;
use crate::JsonRecord;

/// Stored value of `available` when the item can be ordered
pub const AVAILABLE: i64 = 1;
/// Stored value of `available` when the item is off the menu
pub const UNAVAILABLE: i64 = 0;

/// Menu item entity
///
/// `available` is kept in its stored integer form (0/1) on the wire so that a
/// record read back from the API can be sent again unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub category: MenuCategory,
    pub available: i64,
}

impl MenuItem {
    pub fn from_payload(id: i64, data: MenuItemCreate) -> Self {
        Self {
            id,
            name: data.name,
            price: data.price,
            category: data.category,
            available: data.available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available != UNAVAILABLE
    }
}

/// Create / full-replacement payload, already in stored form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub category: MenuCategory,
    pub available: i64,
}

#[derive(Deserialize)]
struct MenuItemInput {
    name: String,
    price: f64,
    category: MenuCategory,
}

impl MenuItemCreate {
    /// Build the payload from a record that already passed validation.
    ///
    /// A missing `available` defaults to [`AVAILABLE`]; an explicit null is
    /// falsy and stores [`UNAVAILABLE`].
    pub fn from_record(record: &JsonRecord) -> Result<Self, serde_json::Error> {
        let input: MenuItemInput = serde_json::from_value(Value::Object(record.clone()))?;
        Ok(Self {
            name: input.name,
            price: input.price,
            category: input.category,
            available: record
                .get("available")
                .map_or(Some(AVAILABLE), availability_flag)
                .unwrap_or(AVAILABLE),
        })
    }
}

/// Stored form of a JSON availability value.
///
/// `true`/`1` map to [`AVAILABLE`], `false`/`0`/null to [`UNAVAILABLE`];
/// anything else has no stored form.
pub fn availability_flag(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(true) => Some(AVAILABLE),
        Value::Bool(false) | Value::Null => Some(UNAVAILABLE),
        Value::Number(_) => match whole_number(value) {
            Some(AVAILABLE) => Some(AVAILABLE),
            Some(UNAVAILABLE) => Some(UNAVAILABLE),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> MenuItemCreate {
        MenuItemCreate::from_record(value.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_available_defaults_to_stored_true() {
        let item = payload(json!({ "name": "Soup", "price": 4.5, "category": "Side" }));
        assert_eq!(item.available, AVAILABLE);
    }

    #[test]
    fn test_explicit_null_is_unavailable() {
        let item = payload(json!({
            "name": "Soup", "price": 4.5, "category": "Side", "available": null
        }));
        assert_eq!(item.available, UNAVAILABLE);
    }

    #[test]
    fn test_available_boolean_is_encoded() {
        let item = payload(json!({
            "name": "Soup", "price": 4.5, "category": "Side", "available": false
        }));
        assert_eq!(item.available, UNAVAILABLE);
        assert!(!MenuItem::from_payload(1, item).is_available());
    }

    #[test]
    fn test_stored_form_round_trips() {
        let item = payload(json!({
            "name": "Soup", "price": 4, "category": "Side", "available": 0
        }));
        assert_eq!(item.available, UNAVAILABLE);
        assert_eq!(item.price, 4.0);
    }

    #[test]
    fn test_availability_flag_values() {
        assert_eq!(availability_flag(&json!(2)), None);
        assert_eq!(availability_flag(&json!("yes")), None);
        assert_eq!(availability_flag(&json!(0.5)), None);
        assert_eq!(availability_flag(&json!(1.0)), Some(AVAILABLE));
        assert_eq!(availability_flag(&Value::Null), Some(UNAVAILABLE));
    }
}
