//! Order Model

use serde::{Deserialize, Serialize};

use super::enums::OrderStatus;
use super::numeric::deserialize_whole_number;
use crate::JsonRecord;

/// Order entity
///
/// `table_id` and `menu_item_id` point at a dining table and a menu item by
/// id. The references are not checked on write and may dangle after the
/// referenced row is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub table_id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: OrderStatus,
    /// Always serialized, `null` when absent
    pub special_instructions: Option<String>,
}

impl Order {
    pub fn from_payload(id: i64, data: OrderCreate) -> Self {
        Self {
            id,
            table_id: data.table_id,
            menu_item_id: data.menu_item_id,
            quantity: data.quantity,
            status: data.status,
            special_instructions: data.special_instructions,
        }
    }
}

/// Create / full-replacement payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub table_id: i64,
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub menu_item_id: i64,
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub quantity: i64,
    pub status: OrderStatus,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl OrderCreate {
    /// Build the payload from a record that already passed validation.
    ///
    /// Missing, null and empty `specialInstructions` are all stored as null.
    pub fn from_record(record: &JsonRecord) -> Result<Self, serde_json::Error> {
        let mut payload: Self = serde_json::from_value(serde_json::Value::Object(record.clone()))?;
        payload.special_instructions = payload.special_instructions.filter(|s| !s.is_empty());
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn payload(value: Value) -> OrderCreate {
        OrderCreate::from_record(value.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_missing_instructions_serialize_as_null() {
        let data = payload(json!({
            "tableId": 2, "menuItemId": 1, "quantity": 1, "status": "received"
        }));
        let order = serde_json::to_value(Order::from_payload(4, data)).unwrap();
        assert_eq!(order["specialInstructions"], Value::Null);
        assert!(order.as_object().unwrap().contains_key("specialInstructions"));
    }

    #[test]
    fn test_empty_instructions_become_null() {
        let data = payload(json!({
            "tableId": 2, "menuItemId": 1, "quantity": 1, "status": "ready",
            "specialInstructions": ""
        }));
        assert_eq!(data.special_instructions, None);
    }

    #[test]
    fn test_whole_float_ids() {
        let data = payload(json!({
            "tableId": 2.0, "menuItemId": 1.0, "quantity": 3.0, "status": "ready"
        }));
        assert_eq!((data.table_id, data.menu_item_id, data.quantity), (2, 1, 3));
    }

    #[test]
    fn test_instructions_kept_verbatim() {
        let data = payload(json!({
            "tableId": 2, "menuItemId": 1, "quantity": 3, "status": "served",
            "specialInstructions": "  No onions "
        }));
        assert_eq!(data.special_instructions.as_deref(), Some("  No onions "));
        assert_eq!(data.status, OrderStatus::Served);
    }
}
