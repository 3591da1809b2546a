//! Dining Table Model

use serde::{Deserialize, Serialize};

use super::enums::{Section, TableStatus};
use super::numeric::deserialize_whole_number;
use crate::JsonRecord;

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub table_number: i64,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub section: Section,
    pub capacity: i64,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: TableStatus,
}

/// Create / full-replacement payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub table_number: i64,
    pub section: Section,
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub capacity: i64,
    pub status: TableStatus,
}

impl DiningTableCreate {
    /// Build the payload from a record that already passed validation
    pub fn from_record(record: &JsonRecord) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(record.clone()))
    }
}

impl DiningTable {
    pub fn from_payload(id: i64, data: DiningTableCreate) -> Self {
        Self {
            id,
            table_number: data.table_number,
            section: data.section,
            capacity: data.capacity,
            status: data.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_floats_become_integers() {
        let record = json!({
            "tableNumber": 20.0,
            "section": "Patio",
            "capacity": 4.0,
            "status": "available"
        });
        let payload = DiningTableCreate::from_record(record.as_object().unwrap()).unwrap();
        assert_eq!(payload.table_number, 20);
        assert_eq!(payload.capacity, 4);
    }

    #[test]
    fn test_payload_ignores_client_id() {
        let record = json!({
            "id": 99,
            "tableNumber": 20,
            "section": "Patio",
            "capacity": 4,
            "status": "available"
        });
        let payload = DiningTableCreate::from_record(record.as_object().unwrap()).unwrap();
        let table = DiningTable::from_payload(7, payload);
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({
                "id": 7,
                "tableNumber": 20,
                "section": "Patio",
                "capacity": 4,
                "status": "available"
            })
        );
    }
}
