//! Dining Table Repository

use shared::models::{DiningTable, DiningTableCreate, Enumerated};

use super::{Record, SqliteQuery};

impl Record for DiningTable {
    type Payload = DiningTableCreate;

    const TABLE: &'static str = "tables";
    const COLUMNS: &'static [&'static str] = &["table_number", "section", "capacity", "status"];

    fn bind_payload<'q>(query: SqliteQuery<'q>, data: &DiningTableCreate) -> SqliteQuery<'q> {
        query
            .bind(data.table_number)
            .bind(data.section.as_str())
            .bind(data.capacity)
            .bind(data.status.as_str())
    }

    fn from_payload(id: i64, data: DiningTableCreate) -> Self {
        DiningTable::from_payload(id, data)
    }
}
