//! Order Repository

use shared::models::{Enumerated, Order, OrderCreate};

use super::{Record, SqliteQuery};

impl Record for Order {
    type Payload = OrderCreate;

    const TABLE: &'static str = "orders";
    const COLUMNS: &'static [&'static str] = &[
        "table_id",
        "menu_item_id",
        "quantity",
        "status",
        "special_instructions",
    ];

    fn bind_payload<'q>(query: SqliteQuery<'q>, data: &OrderCreate) -> SqliteQuery<'q> {
        query
            .bind(data.table_id)
            .bind(data.menu_item_id)
            .bind(data.quantity)
            .bind(data.status.as_str())
            .bind(data.special_instructions.clone())
    }

    fn from_payload(id: i64, data: OrderCreate) -> Self {
        Order::from_payload(id, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::{Repository, SqliteRepository};
    use shared::models::OrderStatus;

    #[tokio::test]
    async fn test_dangling_references_are_stored() {
        let db = DbService::in_memory().await.unwrap();
        let repo = SqliteRepository::<Order>::new(db.pool.clone());

        let data = OrderCreate {
            table_id: 987_654,
            menu_item_id: 123_456,
            quantity: 2,
            status: OrderStatus::Received,
            special_instructions: None,
        };
        let id = repo.create(&data).await.unwrap();
        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.table_id, 987_654);
        assert_eq!(stored.special_instructions, None);
    }
}
