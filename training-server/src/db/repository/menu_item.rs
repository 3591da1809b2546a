//! Menu Item Repository

use shared::models::{Enumerated, MenuItem, MenuItemCreate};

use super::{Record, SqliteQuery};

impl Record for MenuItem {
    type Payload = MenuItemCreate;

    const TABLE: &'static str = "menuitems";
    const COLUMNS: &'static [&'static str] = &["name", "price", "category", "available"];

    fn bind_payload<'q>(query: SqliteQuery<'q>, data: &MenuItemCreate) -> SqliteQuery<'q> {
        query
            .bind(data.name.clone())
            .bind(data.price)
            .bind(data.category.as_str())
            .bind(data.available)
    }

    fn from_payload(id: i64, data: MenuItemCreate) -> Self {
        MenuItem::from_payload(id, data)
    }
}
