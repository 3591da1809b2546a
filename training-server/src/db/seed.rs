//! Sample data
//!
//! A fresh database gets three tables, three menu items and three orders so
//! the API has something to return on the first request. Seeding only runs
//! while the `tables` table is empty, and goes through the same repositories
//! the handlers use.

use shared::models::{
    AVAILABLE, DiningTable, DiningTableCreate, MenuCategory, MenuItem, MenuItemCreate, Order,
    OrderCreate, OrderStatus, Section, TableStatus, UNAVAILABLE,
};

use super::repository::{RepoResult, Repository};

fn sample_tables() -> Vec<DiningTableCreate> {
    [
        (5, Section::Patio, 4, TableStatus::Occupied),
        (12, Section::MainDining, 6, TableStatus::Available),
        (3, Section::BarArea, 2, TableStatus::Reserved),
    ]
    .into_iter()
    .map(|(table_number, section, capacity, status)| DiningTableCreate {
        table_number,
        section,
        capacity,
        status,
    })
    .collect()
}

fn sample_menu_items() -> Vec<MenuItemCreate> {
    [
        ("Margherita Pizza", 12.99, MenuCategory::MainCourse, AVAILABLE),
        ("Caesar Salad", 8.99, MenuCategory::Appetizer, AVAILABLE),
        ("Tiramisu", 7.50, MenuCategory::Dessert, UNAVAILABLE),
    ]
    .into_iter()
    .map(|(name, price, category, available)| MenuItemCreate {
        name: name.to_string(),
        price,
        category,
        available,
    })
    .collect()
}

fn sample_orders() -> Vec<OrderCreate> {
    [
        (1, 1, 2, OrderStatus::Preparing, Some("No olives")),
        (2, 2, 1, OrderStatus::Received, None),
        (1, 3, 3, OrderStatus::Served, Some("Extra whipped cream")),
    ]
    .into_iter()
    .map(
        |(table_id, menu_item_id, quantity, status, notes)| OrderCreate {
            table_id,
            menu_item_id,
            quantity,
            status,
            special_instructions: notes.map(str::to_string),
        },
    )
    .collect()
}

/// Insert the sample rows if there are no tables yet
///
/// Returns `true` when data was inserted.
pub async fn seed_if_empty(
    tables: &dyn Repository<DiningTable>,
    menu_items: &dyn Repository<MenuItem>,
    orders: &dyn Repository<Order>,
) -> RepoResult<bool> {
    if !tables.find_all().await?.is_empty() {
        tracing::debug!("Tables present, skipping sample data");
        return Ok(false);
    }

    tracing::info!("Seeding initial data...");

    for table in sample_tables() {
        tables.create(&table).await?;
    }
    for item in sample_menu_items() {
        menu_items.create(&item).await?;
    }
    for order in sample_orders() {
        orders.create(&order).await?;
    }

    tracing::info!("Initial data seeded");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::SqliteRepository;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = DbService::in_memory().await.unwrap();
        let tables = SqliteRepository::<DiningTable>::new(db.pool.clone());
        let menu_items = SqliteRepository::<MenuItem>::new(db.pool.clone());
        let orders = SqliteRepository::<Order>::new(db.pool.clone());

        assert!(seed_if_empty(&tables, &menu_items, &orders).await.unwrap());
        assert!(!seed_if_empty(&tables, &menu_items, &orders).await.unwrap());

        assert_eq!(tables.find_all().await.unwrap().len(), 3);
        let items = menu_items.find_all().await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].name, "Tiramisu");
        assert!(!items[2].is_available());

        let all_orders = orders.find_all().await.unwrap();
        assert_eq!(all_orders.len(), 3);
        assert_eq!(all_orders[1].special_instructions, None);
        assert_eq!(all_orders[2].status, OrderStatus::Served);
    }
}
