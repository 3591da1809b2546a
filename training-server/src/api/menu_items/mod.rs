//! Menu Item API 模块
//!
//! `/menuitems` - 菜品管理

use std::sync::Arc;

use axum::Router;
use shared::JsonRecord;
use shared::models::{MenuItem, MenuItemCreate};
use shared::validation::validate_menu_item;

use super::resource::{self, Resource};
use crate::core::ServerState;
use crate::db::repository::Repository;

/// 菜品资源
pub struct MenuItems;

impl Resource for MenuItems {
    type Entity = MenuItem;

    const NAME: &'static str = "Menu item";

    fn validate(record: &JsonRecord) -> Vec<String> {
        validate_menu_item(record)
    }

    fn normalize(record: &JsonRecord) -> Result<MenuItemCreate, serde_json::Error> {
        MenuItemCreate::from_record(record)
    }

    fn repository(state: &ServerState) -> &Arc<dyn Repository<MenuItem>> {
        &state.menu_items
    }
}

pub fn router() -> Router<ServerState> {
    Router::new().nest("/menuitems", resource::routes::<MenuItems>())
}
