//! Order API 模块
//!
//! `/orders` - 订单管理. `tableId` and `menuItemId` are stored as given,
//! without checking that the referenced rows exist.

use std::sync::Arc;

use axum::Router;
use shared::JsonRecord;
use shared::models::{Order, OrderCreate};
use shared::validation::validate_order;

use super::resource::{self, Resource};
use crate::core::ServerState;
use crate::db::repository::Repository;

/// 订单资源
pub struct Orders;

impl Resource for Orders {
    type Entity = Order;

    const NAME: &'static str = "Order";

    fn validate(record: &JsonRecord) -> Vec<String> {
        validate_order(record)
    }

    fn normalize(record: &JsonRecord) -> Result<OrderCreate, serde_json::Error> {
        OrderCreate::from_record(record)
    }

    fn repository(state: &ServerState) -> &Arc<dyn Repository<Order>> {
        &state.orders
    }
}

pub fn router() -> Router<ServerState> {
    Router::new().nest("/orders", resource::routes::<Orders>())
}
