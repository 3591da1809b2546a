//! Dining Table API 模块
//!
//! `/tables` - 桌台管理

use std::sync::Arc;

use axum::Router;
use shared::JsonRecord;
use shared::models::{DiningTable, DiningTableCreate};
use shared::validation::validate_table;

use super::resource::{self, Resource};
use crate::core::ServerState;
use crate::db::repository::Repository;

/// 桌台资源
pub struct Tables;

impl Resource for Tables {
    type Entity = DiningTable;

    const NAME: &'static str = "Table";

    fn validate(record: &JsonRecord) -> Vec<String> {
        validate_table(record)
    }

    fn normalize(record: &JsonRecord) -> Result<DiningTableCreate, serde_json::Error> {
        DiningTableCreate::from_record(record)
    }

    fn repository(state: &ServerState) -> &Arc<dyn Repository<DiningTable>> {
        &state.tables
    }
}

pub fn router() -> Router<ServerState> {
    Router::new().nest("/tables", resource::routes::<Tables>())
}
