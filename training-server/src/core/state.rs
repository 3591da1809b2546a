use std::sync::Arc;

use shared::models::{DiningTable, MenuItem, Order};

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::{Repository, SqliteRepository};
use crate::db::seed::seed_if_empty;

/// Shared repository handle
pub type Repo<T> = Arc<dyn Repository<T>>;

/// 服务器状态 - 持有配置与三个资源仓库
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | db | Option<DbService> | SQLite 连接池 (测试替身时为 None) |
/// | tables | Repo<DiningTable> | 桌台 |
/// | menu_items | Repo<MenuItem> | 菜品 |
/// | orders | Repo<Order> | 订单 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Arc<Config>,
    /// 数据库服务
    pub db: Option<DbService>,
    pub tables: Repo<DiningTable>,
    pub menu_items: Repo<MenuItem>,
    pub orders: Repo<Order>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打开数据库、执行迁移，并在 `SEED_DATA` 开启时写入示例数据。
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path, config.db_max_connections).await?;
        let state = Self::from_db(config.clone(), db);

        if config.seed_data {
            seed_if_empty(
                state.tables.as_ref(),
                state.menu_items.as_ref(),
                state.orders.as_ref(),
            )
            .await?;
        }

        Ok(state)
    }

    /// SQLite-backed repositories over an open database
    pub fn from_db(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            tables: Arc::new(SqliteRepository::<DiningTable>::new(db.pool.clone())),
            menu_items: Arc::new(SqliteRepository::<MenuItem>::new(db.pool.clone())),
            orders: Arc::new(SqliteRepository::<Order>::new(db.pool.clone())),
            db: Some(db),
        }
    }

    /// Arbitrary repositories, e.g. test doubles
    pub fn with_repositories(
        config: Config,
        tables: Repo<DiningTable>,
        menu_items: Repo<MenuItem>,
        orders: Repo<Order>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            db: None,
            tables,
            menu_items,
            orders,
        }
    }

    /// Close the database pool, if there is one
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
