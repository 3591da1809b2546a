//! Restaurant API Training Server
//!
//! A small REST service for practicing HTTP requests: CRUD over dining
//! tables, menu items and orders, stored in SQLite.
//!
//! # 模块结构
//!
//! ```text
//! training-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # 通用资源处理器和各实体路由
//! ├── db/            # SQLite 连接、仓库、示例数据
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由组装
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env 不存在时忽略
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
        config.log_retention_days,
    )?;

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  ____           _                              _
 |  _ \ ___  ___| |_ __ _ _   _ _ __ __ _ _ __ | |_
 | |_) / _ \/ __| __/ _` | | | | '__/ _` | '_ \| __|
 |  _ <  __/\__ \ || (_| | |_| | | | (_| | | | | |_
 |_| \_\___||___/\__\__,_|\__,_|_|  \__,_|_| |_|\__|
        API Training Server
    "#
    );
}

/// Endpoint table printed at startup
pub fn print_endpoints(config: &Config) {
    let base = format!("http://localhost:{}", config.http_port);
    println!("📋 Available endpoints:");
    for resource in ["tables", "menuitems", "orders"] {
        println!("   GET    {base}/{resource}");
        println!("   GET    {base}/{resource}/:id");
        println!("   POST   {base}/{resource}");
        println!("   PUT    {base}/{resource}/:id");
        println!("   DELETE {base}/{resource}/:id");
    }
    println!("   GET    {base}/health");
    println!("💾 Database: {}", config.database_path);
}
