use thiserror::Error;

use crate::db::repository::RepoError;

/// 进程级错误 (启动、监听、数据库初始化)
///
/// Request-level failures use [`crate::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(#[from] RepoError),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
