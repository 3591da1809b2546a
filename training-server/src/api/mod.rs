//! API 路由模块
//!
//! # 结构
//!
//! - [`resource`] - 通用 CRUD 处理器
//! - [`extract`] - 请求体提取
//! - [`health`] - 健康检查
//! - [`tables`] - 桌台管理接口
//! - [`menu_items`] - 菜品管理接口
//! - [`orders`] - 订单管理接口

pub mod extract;
pub mod resource;

pub mod health;
pub mod menu_items;
pub mod orders;
pub mod tables;

pub use extract::JsonBody;
pub use resource::Resource;
