//! Data models
//!
//! Shared between training-server and its tests.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), assigned by the store.
//! JSON field names are camelCase, column names are snake_case.

pub mod dining_table;
pub mod enums;
pub mod menu_item;
pub mod numeric;
pub mod order;

// Re-exports
pub use dining_table::*;
pub use enums::*;
pub use menu_item::*;
pub use numeric::whole_number;
pub use order::*;
