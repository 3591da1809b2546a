//! Shared types for the restaurant training API
//!
//! Entity models, write payloads, validators and the JSON bodies used by the
//! HTTP layer. Nothing in here touches the network or the database; the
//! `db` feature only adds `sqlx::FromRow` derives to the row types.

pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use validation::JsonRecord;
