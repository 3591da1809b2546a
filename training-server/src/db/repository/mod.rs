//! Repository Module
//!
//! Row-level CRUD over the three entity tables. Every operation is exactly
//! one SQL statement; there are no transactions and no locking beyond what
//! SQLite does for a single statement.

pub mod dining_table;
pub mod menu_item;
pub mod order;

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Raw message reported by the store
    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) => RepoError::Database(db.message().to_string()),
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Bindable SQLite statement
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// How an entity maps onto its table
///
/// `COLUMNS` lists every column except `id`, in the order `bind_payload`
/// binds them.
pub trait Record:
    Serialize + Clone + Send + Sync + Unpin + for<'r> FromRow<'r, SqliteRow> + 'static
{
    /// Normalized write payload (the entity without its id)
    type Payload: Clone + Send + Sync + 'static;

    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn bind_payload<'q>(query: SqliteQuery<'q>, data: &Self::Payload) -> SqliteQuery<'q>;

    fn from_payload(id: i64, data: Self::Payload) -> Self;
}

/// Common repository trait for basic CRUD
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Every row, in store order
    async fn find_all(&self) -> RepoResult<Vec<T>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<T>>;

    /// Insert and return the generated id
    async fn create(&self, data: &T::Payload) -> RepoResult<i64>;

    /// Overwrite every column; returns the affected-row count
    async fn update(&self, id: i64, data: &T::Payload) -> RepoResult<u64>;

    /// Hard delete; returns the affected-row count
    async fn delete(&self, id: i64) -> RepoResult<u64>;
}

/// SQL text for one entity, built once
#[derive(Debug, Clone)]
struct Statements {
    select_all: String,
    select_one: String,
    insert: String,
    update: String,
    delete: String,
}

impl Statements {
    fn for_record<T: Record>() -> Self {
        let table = T::TABLE;
        let columns = T::COLUMNS.join(", ");
        let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
        let assignments = T::COLUMNS
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            select_all: format!("SELECT id, {columns} FROM {table}"),
            select_one: format!("SELECT id, {columns} FROM {table} WHERE id = ?"),
            insert: format!("INSERT INTO {table} ({columns}) VALUES ({placeholders})"),
            update: format!("UPDATE {table} SET {assignments} WHERE id = ?"),
            delete: format!("DELETE FROM {table} WHERE id = ?"),
        }
    }
}

/// SQLite-backed repository for any [`Record`]
pub struct SqliteRepository<T> {
    pool: SqlitePool,
    sql: Statements,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> SqliteRepository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            sql: Statements::for_record::<T>(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> Repository<T> for SqliteRepository<T> {
    async fn find_all(&self) -> RepoResult<Vec<T>> {
        let rows = sqlx::query_as::<_, T>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<T>> {
        let row = sqlx::query_as::<_, T>(&self.sql.select_one)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, data: &T::Payload) -> RepoResult<i64> {
        let result = T::bind_payload(sqlx::query(&self.sql.insert), data)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, data: &T::Payload) -> RepoResult<u64> {
        let result = T::bind_payload(sqlx::query(&self.sql.update), data)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> RepoResult<u64> {
        let result = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
