use crate::sql::base::{error::DbError, requests::FetchRowsRequest};
use async_trait::async_trait;
use model::records::record::Record;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseKind {
    MySql,
    Postgres,
    Memory,
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseKind::MySql => write!(f, "mysql"),
            DatabaseKind::Postgres => write!(f, "postgres"),
            DatabaseKind::Memory => write!(f, "memory"),
        }
    }
}

/// A table of records that can be read one seek-ordered page at a time.
///
/// Implementations must run each `fetch_rows` as a single atomic query and
/// hold no pagination state between calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Drops the table if present and creates it empty.
    async fn recreate_table(&self, table: &str) -> Result<(), DbError>;

    /// Inserts one record. A repeated `(resource_type, resource_id)` is
    /// reported as `DbError::DuplicateKey`.
    async fn insert(&self, table: &str, record: &Record) -> Result<(), DbError>;

    /// Returns at most `request.limit` rows strictly after `request.cursor`,
    /// in descending page order.
    async fn fetch_rows(&self, request: FetchRowsRequest) -> Result<Vec<Record>, DbError>;

    /// Returns every row in descending page order.
    async fn fetch_all(&self, table: &str) -> Result<Vec<Record>, DbError>;

    fn kind(&self) -> DatabaseKind;
}
