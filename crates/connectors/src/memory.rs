//! In-process record store.
//!
//! Holds every table in a `tokio::sync::RwLock` and answers page requests
//! with the same seek semantics the SQL adapters render, so it can stand in
//! for a database in tests and in `memory://` runs.

use crate::sql::base::{
    error::DbError,
    requests::FetchRowsRequest,
    store::{DatabaseKind, RecordStore},
};
use async_trait::async_trait;
use chrono::SubsecRound;
use model::records::record::Record;
use std::{cmp::Reverse, collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in `table`, or `None` if it was never created.
    pub async fn row_count(&self, table: &str) -> Option<usize> {
        self.tables.read().await.get(table).map(Vec::len)
    }
}

fn missing_table(table: &str) -> DbError {
    DbError::Unknown(format!("table '{table}' does not exist"))
}

fn sort_descending(rows: &mut [Record]) {
    rows.sort_by_key(|row| Reverse(row.position()));
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn recreate_table(&self, table: &str) -> Result<(), DbError> {
        self.tables.write().await.insert(table.to_string(), Vec::new());
        Ok(())
    }

    async fn insert(&self, table: &str, record: &Record) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        let rows = tables.get_mut(table).ok_or_else(|| missing_table(table))?;

        let exists = rows.iter().any(|row| {
            row.resource_type == record.resource_type && row.resource_id == record.resource_id
        });
        if exists {
            return Err(DbError::DuplicateKey(format!(
                "{}/{}",
                record.resource_type, record.resource_id
            )));
        }

        // Same whole-second precision as the SQL columns; tokens carry no more.
        let mut stored = record.clone();
        stored.created_at = stored.created_at.trunc_subsecs(0);
        stored.updated_at = stored.updated_at.trunc_subsecs(0);
        rows.push(stored);
        Ok(())
    }

    async fn fetch_rows(&self, request: FetchRowsRequest) -> Result<Vec<Record>, DbError> {
        let tables = self.tables.read().await;
        let rows = tables
            .get(&request.table)
            .ok_or_else(|| missing_table(&request.table))?;

        let mut page: Vec<Record> = match &request.cursor {
            Some(cursor) => rows
                .iter()
                .filter(|row| row.position() < *cursor)
                .cloned()
                .collect(),
            None => rows.clone(),
        };
        sort_descending(&mut page);
        page.truncate(request.limit);

        debug!(
            "Memory fetch from '{}' returned {} rows",
            request.table,
            page.len()
        );
        Ok(page)
    }

    async fn fetch_all(&self, table: &str) -> Result<Vec<Record>, DbError> {
        let tables = self.tables.read().await;
        let mut rows = tables.get(table).ok_or_else(|| missing_table(table))?.clone();
        sort_descending(&mut rows);
        Ok(rows)
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Memory
    }
}
