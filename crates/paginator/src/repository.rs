use crate::{
    error::{PaginationError, RepositoryError},
    paginator::Paginator,
};
use chrono::{SubsecRound, Utc};
use connectors::sql::base::{
    query::generator::KEY_COLUMN_LENGTH,
    requests::FetchRowsRequestBuilder,
    store::RecordStore,
};
use model::{pagination::page::Page, records::record::Record};
use planner::query::offsets::SeekOffset;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_TABLE: &str = "resource_context";

pub struct RecordRepository {
    store: Arc<dyn RecordStore>,
    table: String,
    paginator: Paginator,
}

impl RecordRepository {
    pub fn new(store: Arc<dyn RecordStore>, table: impl Into<String>) -> Self {
        let table = table.into();
        let paginator = Paginator::new(store.clone(), table.clone(), Arc::new(SeekOffset));
        RecordRepository {
            store,
            table,
            paginator,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Drops and recreates the records table. Existing rows are lost.
    pub async fn create_table(&self) -> Result<(), RepositoryError> {
        self.store.recreate_table(&self.table).await?;
        Ok(())
    }

    /// Inserts a record stamped with the current time.
    ///
    /// Timestamps are truncated to whole seconds, the precision that a
    /// continuation token carries.
    pub async fn insert(
        &self,
        resource_id: &str,
        resource_type: &str,
        context: Option<&str>,
    ) -> Result<Record, RepositoryError> {
        validate_key("resource_id", resource_id)?;
        validate_key("resource_type", resource_type)?;

        let now = Utc::now().trunc_subsecs(0);
        let record = Record::new(
            resource_id,
            resource_type,
            context.map(str::to_string),
            now,
        );

        self.store.insert(&self.table, &record).await?;
        debug!("Inserted record {}/{}", resource_type, resource_id);
        Ok(record)
    }

    /// Every record, newest first.
    pub async fn get_all(&self) -> Result<Vec<Record>, RepositoryError> {
        let records = self.store.fetch_all(&self.table).await?;
        info!("Fetched {} records from '{}'", records.len(), self.table);
        Ok(records)
    }

    pub async fn is_empty(&self) -> Result<bool, RepositoryError> {
        let request = FetchRowsRequestBuilder::new(self.table.clone())
            .limit(1)
            .build();
        Ok(self.store.fetch_rows(request).await?.is_empty())
    }

    pub async fn get_paginated(&self, token: &str, page_size: i64) -> Result<Page, PaginationError> {
        self.paginator.get_page(token, page_size).await
    }
}

fn validate_key(field: &str, value: &str) -> Result<(), RepositoryError> {
    if value.is_empty() {
        return Err(RepositoryError::InvalidRecord(format!("{field} is required")));
    }
    if value.chars().count() > KEY_COLUMN_LENGTH {
        return Err(RepositoryError::InvalidRecord(format!(
            "{field} exceeds {KEY_COLUMN_LENGTH} characters"
        )));
    }
    Ok(())
}
