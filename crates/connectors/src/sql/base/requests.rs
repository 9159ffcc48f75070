use model::pagination::cursor::CursorPosition;
use planner::query::offsets::{OffsetStrategy, SeekOffset};
use std::sync::Arc;

/// Columns of the records table, in insert order. Every select reads all of
/// them because rows decode into a full `Record`.
pub const RECORD_COLUMNS: [&str; 5] = [
    "resource_id",
    "resource_type",
    "context",
    "created_at",
    "updated_at",
];

#[derive(Debug, Clone)]
pub struct FetchRowsRequest {
    pub table: String,
    pub limit: usize,
    pub cursor: Option<CursorPosition>,
    pub strategy: Arc<dyn OffsetStrategy>,
}

pub struct FetchRowsRequestBuilder {
    table: String,
    limit: usize,
    cursor: Option<CursorPosition>,
    strategy: Arc<dyn OffsetStrategy>,
}

impl FetchRowsRequestBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        FetchRowsRequestBuilder {
            table: table.into(),
            limit: 0,
            cursor: None,
            strategy: Arc::new(SeekOffset::default()),
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn cursor(mut self, cursor: Option<CursorPosition>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn strategy(mut self, strategy: Arc<dyn OffsetStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn build(self) -> FetchRowsRequest {
        FetchRowsRequest {
            table: self.table,
            limit: self.limit,
            cursor: self.cursor,
            strategy: self.strategy,
        }
    }
}
