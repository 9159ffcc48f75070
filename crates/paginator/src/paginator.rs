use crate::error::PaginationError;
use connectors::sql::base::{requests::FetchRowsRequestBuilder, store::RecordStore};
use model::{
    pagination::{page::Page, token},
    records::record::Record,
};
use planner::query::offsets::OffsetStrategy;
use std::sync::Arc;
use tracing::debug;

/// Page size used when the caller asks for zero or a negative number of rows.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Serves forward pages of a table in descending seek order.
///
/// Holds no per-request state; one instance can be shared behind an `Arc`
/// and called concurrently.
#[derive(Clone)]
pub struct Paginator {
    store: Arc<dyn RecordStore>,
    table: String,
    strategy: Arc<dyn OffsetStrategy>,
}

impl Paginator {
    pub fn new(
        store: Arc<dyn RecordStore>,
        table: impl Into<String>,
        strategy: Arc<dyn OffsetStrategy>,
    ) -> Self {
        Paginator {
            store,
            table: table.into(),
            strategy,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn effective_page_size(&self, page_size: i64) -> usize {
        if page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            usize::try_from(page_size).unwrap_or(usize::MAX)
        }
    }

    /// Returns the page that follows `token`, or the first page when the
    /// token is empty.
    pub async fn get_page(&self, token: &str, page_size: i64) -> Result<Page, PaginationError> {
        let page_size = self.effective_page_size(page_size);
        let cursor = if token.is_empty() {
            None
        } else {
            Some(token::decode(token)?)
        };

        // One extra row tells us whether another page exists.
        let request = FetchRowsRequestBuilder::new(self.table.clone())
            .limit(page_size.saturating_add(1))
            .cursor(cursor)
            .strategy(self.strategy.clone())
            .build();

        let rows = self.store.fetch_rows(request).await?;
        debug!(
            "Fetched {} rows from '{}' for a page of {}",
            rows.len(),
            self.table,
            page_size
        );

        Ok(finish_page(rows, page_size, self.strategy.as_ref()))
    }
}

/// Turns an over-fetched result into a page.
///
/// `rows` holds up to `page_size + 1` rows in page order. The extra row only
/// signals that more data exists; the token points at the last row kept.
pub fn finish_page(mut rows: Vec<Record>, page_size: usize, strategy: &dyn OffsetStrategy) -> Page {
    if rows.len() <= page_size {
        return Page {
            records: rows,
            next_continuation_token: None,
        };
    }

    rows.truncate(page_size);
    let next_continuation_token = rows
        .last()
        .map(|row| token::encode(&strategy.next_cursor(row)));

    Page {
        records: rows,
        next_continuation_token,
    }
}
