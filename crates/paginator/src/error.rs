use connectors::sql::base::error::DbError;
use model::pagination::token::TokenError;
use thiserror::Error;

/// Failures of a single page request.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The caller sent a token that cannot be decoded. Never retried.
    #[error("Invalid continuation token: {0}")]
    InvalidContinuationToken(#[from] TokenError),

    /// The store failed to run the page query.
    #[error("Store query failed: {0}")]
    StoreQueryFailed(#[from] DbError),
}

impl PaginationError {
    /// True when the request itself was at fault rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaginationError::InvalidContinuationToken(_))
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
