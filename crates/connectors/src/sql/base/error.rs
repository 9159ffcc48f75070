use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any MySQL driver error.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// Any Postgres driver error.
    #[error("Postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// A row with the same `(resource_type, resource_id)` already exists.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A fetched row could not be turned into a record.
    #[error("Row decode error: {0}")]
    RowDecode(String),

    /// An error occurred while building a SQL query.
    #[error("Query build error: {0}")]
    QueryBuildError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Errors happening during adapter or connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Invalid connection URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported connection scheme: {0}")]
    UnsupportedScheme(String),

    #[error("MySQL connection failed: {0}")]
    MySql(#[from] mysql_async::Error),

    #[error("Postgres connection failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),
}
