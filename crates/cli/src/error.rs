use connectors::sql::base::error::ConnectorError;
use paginator::error::{PaginationError, RepositoryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to connect: {0}")]
    Connector(#[from] ConnectorError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Repository(RepositoryError),

    /// MySQL driver error.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// PostgreSQL driver error.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

// Pagination failures nested in a repository error surface as themselves so
// the exit code reflects an invalid token.
impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Pagination(inner) => CliError::Pagination(inner),
            other => CliError::Repository(other),
        }
    }
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Pagination(err) if err.is_client_error() => ExitCode::InvalidToken,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidToken = 2,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::sql::base::error::DbError;
    use model::pagination::token::TokenError;

    #[test]
    fn test_exit_codes() {
        let bad_token: CliError =
            PaginationError::InvalidContinuationToken(TokenError::InvalidTokenFormat(2)).into();
        assert_eq!(bad_token.exit_code(), ExitCode::InvalidToken);
        assert_eq!(bad_token.exit_code().as_i32(), 2);

        let store: CliError =
            PaginationError::StoreQueryFailed(DbError::Unknown("down".into())).into();
        assert_eq!(store.exit_code(), ExitCode::GeneralError);

        let nested: CliError = RepositoryError::Pagination(
            PaginationError::InvalidContinuationToken(TokenError::InvalidTokenTimestamp(
                "x".into(),
            )),
        )
        .into();
        assert_eq!(nested.exit_code(), ExitCode::InvalidToken);

        assert_eq!(CliError::Config("x".into()).exit_code().as_i32(), 1);
        assert_eq!(ExitCode::Success.as_i32(), 0);
    }
}
