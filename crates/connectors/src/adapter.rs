use crate::{
    memory::MemoryStore,
    sql::{
        base::{
            error::ConnectorError,
            store::{DatabaseKind, RecordStore},
        },
        mysql::adapter::MySqlAdapter,
        postgres::adapter::PgAdapter,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub enum Adapter {
    MySql(MySqlAdapter),
    Postgres(PgAdapter),
    Memory(MemoryStore),
}

impl Adapter {
    /// Connects to the store named by the URL scheme:
    /// `mysql://`, `postgres://` / `postgresql://` or `memory://`.
    pub async fn connect(url: &str) -> Result<Self, ConnectorError> {
        match kind_from_url(url)? {
            DatabaseKind::MySql => Ok(Adapter::MySql(MySqlAdapter::connect(url).await?)),
            DatabaseKind::Postgres => Ok(Adapter::Postgres(PgAdapter::connect(url).await?)),
            DatabaseKind::Memory => Ok(Adapter::Memory(MemoryStore::new())),
        }
    }

    pub fn into_store(self) -> Arc<dyn RecordStore> {
        match self {
            Adapter::MySql(adapter) => Arc::new(adapter),
            Adapter::Postgres(adapter) => Arc::new(adapter),
            Adapter::Memory(store) => Arc::new(store),
        }
    }
}

pub fn kind_from_url(url: &str) -> Result<DatabaseKind, ConnectorError> {
    let (scheme, _) = url
        .split_once("://")
        .ok_or_else(|| ConnectorError::InvalidUrl(format!("missing scheme in '{url}'")))?;

    match scheme.to_lowercase().as_str() {
        "mysql" => Ok(DatabaseKind::MySql),
        "postgres" | "postgresql" => Ok(DatabaseKind::Postgres),
        "memory" => Ok(DatabaseKind::Memory),
        other => Err(ConnectorError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_url() {
        assert_eq!(
            kind_from_url("mysql://u:p@localhost:3306/db").unwrap(),
            DatabaseKind::MySql
        );
        assert_eq!(
            kind_from_url("postgresql://localhost/db").unwrap(),
            DatabaseKind::Postgres
        );
        assert_eq!(kind_from_url("memory://").unwrap(), DatabaseKind::Memory);
        assert!(matches!(
            kind_from_url("sqlite://file.db"),
            Err(ConnectorError::UnsupportedScheme(s)) if s == "sqlite"
        ));
        assert!(matches!(
            kind_from_url("localhost:3306"),
            Err(ConnectorError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_connect_memory() {
        let store = Adapter::connect("memory://").await.unwrap().into_store();
        assert_eq!(store.kind(), DatabaseKind::Memory);
    }
}
