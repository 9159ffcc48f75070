use crate::sql::{
    base::{
        error::{ConnectorError, DbError},
        query::generator::QueryGenerator,
        requests::FetchRowsRequest,
        row::DbRow,
        store::{DatabaseKind, RecordStore},
    },
    postgres::{params::PgParamStore, utils::connect_client},
};
use async_trait::async_trait;
use model::records::record::Record;
use planner::query::{dialect, offsets::SeekOffset};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_postgres::{Client, error::SqlState};
use tracing::{debug, info};

#[derive(Clone)]
pub struct PgAdapter {
    client: Arc<RwLock<Client>>,
    dialect: dialect::Postgres,
}

impl PgAdapter {
    pub async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let client = Arc::new(RwLock::new(connect_client(url).await?));
        info!("Connected to Postgres");
        Ok(PgAdapter {
            client,
            dialect: dialect::Postgres,
        })
    }

    async fn exec(&self, query: &str) -> Result<(), DbError> {
        let client = self.client.read().await;
        client.batch_execute(query).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgAdapter {
    async fn recreate_table(&self, table: &str) -> Result<(), DbError> {
        let generator = QueryGenerator::new(&self.dialect);
        self.exec(&generator.drop_table(table)).await?;
        self.exec(&generator.create_records_table(table)).await?;
        info!("Recreated table '{}'", table);
        Ok(())
    }

    async fn insert(&self, table: &str, record: &Record) -> Result<(), DbError> {
        let generator = QueryGenerator::new(&self.dialect);
        let (sql, params) = generator.insert_record(table, record);
        debug!("Insert SQL: {}", sql);

        let bindings = PgParamStore::from_values(params);
        let client = self.client.read().await;
        match client.execute(&sql, &bindings.as_refs()).await {
            Ok(_) => Ok(()),
            Err(err) if err.code() == Some(&SqlState::UNIQUE_VIOLATION) => Err(
                DbError::DuplicateKey(format!("{}/{}", record.resource_type, record.resource_id)),
            ),
            Err(err) => Err(err.into()),
        }
    }

    async fn fetch_rows(&self, request: FetchRowsRequest) -> Result<Vec<Record>, DbError> {
        let generator = QueryGenerator::new(&self.dialect);
        let (sql, params) = generator.select(&request);

        debug!("Generated SQL: {}", sql);
        debug!("Parameters: {:?}", params);

        let bindings = PgParamStore::from_values(params);
        let client = self.client.read().await;
        let rows = client.query(&sql, &bindings.as_refs()).await?;

        rows.iter()
            .map(|row| DbRow::PostgresRow(row).to_record())
            .collect()
    }

    async fn fetch_all(&self, table: &str) -> Result<Vec<Record>, DbError> {
        let generator = QueryGenerator::new(&self.dialect);
        let (sql, _) = generator.select_all(table, &SeekOffset::default());
        debug!("Generated SQL: {}", sql);

        let client = self.client.read().await;
        let rows = client.query(&sql, &[]).await?;

        rows.iter()
            .map(|row| DbRow::PostgresRow(row).to_record())
            .collect()
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Postgres
    }
}
