use crate::sql::{
    base::{
        error::{ConnectorError, DbError},
        query::generator::QueryGenerator,
        requests::FetchRowsRequest,
        row::DbRow,
        store::{DatabaseKind, RecordStore},
    },
    mysql::params::MySqlParamStore,
};
use async_trait::async_trait;
use model::records::record::Record;
use mysql_async::{Opts, OptsBuilder, Pool, Row, prelude::Queryable};
use planner::query::{dialect, offsets::SeekOffset};
use tracing::{debug, info};

/// Server error code for a duplicate primary key (`ER_DUP_ENTRY`).
const ER_DUP_ENTRY: u16 = 1062;

#[derive(Clone)]
pub struct MySqlAdapter {
    pool: Pool,
    dialect: dialect::MySql,
}

impl MySqlAdapter {
    pub async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let opts = Opts::from_url(url).map_err(|e| ConnectorError::InvalidUrl(e.to_string()))?;

        // TIMESTAMP values are converted using the session time zone.
        let opts = OptsBuilder::from_opts(opts).init(vec!["SET time_zone = '+00:00'"]);
        let pool = Pool::new(opts);

        // Fail fast on bad credentials instead of on the first query.
        let conn = pool.get_conn().await?;
        drop(conn);

        info!("Connected to MySQL");
        Ok(MySqlAdapter {
            pool,
            dialect: dialect::MySql,
        })
    }

    async fn exec(&self, query: &str) -> Result<(), DbError> {
        let mut conn = self.pool.get_conn().await?;
        conn.query_drop(query).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MySqlAdapter {
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

        let bindings = MySqlParamStore::from_values(&params);
        let mut conn = self.pool.get_conn().await?;
        conn.exec_drop(sql, bindings.params())
            .await
            .map_err(|err| match err {
                mysql_async::Error::Server(ref server) if server.code == ER_DUP_ENTRY => {
                    DbError::DuplicateKey(format!(
                        "{}/{}",
                        record.resource_type, record.resource_id
                    ))
                }
                other => DbError::MySql(other),
            })
    }

    async fn fetch_rows(&self, request: FetchRowsRequest) -> Result<Vec<Record>, DbError> {
        let generator = QueryGenerator::new(&self.dialect);
        let (sql, params) = generator.select(&request);

        debug!("Generated SQL: {}", sql);
        debug!("Parameters: {:?}", params);

        let bindings = MySqlParamStore::from_values(&params);
        let mut conn = self.pool.get_conn().await?;
        let rows: Vec<Row> = conn.exec(sql, bindings.params()).await?;

        rows.iter()
            .map(|row| DbRow::MySqlRow(row).to_record())
            .collect()
    }

    async fn fetch_all(&self, table: &str) -> Result<Vec<Record>, DbError> {
        let generator = QueryGenerator::new(&self.dialect);
        let (sql, _) = generator.select_all(table, &SeekOffset::default());
        debug!("Generated SQL: {}", sql);

        let mut conn = self.pool.get_conn().await?;
        let rows: Vec<Row> = conn.query(sql).await?;

        rows.iter()
            .map(|row| DbRow::MySqlRow(row).to_record())
            .collect()
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::MySql
    }
}
