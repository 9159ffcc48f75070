use crate::error::CliError;
use async_trait::async_trait;
use connectors::{
    adapter::{Adapter, kind_from_url},
    sql::{
        base::store::{DatabaseKind, RecordStore},
        postgres::utils::connect_client,
    },
};
use mysql_async::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

/// Trait for "pinging" a data source
#[async_trait]
pub trait ConnectionPinger {
    /// Attempts to ping; returns Err if unreachable
    async fn ping(&self) -> Result<(), CliError>;
}

/// MySQL/MariaDB pinger
pub struct MySqlConnectionPinger {
    pub conn_str: String,
    /// Connection string with the password masked.
    pub display: String,
}

/// Postgres pinger
pub struct PostgresConnectionPinger {
    pub conn_str: String,
    pub display: String,
}

/// In-process store; always reachable.
pub struct MemoryPinger;

pub fn pinger_for(url: &str, display: &str) -> Result<Box<dyn ConnectionPinger>, CliError> {
    let conn_str = url.to_string();
    let display = display.to_string();
    Ok(match kind_from_url(url)? {
        DatabaseKind::MySql => Box::new(MySqlConnectionPinger { conn_str, display }),
        DatabaseKind::Postgres => Box::new(PostgresConnectionPinger { conn_str, display }),
        DatabaseKind::Memory => Box::new(MemoryPinger),
    })
}

/// Opens the record store named by `url`.
pub async fn open_store(url: &str, display_url: &str) -> Result<Arc<dyn RecordStore>, CliError> {
    let adapter = Adapter::connect(url).await.map_err(|e| {
        error!("Connection to '{}' failed: {}", display_url, e);
        CliError::Connector(e)
    })?;
    let store = adapter.into_store();
    info!("Using {} store at '{}'", store.kind(), display_url);
    Ok(store)
}

fn check_ping_result(backend: &str, display_url: &str, val: i32) -> Result<(), CliError> {
    if val != 1 {
        let msg = format!("{backend} ping to '{display_url}' returned unexpected result: {val}");
        error!("{}", msg);
        return Err(CliError::Unexpected(msg));
    }
    info!("{} ping to '{}' succeeded", backend, display_url);
    Ok(())
}

#[async_trait]
impl ConnectionPinger for MySqlConnectionPinger {
    async fn ping(&self) -> Result<(), CliError> {
        info!("Pinging MySQL at '{}'", &self.display);

        let opts = mysql_async::Opts::from_url(&self.conn_str).map_err(|e| {
            error!("MySQL connection string parse failed: {}", e);
            CliError::MySql(mysql_async::Error::Url(e))
        })?;
        let pool = mysql_async::Pool::new(opts);
        let mut conn = pool.get_conn().await.map_err(|e| {
            error!("MySQL connection to '{}' failed: {}", &self.display, e);
            CliError::MySql(e)
        })?;

        let val: i32 = conn
            .query_first("SELECT 1")
            .await
            .map_err(|e| {
                error!("MySQL ping query on '{}' failed: {}", &self.display, e);
                CliError::MySql(e)
            })?
            .ok_or_else(|| {
                let msg = format!("MySQL ping to '{}' returned no result", &self.display);
                error!("{}", msg);
                CliError::Unexpected(msg)
            })?;

        drop(conn);
        pool.disconnect().await.ok();
        check_ping_result("MySQL", &self.display, val)
    }
}

#[async_trait]
impl ConnectionPinger for PostgresConnectionPinger {
    async fn ping(&self) -> Result<(), CliError> {
        info!("Pinging Postgres at '{}'", &self.display);

        let client = connect_client(&self.conn_str).await.map_err(|e| {
            error!("Postgres connection to '{}' failed: {}", &self.display, e);
            CliError::Connector(e)
        })?;

        let row = client.query_one("SELECT 1", &[]).await.map_err(|e| {
            error!("Postgres ping query on '{}' failed: {}", &self.display, e);
            CliError::Postgres(e)
        })?;

        let val: i32 = row.try_get(0)?;
        check_ping_result("Postgres", &self.display, val)
    }
}

#[async_trait]
impl ConnectionPinger for MemoryPinger {
    async fn ping(&self) -> Result<(), CliError> {
        info!("Memory store needs no connection");
        Ok(())
    }
}
