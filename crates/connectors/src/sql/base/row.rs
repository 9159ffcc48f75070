use crate::sql::base::error::DbError;
use chrono::{DateTime, NaiveDateTime, Utc};
use core::fmt;
use model::records::record::Record;
use mysql_async::Row as MySqlRow;
use std::fmt::Formatter;
use tokio_postgres::Row as PgRow;

pub enum DbRow<'a> {
    MySqlRow(&'a MySqlRow),
    PostgresRow(&'a PgRow),
}

impl DbRow<'_> {
    pub fn to_record(&self) -> Result<Record, DbError> {
        Ok(Record {
            resource_id: self.required_string("resource_id")?,
            resource_type: self.required_string("resource_type")?,
            context: self.try_get_string("context"),
            created_at: self.required_timestamp("created_at")?,
            updated_at: self.required_timestamp("updated_at")?,
        })
    }

    fn required_string(&self, name: &str) -> Result<String, DbError> {
        self.try_get_string(name)
            .ok_or_else(|| DbError::RowDecode(format!("missing or non-text column '{name}'")))
    }

    fn required_timestamp(&self, name: &str) -> Result<DateTime<Utc>, DbError> {
        self.try_get_timestamp(name)
            .ok_or_else(|| DbError::RowDecode(format!("missing or non-timestamp column '{name}'")))
    }

    pub fn try_get_string(&self, name: &str) -> Option<String> {
        match self {
            DbRow::MySqlRow(row) => row
                .get_opt::<Option<String>, _>(name)
                .and_then(|res| res.ok())
                .flatten(),
            DbRow::PostgresRow(row) => row.try_get::<_, Option<String>>(name).ok().flatten(),
        }
    }

    // MySQL sessions are pinned to UTC, so a naive TIMESTAMP is already UTC.
    pub fn try_get_timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        match self {
            DbRow::MySqlRow(row) => row
                .get_opt::<NaiveDateTime, _>(name)
                .and_then(|res| res.ok())
                .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)),
            DbRow::PostgresRow(row) => row.try_get::<_, DateTime<Utc>>(name).ok(),
        }
    }
}

impl fmt::Debug for DbRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DbRow::MySqlRow(row) => write!(f, "{row:?}"),
            DbRow::PostgresRow(row) => write!(f, "{row:?}"),
        }
    }
}
