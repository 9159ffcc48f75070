use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Column types needed by the records table DDL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    VarChar,
    String,
    Timestamp,
}

impl DataType {
    pub fn mysql_name(&self) -> Cow<'_, str> {
        match self {
            DataType::VarChar => Cow::Borrowed("VARCHAR"),
            DataType::String => Cow::Borrowed("LONGTEXT"),
            DataType::Timestamp => Cow::Borrowed("TIMESTAMP"),
        }
    }

    pub fn postgres_name(&self) -> Cow<'_, str> {
        match self {
            DataType::VarChar => Cow::Borrowed("VARCHAR"),
            DataType::String => Cow::Borrowed("TEXT"),
            // Postgres keeps microseconds unless told otherwise; the records
            // table stores whole seconds like a MySQL TIMESTAMP.
            DataType::Timestamp => Cow::Borrowed("TIMESTAMPTZ(0)"),
        }
    }

    /// Whether a `max_length` is rendered as `TYPE(n)`. Same in both dialects.
    pub fn supports_length(&self) -> bool {
        matches!(self, DataType::VarChar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_per_dialect() {
        assert_eq!(DataType::String.mysql_name(), "LONGTEXT");
        assert_eq!(DataType::String.postgres_name(), "TEXT");
        assert_eq!(DataType::Timestamp.mysql_name(), "TIMESTAMP");
        assert!(DataType::VarChar.supports_length());
        assert!(!DataType::Timestamp.supports_length());
    }
}
