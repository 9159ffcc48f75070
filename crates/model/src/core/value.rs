use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single bound query parameter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    String(String),
    Timestamp(DateTime<Utc>),
    Null,
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map(Value::String).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_string_maps_to_null() {
        assert_eq!(Value::from(None), Value::Null);
        assert_eq!(
            Value::from(Some("ctx".to_string())),
            Value::String("ctx".into())
        );
    }
}
