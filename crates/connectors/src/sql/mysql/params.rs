use chrono::{Datelike, Timelike};
use model::core::value::Value;
use mysql_async::Value as MySqlValue;
use mysql_common::params::Params;

pub struct MySqlParam(MySqlValue);

impl MySqlParam {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Int(i) => MySqlParam(MySqlValue::Int(*i)),
            Value::String(s) => MySqlParam(MySqlValue::Bytes(s.clone().into_bytes())),
            Value::Timestamp(ts) => {
                let naive = ts.naive_utc();
                MySqlParam(MySqlValue::Date(
                    naive.year() as u16,
                    naive.month() as u8,
                    naive.day() as u8,
                    naive.hour() as u8,
                    naive.minute() as u8,
                    naive.second() as u8,
                    ts.timestamp_subsec_micros(),
                ))
            }
            Value::Null => MySqlParam(MySqlValue::NULL),
        }
    }
}

pub struct MySqlParamStore {
    pub params: Vec<MySqlParam>,
}

impl MySqlParamStore {
    pub fn from_values(values: &[Value]) -> Self {
        let params = values.iter().map(MySqlParam::from_value).collect();
        MySqlParamStore { params }
    }

    pub fn params(&self) -> Params {
        if self.params.is_empty() {
            return Params::Empty;
        }
        let mysql_values: Vec<MySqlValue> = self.params.iter().map(|p| p.0.clone()).collect();
        Params::Positional(mysql_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_timestamp_binds_as_utc_date() {
        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let store = MySqlParamStore::from_values(&[Value::Timestamp(ts)]);

        match store.params() {
            Params::Positional(values) => {
                assert_eq!(values, vec![MySqlValue::Date(2023, 11, 14, 22, 13, 20, 0)]);
            }
            other => panic!("unexpected params: {other:?}"),
        }
    }

    #[test]
    fn test_null_and_empty() {
        assert_eq!(MySqlParamStore::from_values(&[]).params(), Params::Empty);

        let store = MySqlParamStore::from_values(&[Value::Null, Value::String("x".into())]);
        assert_eq!(
            store.params(),
            Params::Positional(vec![MySqlValue::NULL, MySqlValue::Bytes(b"x".to_vec())])
        );
    }
}
