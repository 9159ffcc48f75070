//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::data_type::DataType;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Renders a generic `DataType` into a database-specific SQL type string.
    fn render_data_type(&self, data_type: &DataType, max_length: Option<usize>) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', "\"\""))
    }

    fn get_placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn render_data_type(&self, data_type: &DataType, max_length: Option<usize>) -> String {
        let mut type_name = data_type.postgres_name().into_owned();
        if data_type.supports_length()
            && let Some(max_len) = max_length
        {
            type_name = format!("{type_name}({max_len})");
        }
        type_name
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn render_data_type(&self, data_type: &DataType, max_length: Option<usize>) -> String {
        let mut type_name = data_type.mysql_name().into_owned();
        if data_type.supports_length()
            && let Some(max_len) = max_length
        {
            type_name = format!("{type_name}({max_len})");
        }
        type_name
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoting_escapes_embedded_quotes() {
        assert_eq!(MySql.quote_identifier("we`ird"), "`we``ird`");
        assert_eq!(Postgres.quote_identifier(r#"we"ird"#), r#""we""ird""#);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(MySql.get_placeholder(3), "?");
        assert_eq!(Postgres.get_placeholder(0), "$1");
        assert_eq!(Postgres.get_placeholder(6), "$7");
    }

    #[test]
    fn test_varchar_length() {
        assert_eq!(
            MySql.render_data_type(&DataType::VarChar, Some(128)),
            "VARCHAR(128)"
        );
        assert_eq!(
            Postgres.render_data_type(&DataType::Timestamp, Some(6)),
            "TIMESTAMPTZ(0)"
        );
    }
}
