/// Wraps a `Value` as a bound-parameter expression.
#[macro_export]
macro_rules! value {
    ($val:expr) => {
        $crate::query::ast::expr::Expr::Value($val)
    };
}

/// Builds a `TableRef` from a table name, optionally schema-qualified.
#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::query::ast::common::TableRef {
            schema: None,
            name: ::std::string::ToString::to_string(&$name),
        }
    };
    ($schema:expr, $name:expr) => {
        $crate::query::ast::common::TableRef {
            schema: Some(::std::string::ToString::to_string(&$schema)),
            name: ::std::string::ToString::to_string(&$name),
        }
    };
}
