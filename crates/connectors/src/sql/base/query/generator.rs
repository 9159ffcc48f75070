use crate::sql::base::requests::{FetchRowsRequest, RECORD_COLUMNS};
use model::{
    core::{data_type::DataType, value::Value},
    records::record::Record,
};
use planner::query::{
    ast::common::OrderDir,
    builder::{
        create_table::CreateTableBuilder, drop_table::DropTableBuilder, insert::InsertBuilder,
        select::SelectBuilder,
    },
    dialect::Dialect,
    ident,
    offsets::OffsetStrategy,
    renderer::{Render, Renderer},
};
use planner::{table_ref, value};

/// Width of the `resource_id` and `resource_type` key columns.
pub const KEY_COLUMN_LENGTH: usize = 128;

pub struct QueryGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> QueryGenerator<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Generates the SELECT for one page of rows and its parameters.
    pub fn select(&self, request: &FetchRowsRequest) -> (String, Vec<Value>) {
        let columns = RECORD_COLUMNS.iter().map(|c| ident(c)).collect::<Vec<_>>();

        let select_ast = SelectBuilder::new()
            .select(columns)
            .from(table_ref!(&request.table), None)
            .paginate(
                request.strategy.clone(),
                request.cursor.as_ref(),
                request.limit,
            )
            .build();

        self.render_ast(select_ast)
    }

    /// Every row of the table in page order, without a limit.
    pub fn select_all(&self, table: &str, strategy: &dyn OffsetStrategy) -> (String, Vec<Value>) {
        let columns = RECORD_COLUMNS.iter().map(|c| ident(c)).collect::<Vec<_>>();

        let mut select = SelectBuilder::new()
            .select(columns)
            .from(table_ref!(table), None);
        for column in strategy.order_columns() {
            select = select.order_by(ident(column), Some(OrderDir::Desc));
        }

        self.render_ast(select.build())
    }

    pub fn insert_record(&self, table: &str, record: &Record) -> (String, Vec<Value>) {
        let insert_ast = InsertBuilder::new(table_ref!(table))
            .columns(&RECORD_COLUMNS)
            .values(vec![
                value!(Value::String(record.resource_id.clone())),
                value!(Value::String(record.resource_type.clone())),
                value!(Value::from(record.context.clone())),
                value!(Value::Timestamp(record.created_at)),
                value!(Value::Timestamp(record.updated_at)),
            ])
            .build();

        self.render_ast(insert_ast)
    }

    pub fn create_records_table(&self, table: &str) -> String {
        let create_ast = CreateTableBuilder::new(table_ref!(table))
            .column("resource_id", DataType::VarChar, Some(KEY_COLUMN_LENGTH))
            .add()
            .column("resource_type", DataType::VarChar, Some(KEY_COLUMN_LENGTH))
            .add()
            .column("context", DataType::String, None)
            .nullable()
            .add()
            .column("created_at", DataType::Timestamp, None)
            .add()
            .column("updated_at", DataType::Timestamp, None)
            .add()
            .primary_key(vec!["resource_type".to_string(), "resource_id".to_string()])
            .build();

        self.render_ast(create_ast).0
    }

    pub fn drop_table(&self, table: &str) -> String {
        let drop_ast = DropTableBuilder::new(table_ref!(table))
            .if_exists()
            .build();
        self.render_ast(drop_ast).0
    }

    fn render_ast(&self, ast: impl Render) -> (String, Vec<Value>) {
        let mut renderer = Renderer::new(self.dialect);
        ast.render(&mut renderer);
        renderer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::base::requests::FetchRowsRequestBuilder;
    use chrono::{TimeZone, Utc};
    use model::pagination::cursor::CursorPosition;
    use planner::query::{
        dialect::{MySql, Postgres},
        offsets::SeekOffset,
    };

    #[test]
    fn test_create_records_table_mysql() {
        let sql = QueryGenerator::new(&MySql).create_records_table("resource_context");
        assert_eq!(
            sql,
            concat!(
                "CREATE TABLE `resource_context` (",
                "`resource_id` VARCHAR(128) NOT NULL, ",
                "`resource_type` VARCHAR(128) NOT NULL, ",
                "`context` LONGTEXT, ",
                "`created_at` TIMESTAMP NOT NULL, ",
                "`updated_at` TIMESTAMP NOT NULL, ",
                "PRIMARY KEY (`resource_type`, `resource_id`));"
            )
        );
    }

    #[test]
    fn test_create_records_table_postgres() {
        let sql = QueryGenerator::new(&Postgres).create_records_table("resource_context");
        assert!(sql.contains(r#""context" TEXT, "#));
        assert!(sql.contains(r#""created_at" TIMESTAMPTZ(0) NOT NULL"#));
        assert!(sql.ends_with(r#"PRIMARY KEY ("resource_type", "resource_id"));"#));
    }

    #[test]
    fn test_drop_table() {
        let sql = QueryGenerator::new(&MySql).drop_table("resource_context");
        assert_eq!(sql, "DROP TABLE IF EXISTS `resource_context`;");
    }

    #[test]
    fn test_insert_record_binds_every_column() {
        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let record = Record::new("42", "user", None, ts);

        let (sql, params) = QueryGenerator::new(&Postgres).insert_record("resource_context", &record);

        assert_eq!(
            sql,
            r#"INSERT INTO "resource_context" ("resource_id", "resource_type", "context", "created_at", "updated_at") VALUES ($1, $2, $3, $4, $5)"#
        );
        assert_eq!(
            params,
            vec![
                Value::String("42".into()),
                Value::String("user".into()),
                Value::Null,
                Value::Timestamp(ts),
                Value::Timestamp(ts),
            ]
        );
    }

    #[test]
    fn test_select_page_with_cursor() {
        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let request = FetchRowsRequestBuilder::new("resource_context")
            .limit(6)
            .cursor(Some(CursorPosition::new(ts, "user", "42")))
            .build();

        let (sql, params) = QueryGenerator::new(&MySql).select(&request);

        assert!(sql.starts_with(concat!(
            "SELECT `resource_id`, `resource_type`, `context`, `created_at`, `updated_at` ",
            "FROM `resource_context` WHERE "
        )));
        assert!(sql.ends_with(
            "ORDER BY `created_at` DESC, `resource_type` DESC, `resource_id` DESC LIMIT ?"
        ));
        assert_eq!(params.len(), 7);
        assert_eq!(params.last(), Some(&Value::Int(6)));
    }

    #[test]
    fn test_select_all_orders_without_limit() {
        let (sql, params) =
            QueryGenerator::new(&MySql).select_all("resource_context", &SeekOffset::default());

        assert_eq!(
            sql,
            concat!(
                "SELECT `resource_id`, `resource_type`, `context`, `created_at`, `updated_at` ",
                "FROM `resource_context` ",
                "ORDER BY `created_at` DESC, `resource_type` DESC, `resource_id` DESC"
            )
        );
        assert!(params.is_empty());
    }
}
