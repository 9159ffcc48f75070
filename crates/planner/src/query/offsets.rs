use crate::query::{
    ast::{
        common::OrderDir,
        expr::{BinaryOperator, Expr},
    },
    builder::select::{FromState, SelectBuilder},
    ident, value,
};
use model::{core::value::Value, pagination::cursor::CursorPosition, records::record::Record};

pub const TIMESTAMP_COLUMN: &str = "created_at";
pub const SECONDARY_COLUMN: &str = "resource_type";
pub const TIEBREAKER_COLUMN: &str = "resource_id";

pub trait OffsetStrategy: Send + Sync + std::fmt::Debug {
    /// Applies the pagination logic (WHERE, ORDER BY and LIMIT) to a SelectBuilder.
    fn apply_to_builder(
        &self,
        builder: SelectBuilder<FromState>,
        cursor: Option<&CursorPosition>,
        limit: usize,
    ) -> SelectBuilder<FromState>;

    /// Generates the next cursor based on the last row kept on a page.
    fn next_cursor(&self, row: &Record) -> CursorPosition;

    /// The ordering columns, most significant first.
    fn order_columns(&self) -> [&'static str; 3];
}

/// Keyset ("seek") pagination over `(created_at, resource_type, resource_id)`,
/// newest first.
///
/// `created_at` may repeat; `(resource_type, resource_id)` is the primary key,
/// so the order is total. The columns are the ones `Record::position` reads,
/// which keeps the predicate and `next_cursor` in step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeekOffset;

impl SeekOffset {
    /// Rows strictly before `cursor` in descending tuple order:
    ///
    /// `(ts < ?) OR (ts = ? AND sec < ?) OR (ts = ? AND sec = ? AND tie < ?)`
    pub fn seek_predicate(&self, cursor: &CursorPosition) -> Expr {
        let ts = || value(Value::Timestamp(cursor.created_at));
        let secondary = || value(Value::String(cursor.resource_type.clone()));
        let tiebreaker = value(Value::String(cursor.resource_id.clone()));

        // (ts < ?)
        let older = Expr::binary(ident(TIMESTAMP_COLUMN), BinaryOperator::Lt, ts());

        // (ts = ? AND sec < ?)
        let same_ts = Expr::binary(ident(TIMESTAMP_COLUMN), BinaryOperator::Eq, ts()).and(
            Expr::binary(ident(SECONDARY_COLUMN), BinaryOperator::Lt, secondary()),
        );

        // (ts = ? AND sec = ? AND tie < ?)
        let same_ts_and_secondary = Expr::binary(ident(TIMESTAMP_COLUMN), BinaryOperator::Eq, ts())
            .and(Expr::binary(
                ident(SECONDARY_COLUMN),
                BinaryOperator::Eq,
                secondary(),
            ))
            .and(Expr::binary(
                ident(TIEBREAKER_COLUMN),
                BinaryOperator::Lt,
                tiebreaker,
            ));

        older.or(same_ts).or(same_ts_and_secondary)
    }
}

impl OffsetStrategy for SeekOffset {
    fn apply_to_builder(
        &self,
        mut builder: SelectBuilder<FromState>,
        cursor: Option<&CursorPosition>,
        limit: usize,
    ) -> SelectBuilder<FromState> {
        // No cursor means the first page: no lower bound at all.
        if let Some(cursor) = cursor {
            builder = builder.where_clause(self.seek_predicate(cursor));
        }

        for column in self.order_columns() {
            builder = builder.order_by(ident(column), Some(OrderDir::Desc));
        }

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        builder.limit(value(Value::Int(limit)))
    }

    fn next_cursor(&self, row: &Record) -> CursorPosition {
        row.position()
    }

    fn order_columns(&self) -> [&'static str; 3] {
        [TIMESTAMP_COLUMN, SECONDARY_COLUMN, TIEBREAKER_COLUMN]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        query::{
            dialect::{MySql, Postgres},
            renderer::{Render, Renderer},
        },
        table_ref,
    };
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn cursor() -> CursorPosition {
        CursorPosition::new(
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            "user",
            "42",
        )
    }

    fn builder() -> SelectBuilder<FromState> {
        SelectBuilder::new()
            .select(vec![ident("resource_id")])
            .from(table_ref!("resource_context"), None)
    }

    #[test]
    fn test_first_page_has_no_where_clause() {
        let ast = builder()
            .paginate(Arc::new(SeekOffset::default()), None, 6)
            .build();

        let mut renderer = Renderer::new(&MySql);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            sql,
            "SELECT `resource_id` FROM `resource_context` ORDER BY `created_at` DESC, `resource_type` DESC, `resource_id` DESC LIMIT ?"
        );
        assert_eq!(params, vec![Value::Int(6)]);
    }

    #[test]
    fn test_seek_predicate_mysql() {
        let pos = cursor();
        let ast = builder()
            .paginate(Arc::new(SeekOffset::default()), Some(&pos), 6)
            .build();

        let mut renderer = Renderer::new(&MySql);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            sql,
            concat!(
                "SELECT `resource_id` FROM `resource_context` WHERE ",
                "(((`created_at` < ?) OR ((`created_at` = ?) AND (`resource_type` < ?))) OR ",
                "(((`created_at` = ?) AND (`resource_type` = ?)) AND (`resource_id` < ?))) ",
                "ORDER BY `created_at` DESC, `resource_type` DESC, `resource_id` DESC LIMIT ?"
            )
        );

        let ts = Value::Timestamp(pos.created_at);
        let user = Value::String("user".into());
        assert_eq!(
            params,
            vec![
                ts.clone(),
                ts.clone(),
                user.clone(),
                ts,
                user,
                Value::String("42".into()),
                Value::Int(6),
            ]
        );
    }

    #[test]
    fn test_seek_predicate_postgres_placeholders() {
        let pos = cursor();
        let ast = builder()
            .paginate(Arc::new(SeekOffset::default()), Some(&pos), 3)
            .build();

        let mut renderer = Renderer::new(&Postgres);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert!(sql.contains(r#"WHERE ((("created_at" < $1) OR (("created_at" = $2) AND ("resource_type" < $3)))"#));
        assert!(sql.ends_with(r#"LIMIT $7"#));
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn test_seek_predicate_is_anded_with_existing_filter() {
        let pos = cursor();
        let ast = builder()
            .where_clause(Expr::Literal("1 = 1".into()))
            .paginate(Arc::new(SeekOffset::default()), Some(&pos), 2)
            .build();

        match ast.where_clause {
            Some(Expr::BinaryOp(op)) => {
                assert_eq!(op.op, BinaryOperator::And);
                assert_eq!(op.left, Expr::Literal("1 = 1".into()));
            }
            other => panic!("unexpected where clause: {other:?}"),
        }
    }

    #[test]
    fn test_next_cursor_is_row_position() {
        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let row = Record::new("7", "order", None, ts);
        assert_eq!(SeekOffset::default().next_cursor(&row), row.position());
    }

    #[test]
    fn test_cursor_values_come_from_ordering_columns() {
        // The values bound against each column must be read from that column.
        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let row = Record::new("42", "user", None, ts);
        let next = SeekOffset.next_cursor(&row);

        let ast = builder()
            .paginate(Arc::new(SeekOffset), Some(&next), 1)
            .build();
        let mut renderer = Renderer::new(&MySql);
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            SeekOffset.order_columns(),
            ["created_at", "resource_type", "resource_id"]
        );
        assert!(sql.contains("(`created_at` < ?)"));
        assert!(sql.contains("(`resource_type` < ?)"));
        assert!(sql.contains("(`resource_id` < ?)"));
        assert_eq!(params[0], Value::Timestamp(row.created_at));
        assert_eq!(params[2], Value::String(row.resource_type.clone()));
        assert_eq!(params[5], Value::String(row.resource_id.clone()));
    }
}
