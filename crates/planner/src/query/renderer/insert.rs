use crate::query::{
    ast::insert::Insert,
    renderer::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("INSERT INTO ");
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");
        let quoted_columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| r.dialect.quote_identifier(c))
            .collect();
        r.sql.push_str(&quoted_columns.join(", "));
        r.sql.push_str(") VALUES ");

        for (i, row) in self.values.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql.push('(');
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    r.sql.push_str(", ");
                }
                val.render(r);
            }
            r.sql.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        query::{
            builder::insert::InsertBuilder,
            dialect::{MySql, Postgres},
            renderer::{Render, Renderer},
            value,
        },
        table_ref,
    };
    use model::core::value::Value;

    fn record_insert() -> crate::query::ast::insert::Insert {
        InsertBuilder::new(table_ref!("resource_context"))
            .columns(&["resource_id", "resource_type", "context"])
            .values(vec![
                value(Value::String("42".into())),
                value(Value::String("user".into())),
                value(Value::Null),
            ])
            .build()
    }

    #[test]
    fn test_render_insert_mysql() {
        let mut renderer = Renderer::new(&MySql);
        record_insert().render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(
            sql,
            "INSERT INTO `resource_context` (`resource_id`, `resource_type`, `context`) VALUES (?, ?, ?)"
        );
        assert_eq!(
            params,
            vec![
                Value::String("42".into()),
                Value::String("user".into()),
                Value::Null
            ]
        );
    }

    #[test]
    fn test_render_insert_postgres() {
        let mut renderer = Renderer::new(&Postgres);
        record_insert().render(&mut renderer);
        let (sql, _) = renderer.finish();

        assert_eq!(
            sql,
            r#"INSERT INTO "resource_context" ("resource_id", "resource_type", "context") VALUES ($1, $2, $3)"#
        );
    }
}
