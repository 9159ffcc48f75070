use crate::query::{
    ast::expr::{Expr, Ident},
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(value) => r.add_param(value.clone()),
            // Every binary operation is parenthesised so nesting never
            // depends on operator precedence.
            Expr::BinaryOp(op) => {
                r.sql.push('(');
                op.left.render(r);
                r.sql.push(' ');
                r.sql.push_str(op.op.as_sql());
                r.sql.push(' ');
                op.right.render(r);
                r.sql.push(')');
            }
            Expr::Literal(raw) => r.sql.push_str(raw),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::expr::{BinaryOperator, Expr, Ident},
        dialect::{MySql, Postgres},
        ident,
        renderer::{Render, Renderer},
        value,
    };
    use model::core::value::Value;

    #[test]
    fn test_render_nested_binary_ops() {
        let expr = Expr::binary(ident("a"), BinaryOperator::Lt, value(Value::Int(1)))
            .or(Expr::binary(ident("b"), BinaryOperator::Eq, value(Value::Int(2))));

        let mut renderer = Renderer::new(&Postgres);
        expr.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, r#"(("a" < $1) OR ("b" = $2))"#);
        assert_eq!(params, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_render_qualified_ident() {
        let expr = Expr::Identifier(Ident {
            qualifier: Some("r".into()),
            name: "resource_id".into(),
        });

        let mut renderer = Renderer::new(&MySql);
        expr.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert_eq!(sql, "`r`.`resource_id`");
        assert!(params.is_empty());
    }
}
