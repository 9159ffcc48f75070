use crate::query::{
    ast::{common::OrderDir, select::Select},
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");
        if self.columns.is_empty() {
            r.sql.push('*');
        } else {
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                column.render(r);
            }
        }

        if let Some(from) = &self.from {
            r.sql.push_str(" FROM ");
            r.render_table_ref(&from.table);
            if let Some(alias) = &from.alias {
                r.sql.push_str(" AS ");
                r.sql.push_str(&r.dialect.quote_identifier(alias));
            }
        }

        if let Some(condition) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            condition.render(r);
        }

        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.expr.render(r);
                match order.direction {
                    Some(OrderDir::Asc) => r.sql.push_str(" ASC"),
                    Some(OrderDir::Desc) => r.sql.push_str(" DESC"),
                    None => {}
                }
            }
        }

        if let Some(limit) = &self.limit {
            r.sql.push_str(" LIMIT ");
            limit.render(r);
        }
    }
}
