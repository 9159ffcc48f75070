use crate::query::{
    ast::create_table::{CreateTable, TableConstraint},
    renderer::{Render, Renderer},
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        if self.if_not_exists {
            r.sql.push_str("IF NOT EXISTS ");
        }
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");

        let mut parts = Vec::with_capacity(self.columns.len() + self.constraints.len());
        for col in &self.columns {
            let mut def = format!(
                "{} {}",
                r.dialect.quote_identifier(&col.name),
                r.dialect.render_data_type(&col.data_type, col.max_length)
            );
            if col.is_primary_key {
                def.push_str(" PRIMARY KEY");
            } else if !col.is_nullable {
                def.push_str(" NOT NULL");
            }
            parts.push(def);
        }

        for constraint in &self.constraints {
            match constraint {
                TableConstraint::PrimaryKey { columns } => {
                    let cols: Vec<String> = columns
                        .iter()
                        .map(|c| r.dialect.quote_identifier(c))
                        .collect();
                    parts.push(format!("PRIMARY KEY ({})", cols.join(", ")));
                }
            }
        }

        r.sql.push_str(&parts.join(", "));
        r.sql.push_str(");");
    }
}
