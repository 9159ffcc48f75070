use crate::query::ast::{
    common::TableRef,
    create_table::{ColumnDef, CreateTable, TableConstraint},
};
use model::core::data_type::DataType;

#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    ast: CreateTable,
}

/// Configures a single column before handing control back to the table builder.
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    parent: CreateTableBuilder,
    column: ColumnDef,
}

impl CreateTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: CreateTable {
                table,
                ..Default::default()
            },
        }
    }

    pub fn if_not_exists(mut self) -> Self {
        self.ast.if_not_exists = true;
        self
    }

    pub fn column(self, name: &str, data_type: DataType, max_length: Option<usize>) -> ColumnBuilder {
        ColumnBuilder {
            parent: self,
            column: ColumnDef {
                name: name.to_string(),
                data_type,
                is_nullable: false,
                is_primary_key: false,
                max_length,
            },
        }
    }

    pub fn primary_key(mut self, columns: Vec<String>) -> Self {
        self.ast
            .constraints
            .push(TableConstraint::PrimaryKey { columns });
        self
    }

    pub fn build(self) -> CreateTable {
        self.ast
    }
}

impl ColumnBuilder {
    pub fn nullable(mut self) -> Self {
        self.column.is_nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.column.is_primary_key = true;
        self
    }

    pub fn add(mut self) -> CreateTableBuilder {
        self.parent.ast.columns.push(self.column);
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_ref;

    #[test]
    fn test_columns_keep_declaration_order() {
        let ast = CreateTableBuilder::new(table_ref!("resource_context"))
            .column("resource_id", DataType::VarChar, Some(128))
            .add()
            .column("context", DataType::String, None)
            .nullable()
            .add()
            .primary_key(vec!["resource_id".into()])
            .build();

        let names: Vec<_> = ast.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["resource_id", "context"]);
        assert!(!ast.columns[0].is_nullable);
        assert!(ast.columns[1].is_nullable);
        assert_eq!(ast.constraints.len(), 1);
    }
}
