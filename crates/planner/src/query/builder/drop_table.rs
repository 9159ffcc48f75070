use crate::query::ast::{common::TableRef, drop_table::DropTable};

#[derive(Debug, Clone)]
pub struct DropTableBuilder {
    ast: DropTable,
}

impl DropTableBuilder {
    pub fn new(table: TableRef) -> Self {
        Self {
            ast: DropTable {
                table,
                if_exists: false,
            },
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.ast.if_exists = true;
        self
    }

    pub fn build(self) -> DropTable {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_ref;

    #[test]
    fn test_if_exists_is_opt_in() {
        let plain = DropTableBuilder::new(table_ref!("resource_context")).build();
        assert!(!plain.if_exists);

        let guarded = DropTableBuilder::new(table_ref!("archive", "resource_context"))
            .if_exists()
            .build();
        assert!(guarded.if_exists);
        assert_eq!(guarded.table.schema.as_deref(), Some("archive"));
    }
}
