use crate::query::ast::common::TableRef;

/// `DROP TABLE [IF EXISTS] <table>`, used before recreating the records table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    pub table: TableRef,
    pub if_exists: bool,
}
