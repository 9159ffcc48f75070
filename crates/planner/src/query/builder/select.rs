use crate::query::{
    ast::{
        common::{OrderDir, TableRef},
        expr::Expr,
        select::{FromClause, OrderByExpr, Select},
    },
    offsets::OffsetStrategy,
};
use model::pagination::cursor::CursorPosition;
use std::{marker::PhantomData, sync::Arc};

/// Builder state before any columns are chosen.
#[derive(Debug, Clone)]
pub struct InitialState;

/// Columns are chosen; a FROM clause is still required.
#[derive(Debug, Clone)]
pub struct SelectState;

/// The query has a FROM clause and can be filtered, ordered and limited.
#[derive(Debug, Clone)]
pub struct FromState;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State = InitialState> {
    pub ast: Select,
    _state: PhantomData<State>,
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            _state: PhantomData,
        }
    }

    pub fn select(self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        let mut ast = self.ast;
        ast.columns = columns;
        SelectBuilder {
            ast,
            _state: PhantomData,
        }
    }
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder<SelectState> {
    pub fn from(self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        let mut ast = self.ast;
        ast.from = Some(FromClause {
            table,
            alias: alias.map(|a| a.to_string()),
        });
        SelectBuilder {
            ast,
            _state: PhantomData,
        }
    }
}

impl SelectBuilder<FromState> {
    /// Sets the WHERE clause, ANDing it with any condition already present.
    pub fn where_clause(mut self, condition: Expr) -> Self {
        self.ast.where_clause = Some(match self.ast.where_clause.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    pub fn limit(mut self, limit: Expr) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    /// Hands the query to an offset strategy, which adds the seek condition,
    /// the ordering and the row limit.
    pub fn paginate(
        self,
        strategy: Arc<dyn OffsetStrategy>,
        cursor: Option<&CursorPosition>,
        limit: usize,
    ) -> Self {
        strategy.apply_to_builder(self, cursor, limit)
    }

    pub fn build(self) -> Select {
        self.ast
    }
}
