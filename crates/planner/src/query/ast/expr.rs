//! Expression nodes used in WHERE, ORDER BY, LIMIT and VALUES.

use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A (possibly qualified) column reference, e.g. `t.created_at`.
    Identifier(Ident),

    /// A value that is always sent as a bound parameter.
    Value(Value),

    BinaryOp(Box<BinaryOp>),

    /// Raw SQL copied into the output verbatim.
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        }
    }
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    pub fn and(self, other: Expr) -> Expr {
        Expr::binary(self, BinaryOperator::And, other)
    }

    pub fn or(self, other: Expr) -> Expr {
        Expr::binary(self, BinaryOperator::Or, other)
    }
}
