use std::sync::atomic::{AtomicUsize, Ordering};

use crate::lexer::{literals::LiteralValue, tokens::Token};

/// Identity of a variable-referencing expression, used as the key of the
/// resolution table.
pub type ExprId = usize;

static NEXT_EXPR_ID: AtomicUsize = AtomicUsize::new(0);

/// Ids are unique for the whole process so several sources can share one
/// interpreter.
pub fn next_expr_id() -> ExprId {
    NEXT_EXPR_ID.fetch_add(1, Ordering::Relaxed)
}

/// Binary Expression
/// Represents an arithmetic, comparison or equality operation.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Grouping Expression
/// Represents a parenthesized expression.
#[derive(Debug, Clone)]
pub struct GroupingExpr {
    pub expression: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: LiteralValue,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Variable Expression
/// A read of a named binding. `id` keys the resolved scope distance.
#[derive(Debug, Clone)]
pub struct VariableExpr {
    pub id: ExprId,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct AssignExpr {
    pub id: ExprId,
    pub name: Token,
    pub value: Box<Expr>,
}

/// Logical Expression
/// `and`/`or`, evaluated with short-circuiting.
#[derive(Debug, Clone)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Call Expression
/// `paren` is the closing parenthesis, kept for error locations.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Binary(BinaryExpr),
    Grouping(GroupingExpr),
    Literal(LiteralExpr),
    Unary(UnaryExpr),
    Variable(VariableExpr),
    Assign(AssignExpr),
    Logical(LogicalExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn literal(value: LiteralValue) -> Expr {
        Expr::Literal(LiteralExpr { value })
    }
}
