use std::fmt::{Display, Formatter, Result};

use crate::lexer::literals::LiteralValue;

use super::expressions::Expr;

fn parenthesize(f: &mut Formatter<'_>, name: &str, parts: &[&Expr]) -> Result {
    write!(f, "({}", name)?;
    for part in parts {
        write!(f, " {}", part)?;
    }
    write!(f, ")")
}

/// Renders an expression in parenthesized prefix form, e.g. `(+ 1 (* 2 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Binary(expr) => {
                parenthesize(f, &expr.operator.lexeme, &[&expr.left, &expr.right])
            }
            Expr::Logical(expr) => {
                parenthesize(f, &expr.operator.lexeme, &[&expr.left, &expr.right])
            }
            Expr::Grouping(expr) => parenthesize(f, "group", &[&expr.expression]),
            Expr::Unary(expr) => parenthesize(f, &expr.operator.lexeme, &[&expr.right]),
            Expr::Literal(expr) => match &expr.value {
                LiteralValue::String(value) => write!(f, "\"{}\"", value),
                LiteralValue::Char(value) => write!(f, "'{}'", value),
                value => write!(f, "{}", value),
            },
            Expr::Variable(expr) => write!(f, "{}", expr.name.lexeme),
            Expr::Assign(expr) => {
                parenthesize(f, &format!("= {}", expr.name.lexeme), &[&expr.value])
            }
            Expr::Call(expr) => {
                write!(f, "(call {}", expr.callee)?;
                for argument in &expr.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
