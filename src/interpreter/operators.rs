//! Operator semantics.
//!
//! Integers stay integers under `+ - *` (overflow is an error). Mixing an
//! Integer with a Number widens to Number. Division always yields a Number.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        literals::LiteralValue,
        tokens::{Token, TokenKind},
    },
};

use super::value::Value;

const NUMBERS: &str = "two numbers or two integers";
const NUMBERS_OR_STRINGS: &str = "two numbers or two strings";
const NUMBER: &str = "a number";

/// Operands of an arithmetic operator after widening.
enum Numeric {
    Integers(i32, i32),
    Numbers(f64, f64),
}

fn numeric_pair(left: &Value, right: &Value) -> Option<Numeric> {
    use LiteralValue::{Integer, Number};

    match (left, right) {
        (Value::Literal(Integer(a)), Value::Literal(Integer(b))) => Some(Numeric::Integers(*a, *b)),
        (Value::Literal(Number(a)), Value::Literal(Number(b))) => Some(Numeric::Numbers(*a, *b)),
        (Value::Literal(Integer(a)), Value::Literal(Number(b))) => {
            Some(Numeric::Numbers(*a as f64, *b))
        }
        (Value::Literal(Number(a)), Value::Literal(Integer(b))) => {
            Some(Numeric::Numbers(*a, *b as f64))
        }
        _ => None,
    }
}

fn invalid_operands(
    operator: &Token,
    expected: &'static str,
    left: &Value,
    right: &Value,
) -> Error {
    Error::at_token(
        ErrorImpl::InvalidOperands {
            operator: operator.lexeme.clone(),
            expected,
            left: left.kind_name(),
            right: right.kind_name(),
        },
        operator,
    )
}

fn overflow(operator: &Token) -> Error {
    Error::at_token(
        ErrorImpl::IntegerOverflow {
            operator: operator.lexeme.clone(),
        },
        operator,
    )
}

fn arithmetic(
    operator: &Token,
    left: &Value,
    right: &Value,
    integer_op: fn(i32, i32) -> Option<i32>,
    number_op: fn(f64, f64) -> f64,
) -> Result<Value, Error> {
    match numeric_pair(left, right) {
        Some(Numeric::Integers(a, b)) => integer_op(a, b)
            .map(|value| Value::Literal(LiteralValue::Integer(value)))
            .ok_or_else(|| overflow(operator)),
        Some(Numeric::Numbers(a, b)) => Ok(Value::Literal(LiteralValue::Number(number_op(a, b)))),
        None => Err(invalid_operands(operator, NUMBERS, left, right)),
    }
}

/// Ordering only compares values of the same numeric kind.
fn comparison(operator: &Token, left: &Value, right: &Value) -> Result<Value, Error> {
    use LiteralValue::{Integer, Number};

    let result = match (left, right) {
        (Value::Literal(Integer(a)), Value::Literal(Integer(b))) => compare(operator.kind, a, b),
        (Value::Literal(Number(a)), Value::Literal(Number(b))) => compare(operator.kind, a, b),
        _ => return Err(invalid_operands(operator, NUMBERS, left, right)),
    };

    Ok(Value::Literal(LiteralValue::Boolean(result)))
}

fn compare<T: PartialOrd>(kind: TokenKind, a: &T, b: &T) -> bool {
    match kind {
        TokenKind::Greater => a > b,
        TokenKind::GreaterEquals => a >= b,
        TokenKind::Less => a < b,
        _ => a <= b,
    }
}

/// Numeric values compare after widening. Other values are equal only to a
/// value of the same kind with the same content; functions by identity.
pub fn is_equal(left: &Value, right: &Value) -> bool {
    if let Some(pair) = numeric_pair(left, right) {
        return match pair {
            Numeric::Integers(a, b) => a == b,
            Numeric::Numbers(a, b) => a == b,
        };
    }

    match (left, right) {
        (Value::Literal(a), Value::Literal(b)) => a == b,
        (Value::Callable(a), Value::Callable(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

pub fn binary(operator: &Token, left: Value, right: Value) -> Result<Value, Error> {
    match operator.kind {
        TokenKind::Plus => match (&left, &right) {
            (Value::Literal(LiteralValue::String(a)), Value::Literal(LiteralValue::String(b))) => {
                Ok(Value::Literal(LiteralValue::String(format!("{}{}", a, b))))
            }
            _ => match numeric_pair(&left, &right) {
                Some(_) => arithmetic(operator, &left, &right, i32::checked_add, |a, b| a + b),
                None => Err(invalid_operands(operator, NUMBERS_OR_STRINGS, &left, &right)),
            },
        },
        TokenKind::Dash => arithmetic(operator, &left, &right, i32::checked_sub, |a, b| a - b),
        TokenKind::Star => arithmetic(operator, &left, &right, i32::checked_mul, |a, b| a * b),
        TokenKind::Slash => match numeric_pair(&left, &right) {
            Some(Numeric::Integers(a, b)) => {
                Ok(Value::Literal(LiteralValue::Number(a as f64 / b as f64)))
            }
            Some(Numeric::Numbers(a, b)) => Ok(Value::Literal(LiteralValue::Number(a / b))),
            None => Err(invalid_operands(operator, NUMBERS, &left, &right)),
        },
        TokenKind::Greater | TokenKind::GreaterEquals | TokenKind::Less | TokenKind::LessEquals => {
            comparison(operator, &left, &right)
        }
        TokenKind::Equals => Ok(Value::Literal(LiteralValue::Boolean(is_equal(&left, &right)))),
        TokenKind::NotEquals => Ok(Value::Literal(LiteralValue::Boolean(!is_equal(&left, &right)))),
        _ => Err(invalid_operands(operator, NUMBERS, &left, &right)),
    }
}

pub fn unary(operator: &Token, right: Value) -> Result<Value, Error> {
    match operator.kind {
        TokenKind::Not => Ok(Value::Literal(LiteralValue::Boolean(!right.is_truthy()))),
        _ => match right {
            Value::Literal(LiteralValue::Integer(value)) => value
                .checked_neg()
                .map(|value| Value::Literal(LiteralValue::Integer(value)))
                .ok_or_else(|| overflow(operator)),
            Value::Literal(LiteralValue::Number(value)) => {
                Ok(Value::Literal(LiteralValue::Number(-value)))
            }
            _ => Err(Error::at_token(
                ErrorImpl::InvalidOperand {
                    operator: operator.lexeme.clone(),
                    expected: NUMBER,
                    found: right.kind_name(),
                },
                operator,
            )),
        },
    }
}
