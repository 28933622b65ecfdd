use crate::{
    ast::expressions::{CallExpr, Expr, ExprId},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    stack::ensure_sufficient_stack,
};

use super::{
    environment::{assign_at, get_at},
    interpreter::{Interpreter, MAX_CALL_DEPTH},
    operators,
    value::Value,
};

pub fn eval_expression(interpreter: &mut Interpreter, expr: &Expr) -> Result<Value, Error> {
    ensure_sufficient_stack(|| evaluate(interpreter, expr))
}

fn evaluate(interpreter: &mut Interpreter, expr: &Expr) -> Result<Value, Error> {
    match expr {
        Expr::Literal(literal) => Ok(Value::Literal(literal.value.clone())),
        Expr::Grouping(grouping) => eval_expression(interpreter, &grouping.expression),
        Expr::Unary(unary) => {
            let right = eval_expression(interpreter, &unary.right)?;
            operators::unary(&unary.operator, right)
        }
        Expr::Binary(binary) => {
            let left = eval_expression(interpreter, &binary.left)?;
            let right = eval_expression(interpreter, &binary.right)?;
            operators::binary(&binary.operator, left, right)
        }
        Expr::Logical(logical) => {
            let left = eval_expression(interpreter, &logical.left)?;

            // The deciding operand itself is the result
            let short_circuits = match logical.operator.kind {
                TokenKind::Or => left.is_truthy(),
                _ => !left.is_truthy(),
            };

            if short_circuits {
                Ok(left)
            } else {
                eval_expression(interpreter, &logical.right)
            }
        }
        Expr::Variable(variable) => look_up_variable(interpreter, variable.id, &variable.name),
        Expr::Assign(assign) => {
            let value = eval_expression(interpreter, &assign.value)?;

            match interpreter.get_local(assign.id) {
                Some(distance) => {
                    assign_at(&interpreter.environment, distance, &assign.name, value.clone())?
                }
                None => interpreter
                    .globals
                    .borrow_mut()
                    .assign(&assign.name, value.clone())?,
            }

            Ok(value)
        }
        Expr::Call(call) => eval_call(interpreter, call),
    }
}

fn look_up_variable(interpreter: &Interpreter, id: ExprId, name: &Token) -> Result<Value, Error> {
    match interpreter.get_local(id) {
        Some(distance) => get_at(&interpreter.environment, distance, name),
        None => interpreter.globals.borrow().get(name),
    }
}

fn eval_call(interpreter: &mut Interpreter, call: &CallExpr) -> Result<Value, Error> {
    let callee = eval_expression(interpreter, &call.callee)?;

    let mut arguments = Vec::with_capacity(call.arguments.len());
    for argument in &call.arguments {
        arguments.push(eval_expression(interpreter, argument)?);
    }

    let callable = match callee {
        Value::Callable(callable) => callable,
        Value::Literal(_) => return Err(Error::at_token(ErrorImpl::NotCallable, &call.paren)),
    };

    if arguments.len() != callable.arity() {
        return Err(Error::at_token(
            ErrorImpl::UnexpectedArguments {
                expected: callable.arity(),
                received: arguments.len(),
            },
            &call.paren,
        ));
    }

    if interpreter.depth >= MAX_CALL_DEPTH {
        return Err(Error::at_token(
            ErrorImpl::StackOverflow {
                depth: MAX_CALL_DEPTH,
            },
            &call.paren,
        ));
    }

    tracing::trace!(function = callable.name(), depth = interpreter.depth, "call");

    interpreter.depth += 1;
    let result = callable.call(interpreter, arguments, &call.paren);
    interpreter.depth -= 1;

    result
}
