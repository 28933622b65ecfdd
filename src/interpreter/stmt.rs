use std::rc::Rc;

use crate::ast::statements::Stmt;

use super::{
    environment::Environment,
    expr::eval_expression,
    interpreter::{interrupt_signal, Interpreter, Signal},
    value::{Callable, UserFunction, Value},
};

pub fn exec_statement(interpreter: &mut Interpreter, statement: &Stmt) -> Result<(), Signal> {
    match statement {
        Stmt::Expression(stmt) => {
            eval_expression(interpreter, &stmt.expression)?;
        }
        Stmt::Print(stmt) => {
            let value = eval_expression(interpreter, &stmt.expression)?;
            interpreter.write_line(&value.to_string(), &stmt.keyword)?;
        }
        Stmt::Var(stmt) => {
            let value = match &stmt.initializer {
                Some(initializer) => eval_expression(interpreter, initializer)?,
                None => Value::nil(),
            };

            interpreter.environment.borrow_mut().define(&stmt.name, value)?;
        }
        Stmt::Block(block) => {
            let environment = Environment::new_enclosing(Rc::clone(&interpreter.environment));
            interpreter.execute_block(&block.body, environment)?;
        }
        Stmt::If(stmt) => {
            if eval_expression(interpreter, &stmt.condition)?.is_truthy() {
                exec_statement(interpreter, &stmt.then_branch)?;
            } else if let Some(else_branch) = &stmt.else_branch {
                exec_statement(interpreter, else_branch)?;
            }
        }
        Stmt::While(stmt) => {
            while eval_expression(interpreter, &stmt.condition)?.is_truthy() {
                match exec_statement(interpreter, &stmt.body) {
                    Ok(()) | Err(Signal::Continue(_)) => {}
                    Err(Signal::Break(_)) => break,
                    Err(signal) => return Err(signal),
                }
            }
        }
        Stmt::Interrupt(stmt) => return Err(interrupt_signal(stmt.kind, &stmt.keyword)),
        Stmt::Function(declaration) => {
            let function = Callable::Function(UserFunction {
                declaration: Rc::clone(declaration),
                closure: Rc::clone(&interpreter.environment),
            });

            interpreter
                .environment
                .borrow_mut()
                .define(&declaration.name, Value::Callable(Rc::new(function)))?;
        }
        Stmt::Return(stmt) => {
            let value = match &stmt.value {
                Some(value) => eval_expression(interpreter, value)?,
                None => Value::nil(),
            };

            return Err(Signal::Return {
                keyword: stmt.keyword.clone(),
                value,
            });
        }
    }

    Ok(())
}
