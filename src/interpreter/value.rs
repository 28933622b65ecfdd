use std::{fmt::Display, rc::Rc};

use crate::{
    ast::statements::FunctionDeclStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::{literals::LiteralValue, tokens::Token},
};

use super::{
    environment::{EnvRef, Environment},
    interpreter::{Interpreter, Signal},
};

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Literal(LiteralValue),
    Callable(Rc<Callable>),
}

impl Value {
    pub fn nil() -> Value {
        Value::Literal(LiteralValue::Nil)
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Literal(literal) => literal.is_truthy(),
            Value::Callable(_) => true,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Literal(literal) => literal.kind_name(),
            Value::Callable(_) => "function",
        }
    }
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Value {
        Value::Literal(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Literal(literal) => write!(f, "{}", literal),
            Value::Callable(callable) => write!(f, "{}", callable),
        }
    }
}

pub type NativeFn = fn(&[Value]) -> Result<Value, ErrorImpl>;

pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub function: NativeFn,
}

/// A declared function together with the environment it was declared in.
pub struct UserFunction {
    pub declaration: Rc<FunctionDeclStmt>,
    pub closure: EnvRef,
}

pub enum Callable {
    Native(NativeFunction),
    Function(UserFunction),
}

impl Callable {
    pub fn arity(&self) -> usize {
        match self {
            Callable::Native(native) => native.arity,
            Callable::Function(function) => function.declaration.parameters.len(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Callable::Native(native) => native.name,
            Callable::Function(function) => &function.declaration.name.lexeme,
        }
    }

    /// Invokes the callable. Arity must already be checked by the caller.
    pub fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, Error> {
        match self {
            Callable::Native(native) => {
                (native.function)(&arguments).map_err(|error| Error::at_token(error, paren))
            }
            Callable::Function(function) => function.call(interpreter, arguments),
        }
    }
}

impl UserFunction {
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, Error> {
        let environment = Environment::new_enclosing(Rc::clone(&self.closure));

        for (parameter, argument) in self.declaration.parameters.iter().zip(arguments) {
            environment.borrow_mut().define(parameter, argument)?;
        }

        match interpreter.execute_block(&self.declaration.body, environment) {
            Ok(()) => Ok(Value::nil()),
            Err(Signal::Return { value, .. }) => Ok(value),
            Err(Signal::Break(keyword)) => {
                Err(Error::at_token(ErrorImpl::BreakOutsideLoop, &keyword))
            }
            Err(Signal::Continue(keyword)) => {
                Err(Error::at_token(ErrorImpl::ContinueOutsideLoop, &keyword))
            }
            Err(Signal::Error(error)) => Err(error),
        }
    }
}

impl Display for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Callable::Native(_) => write!(f, "<native fn>"),
            Callable::Function(function) => write!(f, "<fn {}>", function.declaration.name.lexeme),
        }
    }
}

// Closures can reach themselves through their environment, so only the
// name is printed.
impl std::fmt::Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish()
    }
}
