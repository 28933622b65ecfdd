use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::{
        expressions::ExprId,
        statements::{InterruptKind, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    resolver::resolver::ResolutionTable,
};

use super::{
    environment::{EnvRef, Environment},
    stdlib::define_natives,
    stmt::exec_statement,
    value::Value,
};

/// Calls nested deeper than this raise a runtime error.
pub const MAX_CALL_DEPTH: usize = 2048;

/// Why statement execution stopped early.
///
/// Loops absorb `Break` and `Continue`, calls absorb `Return`; `Error`
/// always reaches the top.
#[derive(Debug)]
pub enum Signal {
    Break(Token),
    Continue(Token),
    Return { keyword: Token, value: Value },
    Error(Error),
}

impl From<Error> for Signal {
    fn from(error: Error) -> Self {
        Signal::Error(error)
    }
}

/// The evaluator state that survives across programs.
///
/// Globals and resolved scope distances persist, so several sources run
/// through the same interpreter see each other's top-level definitions.
pub struct Interpreter<'a> {
    /// The outermost environment, holding natives and top-level bindings
    pub globals: EnvRef,
    /// The environment of the scope currently executing
    pub environment: EnvRef,
    /// Scope distances recorded by the resolver
    locals: HashMap<ExprId, usize>,
    /// Number of calls currently executing
    pub depth: usize,
    /// Destination of `print`
    pub output: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        let globals = Environment::new();
        define_natives(&globals);

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            depth: 0,
            output,
        }
    }

    pub fn get_local(&self, id: ExprId) -> Option<usize> {
        self.locals.get(&id).copied()
    }

    /// Runs statements inside `environment` and restores the previous
    /// environment on every exit path.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: EnvRef) -> Result<(), Signal> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let result = statements
            .iter()
            .try_for_each(|statement| exec_statement(self, statement));

        self.environment = previous;
        result
    }

    /// Executes a program. A runtime error stops execution immediately.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), Error> {
        tracing::debug!(statements = statements.len(), "interpreting program");

        for statement in statements {
            match exec_statement(self, statement) {
                Ok(()) => {}
                Err(Signal::Error(error)) => return Err(error),
                Err(Signal::Break(keyword)) => {
                    return Err(Error::at_token(ErrorImpl::BreakOutsideLoop, &keyword))
                }
                Err(Signal::Continue(keyword)) => {
                    return Err(Error::at_token(ErrorImpl::ContinueOutsideLoop, &keyword))
                }
                Err(Signal::Return { keyword, .. }) => {
                    return Err(Error::at_token(ErrorImpl::ReturnOutsideFunction, &keyword))
                }
            }
        }

        Ok(())
    }

    pub fn write_line(&mut self, text: &str, keyword: &Token) -> Result<(), Error> {
        writeln!(self.output, "{}", text).map_err(|error| {
            Error::at_token(
                ErrorImpl::OutputError {
                    message: error.to_string(),
                },
                keyword,
            )
        })
    }
}

impl ResolutionTable for Interpreter<'_> {
    fn record(&mut self, id: ExprId, depth: usize) {
        self.locals.insert(id, depth);
    }
}

/// Maps a loop-control statement to the signal it raises.
pub fn interrupt_signal(kind: InterruptKind, keyword: &Token) -> Signal {
    match kind {
        InterruptKind::Break => Signal::Break(keyword.clone()),
        InterruptKind::Continue => Signal::Continue(keyword.clone()),
    }
}
