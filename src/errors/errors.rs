use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

/// A single diagnostic raised by any phase of the pipeline.
///
/// Carries the source line and, for token-associated errors, the location
/// hint (`" at end"` or `" at '<lexeme>'"`) expected by reporters.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
    location: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
            location: None,
        }
    }

    /// Builds an error located at `token`.
    pub fn at_token(error_impl: ErrorImpl, token: &Token) -> Self {
        let location = if token.kind == TokenKind::EOF {
            String::from(" at end")
        } else {
            format!(" at '{}'", token.lexeme)
        };

        Error {
            internal_error: error_impl,
            line: token.line,
            location: Some(location),
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    /// Warnings are reported like errors but never stop a phase.
    pub fn is_warning(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnreachableCode)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedChar => "UnterminatedChar",
            ErrorImpl::CharTooLong { .. } => "CharTooLong",
            ErrorImpl::EmptyChar => "EmptyChar",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression => "ExpectedExpression",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::TooManyParameters => "TooManyParameters",
            ErrorImpl::TooManyArguments => "TooManyArguments",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::SelfReferencingInitializer { .. } => "SelfReferencingInitializer",
            ErrorImpl::ReturnOutsideFunction => "ReturnOutsideFunction",
            ErrorImpl::BreakOutsideLoop => "BreakOutsideLoop",
            ErrorImpl::ContinueOutsideLoop => "ContinueOutsideLoop",
            ErrorImpl::UnreachableCode => "UnreachableCode",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::VariableAlreadyDefined { .. } => "VariableAlreadyDefined",
            ErrorImpl::InvalidOperand { .. } => "InvalidOperand",
            ErrorImpl::InvalidOperands { .. } => "InvalidOperands",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::NotCallable => "NotCallable",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::StackOverflow { .. } => "StackOverflow",
            ErrorImpl::OutputError { .. } => "OutputError",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = if self.is_warning() { "Warning" } else { "Error" };

        write!(
            f,
            "[line {}] {}{}: {}",
            self.line,
            severity,
            self.location.as_deref().unwrap_or(""),
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("Unexpected character '{character}'.")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated char.")]
    UnterminatedChar,
    #[error("Too many characters for '{value}'.")]
    CharTooLong { value: String },
    #[error("Empty char literal.")]
    EmptyChar,
    #[error("Integer literal '{token}' does not fit in 32 bits.")]
    IntegerParseError { token: String },

    // Syntax
    #[error("{message}")]
    UnexpectedToken { message: String },
    #[error("Expect expression.")]
    ExpectedExpression,
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget,
    #[error("Can't have more than 255 parameters.")]
    TooManyParameters,
    #[error("Can't have more than 255 arguments.")]
    TooManyArguments,

    // Resolution
    #[error("A variable named '{variable}' is already in this scope.")]
    VariableAlreadyDeclared { variable: String },
    #[error("Can't read local variable '{variable}' in its own initializer.")]
    SelfReferencingInitializer { variable: String },
    #[error("Can't return from top-level code.")]
    ReturnOutsideFunction,
    #[error("Can't break outside of a loop.")]
    BreakOutsideLoop,
    #[error("Can't continue outside of a loop.")]
    ContinueOutsideLoop,
    #[error("Unreachable code.")]
    UnreachableCode,

    // Runtime
    #[error("Undefined variable '{variable}'.")]
    VariableNotDeclared { variable: String },
    #[error("Variable '{variable}' already defined.")]
    VariableAlreadyDefined { variable: String },
    #[error("Operand of '{operator}' must be {expected}, got {found}.")]
    InvalidOperand {
        operator: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Operands of '{operator}' must be {expected}, got {left} and {right}.")]
    InvalidOperands {
        operator: String,
        expected: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("Integer overflow in '{operator}'.")]
    IntegerOverflow { operator: String },
    #[error("Can only call functions.")]
    NotCallable,
    #[error("Expected {expected} arguments but got {received}.")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("Stack overflow: calls nested deeper than {depth}.")]
    StackOverflow { depth: usize },
    #[error("Failed to write program output: {message}")]
    OutputError { message: String },
}
