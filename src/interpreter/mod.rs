//! Tree-walking evaluation.
//!
//! This module executes a resolved program against a chain of lexical
//! environments. It handles:
//!
//! - Runtime values and the callable protocol (native and user functions)
//! - Environments shared between scopes and closures
//! - Operator semantics, including Integer/Number widening
//! - Non-local control flow (`break`, `continue`, `return`) as explicit signals

pub mod environment;
pub mod expr;
pub mod interpreter;
pub mod operators;
pub mod stdlib;
pub mod stmt;
pub mod value;

#[cfg(test)]
mod tests;
