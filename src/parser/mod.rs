//! Parser module for building the syntax tree.
//!
//! This module transforms a stream of tokens into a list of statements.
//! It uses a Pratt parser for expressions with binding powers for
//! precedence and handles:
//!
//! - Declarations (`var`, `fun`) and statements (`print`, blocks, control flow)
//! - Desugaring of `for` loops into `while` loops
//! - Panic-mode recovery so one run reports several syntax errors
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! registered in lookup tables keyed by token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
