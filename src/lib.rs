#![allow(clippy::module_inception)]

//! Front end and tree-walking evaluator for the assembler's meta-language.
//!
//! Source text flows through four phases:
//!
//! 1. [`lexer`] turns text into tokens
//! 2. [`parser`] turns tokens into statements
//! 3. [`resolver`] computes binding distances for every variable use
//! 4. [`interpreter`] evaluates the statements
//!
//! [`assembler::Assembler`] wires the phases together and hands
//! diagnostics to a [`errors::report::Reporter`].

pub mod assembler;
pub mod ast;
pub mod config;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod resolver;
pub mod stack;

extern crate regex;

pub use assembler::{Assembler, AssemblerError};
pub use interpreter::interpreter::Interpreter;
