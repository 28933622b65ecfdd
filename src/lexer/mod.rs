//! Lexical analysis.
//!
//! This module converts source text into a stream of tokens for parsing.
//! It handles:
//!
//! - Tokenization through an ordered table of anchored regex patterns
//! - Recognition of keywords, directives and RISC-V mnemonics
//! - Integer, float, hex, binary, string and char literals
//! - Line tracking for diagnostics
//!
//! Lexical errors never stop the scan; they are returned next to the tokens.

pub mod lexer;
pub mod literals;
pub mod tokens;
