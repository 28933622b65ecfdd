//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Expressions are parsed with a Pratt parser driven by lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::{
        expressions::{next_expr_id, ExprId},
        statements::Stmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        literals::LiteralValue,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_declaration_recovering,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Syntax errors recorded so far
    errors: Vec<Error>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map(|token| token.line).unwrap_or(1);
            tokens.push(Token {
                kind: TokenKind::EOF,
                lexeme: String::new(),
                literal: LiteralValue::Nil,
                line,
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    fn previous_token_kind(&self) -> Option<TokenKind> {
        self.pos
            .checked_sub(1)
            .and_then(|pos| self.tokens.get(pos))
            .map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.current_token_kind() != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Consumes a token of the expected kind or fails with `message` located
    /// at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(Error::at_token(
                ErrorImpl::UnexpectedToken {
                    message: message.to_string(),
                },
                self.current_token(),
            ));
        }

        Ok(self.advance().clone())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Records a syntax error without unwinding the current production.
    pub fn report(&mut self, error: Error) {
        tracing::debug!(error = %error, "syntax error");
        self.errors.push(error);
    }

    /// Discards tokens until a likely statement boundary.
    pub fn synchronize(&mut self) {
        self.advance();

        while self.has_tokens() {
            if matches!(
                self.previous_token_kind(),
                Some(TokenKind::Semicolon) | Some(TokenKind::CloseCurly)
            ) {
                return;
            }

            if self.current_token_kind().is_statement_boundary() {
                return;
            }

            self.advance();
        }
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Hands out a fresh id for a variable-referencing expression.
    pub fn advance_id(&mut self) -> ExprId {
        next_expr_id()
    }
}

/// Parses a stream of tokens into a program.
///
/// Syntax errors are collected while the parser recovers at statement
/// boundaries; if any occurred the whole parse fails with all of them.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, Vec<Error>> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        if let Some(stmt) = parse_declaration_recovering(&mut parser) {
            body.push(stmt);
        }
    }

    tracing::debug!(
        statements = body.len(),
        errors = parser.errors.len(),
        "parsed program"
    );

    if parser.errors.is_empty() {
        Ok(body)
    } else {
        Err(parser.errors)
    }
}
