use std::rc::Rc;

use crate::{
    ast::{
        expressions::Expr,
        statements::{
            BlockStmt, ExpressionStmt, FunctionDeclStmt, IfStmt, InterruptKind, InterruptStmt,
            PrintStmt, ReturnStmt, Stmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{literals::LiteralValue, tokens::TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Most parameters a function may declare.
pub const MAX_PARAMETERS: usize = 255;

/// Parses one declaration, recording any syntax error and resynchronizing
/// instead of failing.
pub fn parse_declaration_recovering(parser: &mut Parser) -> Option<Stmt> {
    match parse_declaration(parser) {
        Ok(stmt) => Some(stmt),
        Err(error) => {
            parser.report(error);
            parser.synchronize();
            None
        }
    }
}

pub fn parse_declaration(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Var => parse_var_decl_stmt(parser),
        TokenKind::Fun => parse_fn_decl_stmt(parser),
        _ => parse_stmt(parser),
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    if let Some(stmt_fn) = stmt_fn {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon, "Expect ';' after value.")?;

    Ok(Stmt::Print(PrintStmt {
        keyword,
        expression,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let name = parser.expect(TokenKind::Identifier, "Expect variable name.")?;

    let initializer = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(
        TokenKind::Semicolon,
        "Expect ';' after variable declaration.",
    )?;

    Ok(Stmt::Var(VarDeclStmt { name, initializer }))
}

/// Parses statements up to and including the closing `}`.
/// The opening brace must already be consumed.
fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        if let Some(stmt) = parse_declaration_recovering(parser) {
            statements.push(stmt);
        }
    }

    parser.expect(TokenKind::CloseCurly, "Expect '}' after block.")?;

    Ok(statements)
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let body = parse_block_body(parser)?;

    Ok(Stmt::Block(BlockStmt { body }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen, "Expect '(' after 'if'.")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expect ')' after 'if' condition.")?;

    let then_branch = Box::new(parse_stmt(parser)?);

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_branch,
        else_branch,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen, "Expect '(' after 'while'.")?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expect ')' after 'while' condition.")?;

    let body = Box::new(parse_stmt(parser)?);

    Ok(Stmt::While(WhileStmt { condition, body }))
}

/// Desugars `for (init; cond; incr) body` into
/// `{ init; while (cond) { body; incr; } }`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen, "Expect '(' after 'for'.")?;

    let initializer = match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            None
        }
        TokenKind::Var => Some(parse_var_decl_stmt(parser)?),
        _ => Some(parse_expression_stmt(parser)?),
    };

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

    let increment = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen, "Expect ')' after for clauses.")?;

    let mut body = parse_stmt(parser)?;

    if let Some(increment) = increment {
        body = Stmt::Block(BlockStmt {
            body: vec![
                body,
                Stmt::Expression(ExpressionStmt {
                    expression: increment,
                }),
            ],
        });
    }

    let condition = condition.unwrap_or_else(|| Expr::literal(LiteralValue::Boolean(true)));
    body = Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
    });

    if let Some(initializer) = initializer {
        body = Stmt::Block(BlockStmt {
            body: vec![initializer, body],
        });
    }

    Ok(body)
}

pub fn parse_interrupt_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();

    let (kind, message) = match keyword.kind {
        TokenKind::Break => (InterruptKind::Break, "Expect ';' after 'break'."),
        _ => (InterruptKind::Continue, "Expect ';' after 'continue'."),
    };
    parser.expect(TokenKind::Semicolon, message)?;

    Ok(Stmt::Interrupt(InterruptStmt { keyword, kind }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let name = parser.expect(TokenKind::Identifier, "Expect function name.")?;
    parser.expect(TokenKind::OpenParen, "Expect '(' after function name.")?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            if parameters.len() >= MAX_PARAMETERS {
                let error = Error::at_token(ErrorImpl::TooManyParameters, parser.current_token());
                parser.report(error);
            }

            parameters.push(parser.expect(TokenKind::Identifier, "Expect parameter name.")?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen, "Expect ')' after parameters.")?;
    parser.expect(TokenKind::OpenCurly, "Expect '{' before function body.")?;

    let body = parse_block_body(parser)?;

    Ok(Stmt::Function(Rc::new(FunctionDeclStmt {
        name,
        parameters,
        body,
    })))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let keyword = parser.advance().clone();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "Expect ';' after return value.")?;

    Ok(Stmt::Return(ReturnStmt { keyword, value }))
}
