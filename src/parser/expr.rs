use crate::{
    ast::expressions::{
        AssignExpr, BinaryExpr, CallExpr, Expr, GroupingExpr, LogicalExpr, UnaryExpr,
        VariableExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{literals::LiteralValue, tokens::TokenKind},
    stack::ensure_sufficient_stack,
};

use super::{lookups::BindingPower, parser::Parser};

/// Most arguments a call may pass.
pub const MAX_ARGUMENTS: usize = 255;

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    ensure_sufficient_stack(|| parse_expr_at(parser, bp))
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud_fn = match parser.get_nud_lookup().get(&parser.current_token_kind()) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Error::at_token(
                ErrorImpl::ExpectedExpression,
                parser.current_token(),
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    // While the next operator binds tighter than `bp`, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = match parser.get_bp_lookup().get(&token_kind) {
            Some(next_bp) if *next_bp > bp => *next_bp,
            _ => break,
        };
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => break,
        };

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    let value = match token.kind {
        TokenKind::Identifier => {
            return Ok(Expr::Variable(VariableExpr {
                id: parser.advance_id(),
                name: token,
            }))
        }
        TokenKind::True => LiteralValue::Boolean(true),
        TokenKind::False => LiteralValue::Boolean(false),
        TokenKind::Nil => LiteralValue::Nil,
        _ => token.literal,
    };

    Ok(Expr::literal(value))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_logical_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Logical(LogicalExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        operator,
        right: Box::new(right),
    }))
}

/// Assignment is right-associative and only accepts a variable target.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let equals = parser.advance().clone();
    let value = parse_expr(parser, BindingPower::Default)?;

    match left {
        Expr::Variable(variable) => Ok(Expr::Assign(AssignExpr {
            id: parser.advance_id(),
            name: variable.name,
            value: Box::new(value),
        })),
        _ => Err(Error::at_token(ErrorImpl::InvalidAssignmentTarget, &equals)),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, "Expect ')' after expression.")?;

    Ok(Expr::Grouping(GroupingExpr {
        expression: Box::new(expression),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            if arguments.len() >= MAX_ARGUMENTS {
                let error = Error::at_token(ErrorImpl::TooManyArguments, parser.current_token());
                parser.report(error);
            }

            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    let paren = parser.expect(TokenKind::CloseParen, "Expect ')' after arguments.")?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(left),
        paren,
        arguments,
    }))
}
