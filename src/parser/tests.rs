//! Unit tests for the parser module.

use crate::{
    ast::{
        expressions::Expr,
        statements::{InterruptKind, Stmt},
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<Vec<Stmt>, Vec<Error>> {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    parse(tokens)
}

fn parse_ok(source: &str) -> Vec<Stmt> {
    match parse_source(source) {
        Ok(statements) => statements,
        Err(errors) => panic!("unexpected syntax errors: {:?}", errors),
    }
}

fn expression_of(stmt: &Stmt) -> &Expr {
    match stmt {
        Stmt::Expression(stmt) => &stmt.expression,
        Stmt::Print(stmt) => &stmt.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn print_expr(source: &str) -> String {
    let statements = parse_ok(source);
    expression_of(&statements[0]).to_string()
}

#[test]
fn test_parse_precedence() {
    assert_eq!(print_expr("1 + 2 * 3;"), "(+ 1 (* 2 3))");
    assert_eq!(print_expr("(1 + 2) * 3;"), "(* (group (+ 1 2)) 3)");
    assert_eq!(print_expr("1 - 2 - 3;"), "(- (- 1 2) 3)");
    assert_eq!(print_expr("-a * b;"), "(* (- a) b)");
    assert_eq!(print_expr("!a == b;"), "(== (! a) b)");
    assert_eq!(print_expr("1 < 2 == true;"), "(== (< 1 2) true)");
}

#[test]
fn test_parse_logical_precedence() {
    assert_eq!(print_expr("a or b and c;"), "(or a (and b c))");
    assert_eq!(print_expr("a and b or c;"), "(or (and a b) c)");
}

#[test]
fn test_parse_assignment_is_right_associative() {
    assert_eq!(print_expr("a = b = 3;"), "(= a (= b 3))");
}

#[test]
fn test_parse_literals() {
    assert_eq!(print_expr("print 1.5;"), "1.5");
    assert_eq!(print_expr("print \"hi\";"), "\"hi\"");
    assert_eq!(print_expr("print nil;"), "nil");
    assert_eq!(print_expr("print 0x2A;"), "0x2A");
}

#[test]
fn test_parse_calls() {
    assert_eq!(print_expr("f(1, g(2))(3);"), "(call (call f 1 (call g 2)) 3)");
    assert_eq!(print_expr("clock();"), "(call clock)");
}

#[test]
fn test_parse_invalid_assignment_target() {
    let errors = parse_source("a + b = 3;").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "InvalidAssignmentTarget");
    assert_eq!(errors[0].get_location(), Some(" at '='"));
}

#[test]
fn test_parse_variable_declaration() {
    let statements = parse_ok("var x = 42; var y;");

    match (&statements[0], &statements[1]) {
        (Stmt::Var(x), Stmt::Var(y)) => {
            assert_eq!(x.name.lexeme, "x");
            assert!(x.initializer.is_some());
            assert_eq!(y.name.lexeme, "y");
            assert!(y.initializer.is_none());
        }
        other => panic!("unexpected statements {:?}", other),
    }
}

#[test]
fn test_parse_function_declaration() {
    let statements = parse_ok("fun add(a, b) { return a + b; }");

    match &statements[0] {
        Stmt::Function(function) => {
            assert_eq!(function.name.lexeme, "add");
            assert_eq!(function.parameters.len(), 2);
            assert_eq!(function.body.len(), 1);
            assert!(function.body[0].is_return());
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_parse_if_else() {
    let statements = parse_ok("if (x > 0) print 1; else print 2;");

    match &statements[0] {
        Stmt::If(stmt) => assert!(stmt.else_branch.is_some()),
        other => panic!("expected an if, got {:?}", other),
    }
}

#[test]
fn test_parse_for_desugars_to_while() {
    let statements = parse_ok("for (var i = 0; i < 3; i = i + 1) print i;");

    let outer = match &statements[0] {
        Stmt::Block(block) => block,
        other => panic!("expected the initializer block, got {:?}", other),
    };
    assert!(matches!(outer.body[0], Stmt::Var(_)));

    let loop_stmt = match &outer.body[1] {
        Stmt::While(stmt) => stmt,
        other => panic!("expected a while loop, got {:?}", other),
    };
    assert_eq!(loop_stmt.condition.to_string(), "(< i 3)");

    match loop_stmt.body.as_ref() {
        Stmt::Block(body) => {
            assert!(matches!(body.body[0], Stmt::Print(_)));
            assert_eq!(expression_of(&body.body[1]).to_string(), "(= i (+ i 1))");
        }
        other => panic!("expected the increment block, got {:?}", other),
    }
}

#[test]
fn test_parse_for_without_clauses() {
    let statements = parse_ok("for (;;) break;");

    match &statements[0] {
        Stmt::While(stmt) => {
            assert_eq!(stmt.condition.to_string(), "true");
            assert!(matches!(
                stmt.body.as_ref(),
                Stmt::Interrupt(interrupt) if interrupt.kind == InterruptKind::Break
            ));
        }
        other => panic!("expected a bare while loop, got {:?}", other),
    }
}

#[test]
fn test_parse_reports_multiple_errors() {
    let errors = parse_source("var = 1;\nprint 2;\nprint ;\nvar ok = 3;").unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_line(), 1);
    assert_eq!(errors[0].message(), "Expect variable name.");
    assert_eq!(errors[1].get_line(), 3);
    assert_eq!(errors[1].get_error_name(), "ExpectedExpression");
}

#[test]
fn test_parse_missing_semicolon_at_end() {
    let errors = parse_source("print 1").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_location(), Some(" at end"));
    assert_eq!(errors[0].message(), "Expect ';' after value.");
}

#[test]
fn test_parse_recovers_inside_blocks() {
    let errors = parse_source("{ var a = ; print a; }\nprint (1;").unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[1].message(), "Expect ')' after expression.");
}

#[test]
fn test_parse_too_many_arguments() {
    let arguments = vec!["1"; 256].join(", ");
    let errors = parse_source(&format!("f({});", arguments)).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "TooManyArguments");
}

#[test]
fn test_parse_too_many_parameters() {
    let parameters = (0..256).map(|i| format!("p{}", i)).collect::<Vec<_>>().join(", ");
    let errors = parse_source(&format!("fun f({}) {{}}", parameters)).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "TooManyParameters");
}

#[test]
fn test_parse_variable_ids_are_unique() {
    let statements = parse_ok("a; a;");

    match (expression_of(&statements[0]), expression_of(&statements[1])) {
        (Expr::Variable(first), Expr::Variable(second)) => assert_ne!(first.id, second.id),
        other => panic!("expected two variables, got {:?}", other),
    }
}
