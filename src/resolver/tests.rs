//! Unit tests for the resolver.

use std::collections::HashMap;

use crate::{
    ast::{
        expressions::{Expr, ExprId},
        statements::Stmt,
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::resolver::{resolve, Resolution};

fn resolve_source(source: &str) -> (Vec<Stmt>, HashMap<ExprId, usize>, Resolution) {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    let statements = parse(tokens).expect("source should parse");

    let mut table = HashMap::new();
    let resolution = resolve(&statements, &mut table);
    (statements, table, resolution)
}

fn error_names(resolution: &Resolution) -> Vec<&str> {
    resolution
        .errors
        .iter()
        .map(|error| error.get_error_name())
        .collect()
}

#[test]
fn test_globals_are_not_recorded() {
    let (_, table, resolution) = resolve_source("var a = 1; print a; a = 2;");

    assert!(resolution.is_ok());
    assert!(table.is_empty());
}

#[test]
fn test_local_distances() {
    let (statements, table, resolution) = resolve_source("{ var a = 1; { print a; } }");

    assert!(resolution.is_ok());

    let outer = match &statements[0] {
        Stmt::Block(block) => block,
        other => panic!("expected a block, got {:?}", other),
    };
    let inner = match &outer.body[1] {
        Stmt::Block(block) => block,
        other => panic!("expected a block, got {:?}", other),
    };
    let id = match &inner.body[0] {
        Stmt::Print(print) => match &print.expression {
            Expr::Variable(variable) => variable.id,
            other => panic!("expected a variable, got {:?}", other),
        },
        other => panic!("expected a print, got {:?}", other),
    };

    assert_eq!(table.get(&id), Some(&1));
}

#[test]
fn test_parameters_resolve_at_depth_zero() {
    let (_, table, resolution) = resolve_source("fun f(x) { return x; }");

    assert!(resolution.is_ok());
    assert_eq!(table.values().copied().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_self_referencing_initializer() {
    let (_, _, resolution) = resolve_source("{ var x = x; }");

    assert_eq!(error_names(&resolution), vec!["SelfReferencingInitializer"]);
}

#[test]
fn test_shadowing_outer_variable_in_initializer_is_an_error() {
    let (_, _, resolution) = resolve_source("{ var a = 1; { var a = a; } }");

    assert_eq!(error_names(&resolution), vec!["SelfReferencingInitializer"]);
}

#[test]
fn test_duplicate_local_binding() {
    let (_, _, resolution) = resolve_source("{ var x = 1; var x = 2; }");

    assert_eq!(error_names(&resolution), vec!["VariableAlreadyDeclared"]);
    assert_eq!(resolution.errors[0].get_location(), Some(" at 'x'"));
}

#[test]
fn test_duplicate_parameter() {
    let (_, _, resolution) = resolve_source("fun f(a, a) {}");

    assert_eq!(error_names(&resolution), vec!["VariableAlreadyDeclared"]);
}

#[test]
fn test_return_outside_function() {
    let (_, _, resolution) = resolve_source("return 1;");

    assert_eq!(error_names(&resolution), vec!["ReturnOutsideFunction"]);
}

#[test]
fn test_break_and_continue_outside_loop() {
    let (_, _, resolution) = resolve_source("break; { continue; }");

    assert_eq!(
        error_names(&resolution),
        vec!["BreakOutsideLoop", "ContinueOutsideLoop"]
    );
}

#[test]
fn test_break_inside_loops() {
    let (_, _, resolution) =
        resolve_source("while (true) { if (true) break; continue; } for (;;) break;");

    assert!(resolution.is_ok());
}

#[test]
fn test_loop_does_not_extend_into_function_body() {
    let (_, _, resolution) = resolve_source("while (true) { fun f() { break; } break; }");

    assert_eq!(error_names(&resolution), vec!["BreakOutsideLoop"]);
}

#[test]
fn test_unreachable_code_is_a_warning() {
    let (_, _, resolution) = resolve_source("fun f() {\n  return 1;\n  print 2;\n  print 3;\n}");

    assert!(resolution.is_ok());
    assert_eq!(resolution.warnings.len(), 2);
    assert!(resolution.warnings.iter().all(|warning| warning.is_warning()));
    assert_eq!(resolution.warnings[0].get_line(), 2);
}

#[test]
fn test_all_errors_are_collected() {
    let (_, _, resolution) = resolve_source("return; break; { var a = a; }");

    assert_eq!(resolution.errors.len(), 3);
}
