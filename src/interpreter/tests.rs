//! Unit tests for the interpreter.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::{
    errors::errors::Error,
    lexer::{
        lexer::tokenize,
        literals::LiteralValue,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
    resolver::resolver::resolve,
};

use super::{
    environment::{assign_at, get_at, Environment},
    interpreter::{Interpreter, MAX_CALL_DEPTH},
    operators,
    stdlib::natives,
    value::Value,
};

/// Runs `source` through the whole pipeline and returns what it printed.
fn run(source: &str) -> Result<String, Error> {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    let statements = parse(tokens).expect("source should parse");

    let mut buffer = Vec::new();
    {
        let mut interpreter = Interpreter::new(&mut buffer);
        let resolution = resolve(&statements, &mut interpreter);
        assert!(resolution.is_ok(), "unexpected resolution errors: {:?}", resolution.errors);
        interpreter.interpret(&statements)?;
    }

    Ok(String::from_utf8(buffer).expect("output should be utf-8"))
}

fn identifier(name: &str) -> Token {
    Token {
        kind: TokenKind::Identifier,
        lexeme: name.to_string(),
        literal: LiteralValue::Nil,
        line: 1,
    }
}

fn operator(kind: TokenKind, lexeme: &str) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
        literal: LiteralValue::Nil,
        line: 1,
    }
}

fn integer(value: i32) -> Value {
    Value::Literal(LiteralValue::Integer(value))
}

fn number(value: f64) -> Value {
    Value::Literal(LiteralValue::Number(value))
}

fn string(value: &str) -> Value {
    Value::Literal(LiteralValue::String(value.to_string()))
}

#[test]
fn test_environment_define_get_assign() {
    let globals = Environment::new();
    let local = Environment::new_enclosing(Rc::clone(&globals));
    let a = identifier("a");

    globals.borrow_mut().define(&a, integer(1)).unwrap();
    assert_eq!(local.borrow().get(&a).unwrap().to_string(), "1");

    local.borrow_mut().assign(&a, integer(2)).unwrap();
    assert_eq!(globals.borrow().get(&a).unwrap().to_string(), "2");
}

#[test]
fn test_environment_redefinition_in_same_frame_fails() {
    let globals = Environment::new();
    let a = identifier("a");

    globals.borrow_mut().define(&a, integer(1)).unwrap();
    let error = globals.borrow_mut().define(&a, integer(2)).unwrap_err();

    assert_eq!(error.get_error_name(), "VariableAlreadyDefined");
}

#[test]
fn test_environment_undefined_variable() {
    let globals = Environment::new();
    let error = globals.borrow().get(&identifier("missing")).unwrap_err();

    assert_eq!(error.message(), "Undefined variable 'missing'.");
    assert_eq!(
        globals
            .borrow_mut()
            .assign(&identifier("missing"), integer(1))
            .unwrap_err()
            .get_error_name(),
        "VariableNotDeclared"
    );
}

#[test]
fn test_environment_distance_access() {
    let globals = Environment::new();
    let middle = Environment::new_enclosing(Rc::clone(&globals));
    let inner = Environment::new_enclosing(Rc::clone(&middle));
    let a = identifier("a");

    middle.borrow_mut().define(&a, integer(1)).unwrap();
    assign_at(&inner, 1, &a, integer(5)).unwrap();

    assert_eq!(get_at(&inner, 1, &a).unwrap().to_string(), "5");
    assert!(get_at(&inner, 0, &a).is_err());
}

#[test]
fn test_operators_arithmetic() {
    let plus = operator(TokenKind::Plus, "+");
    let star = operator(TokenKind::Star, "*");
    let slash = operator(TokenKind::Slash, "/");

    assert_eq!(operators::binary(&plus, integer(1), integer(2)).unwrap().to_string(), "3");
    assert_eq!(operators::binary(&plus, integer(1), number(2.0)).unwrap().to_string(), "3.0");
    assert_eq!(operators::binary(&plus, string("a"), string("b")).unwrap().to_string(), "ab");
    assert_eq!(operators::binary(&star, number(1.5), integer(2)).unwrap().to_string(), "3.0");
    assert_eq!(operators::binary(&slash, integer(7), integer(2)).unwrap().to_string(), "3.5");
}

#[test]
fn test_operators_reject_mismatched_kinds() {
    let plus = operator(TokenKind::Plus, "+");
    let less = operator(TokenKind::Less, "<");
    let dash = operator(TokenKind::Dash, "-");

    assert!(operators::binary(&plus, integer(1), string("a")).is_err());
    assert!(operators::binary(&less, integer(1), number(2.0)).is_err());
    assert!(operators::binary(&less, string("a"), string("b")).is_err());
    assert!(operators::unary(&dash, string("a")).is_err());
}

#[test]
fn test_operators_integer_overflow() {
    let plus = operator(TokenKind::Plus, "+");
    let error = operators::binary(&plus, integer(i32::MAX), integer(1)).unwrap_err();

    assert_eq!(error.get_error_name(), "IntegerOverflow");
}

#[test]
fn test_operators_equality() {
    let equals = operator(TokenKind::Equals, "==");

    let eq = |left: Value, right: Value| operators::binary(&equals, left, right).unwrap().to_string();

    assert_eq!(eq(integer(1), number(1.0)), "true");
    assert_eq!(eq(Value::nil(), Value::nil()), "true");
    assert_eq!(eq(string("a"), string("a")), "true");
    assert_eq!(eq(Value::nil(), Value::Literal(LiteralValue::Boolean(false))), "false");
    assert_eq!(eq(integer(1), string("1")), "false");
}

#[test]
fn test_unary_preserves_kind() {
    let dash = operator(TokenKind::Dash, "-");
    let not = operator(TokenKind::Not, "!");

    assert_eq!(operators::unary(&dash, integer(3)).unwrap().to_string(), "-3");
    assert_eq!(operators::unary(&dash, number(3.0)).unwrap().to_string(), "-3.0");
    assert_eq!(operators::unary(&not, integer(0)).unwrap().to_string(), "false");
    assert_eq!(operators::unary(&not, Value::nil()).unwrap().to_string(), "true");
}

#[test]
fn test_print_values() {
    let output = run("print 1; print 2.5; print \"s\"; print nil; print true; print 0x2A; print 0b101; print clock;").unwrap();

    assert_eq!(output, "1\n2.5\ns\nnil\ntrue\n0x2A\n0b101\n<native fn>\n");
}

#[test]
fn test_logical_returns_operand() {
    let output = run("print nil or \"yes\"; print 0 and 1; print false and undefined;").unwrap();

    assert_eq!(output, "yes\n1\nfalse\n");
}

#[test]
fn test_block_scoping_restores_environment() {
    let output = run("var a = 1; { var a = 2; print a; } print a;").unwrap();

    assert_eq!(output, "2\n1\n");
}

#[test]
fn test_environment_restored_after_error() {
    let mut buffer = Vec::new();
    let mut interpreter = Interpreter::new(&mut buffer);

    let (tokens, _) = tokenize("{ var a = 1; print a + \"x\"; }");
    let statements = parse(tokens).unwrap();
    resolve(&statements, &mut interpreter);

    assert!(interpreter.interpret(&statements).is_err());
    assert!(Rc::ptr_eq(&interpreter.environment, &interpreter.globals));
}

#[test]
fn test_while_break_and_continue() {
    let source = "
        var i = 0;
        while (i < 10) {
            i = i + 1;
            if (i == 2) continue;
            if (i == 5) break;
            print i;
        }
        print \"done\";";

    assert_eq!(run(source).unwrap(), "1\n3\n4\ndone\n");
}

#[test]
fn test_break_only_leaves_innermost_loop() {
    let source = "
        var outer = 0;
        while (outer < 2) {
            outer = outer + 1;
            while (true) { break; }
            print outer;
        }";

    assert_eq!(run(source).unwrap(), "1\n2\n");
}

#[test]
fn test_return_passes_through_loops() {
    let source = "
        fun first() {
            while (true) {
                while (true) { return \"found\"; }
            }
        }
        print first();";

    assert_eq!(run(source).unwrap(), "found\n");
}

#[test]
fn test_function_without_return_yields_nil() {
    assert_eq!(run("fun f() {} print f(); print f;").unwrap(), "nil\n<fn f>\n");
}

#[test]
fn test_recursion() {
    let source = "
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        print fib(10);";

    assert_eq!(run(source).unwrap(), "55\n");
}

#[test]
fn test_closures_capture_by_reference() {
    let source = "
        var x = \"before\";
        fun show() { print x; }
        x = \"after\";
        show();";

    assert_eq!(run(source).unwrap(), "after\n");
}

#[test]
fn test_calling_non_callable() {
    let error = run("var a = 1; a();").unwrap_err();

    assert_eq!(error.get_error_name(), "NotCallable");
}

#[test]
fn test_arity_mismatch_does_not_run_body() {
    let error = run("fun f(a, b) { print \"ran\"; } f(1);").unwrap_err();

    assert_eq!(error.message(), "Expected 2 arguments but got 1.");
}

#[test]
fn test_undefined_variable_at_runtime() {
    let error = run("print missing;").unwrap_err();

    assert_eq!(error.message(), "Undefined variable 'missing'.");
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_global_redefinition_is_runtime_error() {
    let error = run("var a = 1; var a = 2;").unwrap_err();

    assert_eq!(error.get_error_name(), "VariableAlreadyDefined");
}

#[test]
fn test_clock_returns_non_decreasing_numbers() {
    let clock = natives()
        .into_iter()
        .find(|native| native.name == "clock")
        .expect("clock should be a native");

    let first = (clock.function)(&[]).unwrap();
    let second = (clock.function)(&[]).unwrap();

    match (first, second) {
        (
            Value::Literal(LiteralValue::Number(first)),
            Value::Literal(LiteralValue::Number(second)),
        ) => assert!(first <= second),
        other => panic!("clock should return numbers, got {:?}", other),
    }
    assert_eq!(clock.arity, 0);
}

#[test]
fn test_operand_errors_name_found_kinds() {
    let dash = operator(TokenKind::Dash, "-");
    let error = operators::unary(&dash, string("a")).unwrap_err();

    assert_eq!(error.message(), "Operand of '-' must be a number, got string.");
}

#[test]
fn test_call_depth_limit() {
    let mut buffer = Vec::new();
    let mut interpreter = Interpreter::new(&mut buffer);

    let (tokens, _) = tokenize("fun down(n) { if (n == 0) return 0; return down(n - 1); }\ndown(100000);");
    let statements = parse(tokens).unwrap();
    resolve(&statements, &mut interpreter);

    let error = interpreter.interpret(&statements).unwrap_err();

    assert_eq!(error.get_error_name(), "StackOverflow");
    assert_eq!(error.get_line(), 1);
    assert_eq!(interpreter.depth, 0);
    assert_eq!(MAX_CALL_DEPTH, 2048);
}
