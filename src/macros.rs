//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed punctuation
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The source text the token was scanned from
/// * `$literal` - The LiteralValue carried by the token
/// * `$line` - The source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, String::from("+"), LiteralValue::Nil, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
        }
    };
}

/// Creates a lexer handler for a punctuation pattern.
///
/// The generated handler pushes a token of the given kind carrying a `Nil`
/// literal and advances past the matched text.
///
/// # Example
///
/// ```ignore
/// pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let line = lexer.line;
            lexer.push(MK_TOKEN!($kind, String::from(matched), LiteralValue::Nil, line));
            lexer.advance_n(matched.len());
        }
    };
}
