use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    literals::LiteralValue,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(&format!("^(?:{})", source)).unwrap(),
        handler,
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[ \\t\\r]+", skip_handler),
        pattern("\\n", newline_handler),
        pattern("//[^\\n]*", skip_handler),
        pattern("\"[^\"]*\"", string_handler),
        pattern("\"[^\"]*", unterminated_string_handler),
        pattern("'[^']*'", char_handler),
        pattern("'[^']*", unterminated_char_handler),
        pattern("[0-9]+\\.[0-9]+", float_handler),
        pattern("[0-9]+x[0-9A-Za-z_]+", hex_handler),
        pattern("[0-9]+b[0-9]+", binary_handler),
        pattern("[0-9]+", integer_handler),
        pattern("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        // `<42>` style operands are reserved; the bracket is dropped.
        pattern("<[0-9]", angle_operand_handler),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        pattern(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        pattern("!", MK_DEFAULT_HANDLER!(TokenKind::Not)),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        pattern("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        pattern("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        pattern("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket)),
        pattern("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket)),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        pattern("\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot)),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        pattern("%", MK_DEFAULT_HANDLER!(TokenKind::Percent)),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    pos: usize,
    pub line: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            errors: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn error(&mut self, error: ErrorImpl) {
        self.errors.push(Error::new(error, self.line));
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn count_lines(&mut self, text: &str) {
        self.line += text.matches('\n').count() as u32;
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn newline_handler(lexer: &mut Lexer, matched: &str) {
    lexer.line += 1;
    lexer.advance_n(matched.len());
}

fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('0') => result.push('\0'),
            _ => {
                // Unknown escape, keep the backslash
                result.push(ch);
                continue;
            }
        }
        chars.next();
    }

    result
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let payload = &matched[1..matched.len() - 1];
    lexer.count_lines(matched);

    let line = lexer.line;
    lexer.push(MK_TOKEN!(
        TokenKind::String,
        String::from(matched),
        LiteralValue::String(unescape(payload)),
        line
    ));
    lexer.advance_n(matched.len());
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) {
    lexer.count_lines(matched);
    lexer.error(ErrorImpl::UnterminatedString);
    lexer.advance_n(matched.len());
}

fn char_handler(lexer: &mut Lexer, matched: &str) {
    let payload = &matched[1..matched.len() - 1];
    lexer.count_lines(matched);
    lexer.advance_n(matched.len());

    let mut chars = payload.chars();
    let literal = match (chars.next(), chars.next()) {
        (None, _) => {
            lexer.error(ErrorImpl::EmptyChar);
            return;
        }
        (Some(ch), None) => LiteralValue::Char(ch),
        (Some(_), Some(_)) => {
            lexer.error(ErrorImpl::CharTooLong {
                value: payload.to_string(),
            });
            LiteralValue::String(payload.to_string())
        }
    };

    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::Char, String::from(matched), literal, line));
}

fn unterminated_char_handler(lexer: &mut Lexer, matched: &str) {
    lexer.count_lines(matched);
    lexer.error(ErrorImpl::UnterminatedChar);
    lexer.advance_n(matched.len());
}

fn float_handler(lexer: &mut Lexer, matched: &str) {
    // The pattern only admits digits around a single dot.
    let value = matched.parse::<f64>().unwrap_or_default();

    let line = lexer.line;
    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        String::from(matched),
        LiteralValue::Number(value),
        line
    ));
    lexer.advance_n(matched.len());
}

fn hex_handler(lexer: &mut Lexer, matched: &str) {
    let digits = matched.split_once('x').map(|(_, digits)| digits).unwrap_or(matched);

    let line = lexer.line;
    lexer.push(MK_TOKEN!(
        TokenKind::Hex,
        String::from(matched),
        LiteralValue::hex(digits),
        line
    ));
    lexer.advance_n(matched.len());
}

fn binary_handler(lexer: &mut Lexer, matched: &str) {
    let digits = matched.split_once('b').map(|(_, digits)| digits).unwrap_or(matched);

    let line = lexer.line;
    lexer.push(MK_TOKEN!(
        TokenKind::Binary,
        String::from(matched),
        LiteralValue::binary(digits),
        line
    ));
    lexer.advance_n(matched.len());
}

fn integer_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());

    match matched.parse::<i32>() {
        Ok(value) => {
            let line = lexer.line;
            lexer.push(MK_TOKEN!(
                TokenKind::Integer,
                String::from(matched),
                LiteralValue::Integer(value),
                line
            ));
        }
        Err(_) => lexer.error(ErrorImpl::IntegerParseError {
            token: matched.to_string(),
        }),
    }
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let (kind, literal) = match RESERVED_LOOKUP.get(matched) {
        Some(TokenKind::True) => (TokenKind::True, LiteralValue::Boolean(true)),
        Some(TokenKind::False) => (TokenKind::False, LiteralValue::Boolean(false)),
        Some(kind) => (*kind, LiteralValue::Nil),
        None => (TokenKind::Identifier, LiteralValue::Nil),
    };

    let line = lexer.line;
    lexer.push(MK_TOKEN!(kind, String::from(matched), literal, line));
    lexer.advance_n(matched.len());
}

fn angle_operand_handler(lexer: &mut Lexer, _matched: &str) {
    lexer.advance_n(1);
}

/// Scans `source` into tokens.
///
/// Scanning never stops early: malformed input is recorded as a diagnostic
/// and the cursor moves on. The returned token list always ends with `EOF`.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, m.as_str().to_string()))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, &matched),
            None => {
                let character = lex.remainder().chars().next().unwrap_or('\0');
                lex.error(ErrorImpl::UnexpectedCharacter { character });
                lex.advance_n(character.len_utf8());
            }
        }
    }

    let line = lex.line;
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), LiteralValue::Nil, line));

    tracing::debug!(tokens = lex.tokens.len(), errors = lex.errors.len(), "scanned source");
    (lex.tokens, lex.errors)
}
