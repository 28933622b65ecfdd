use std::fmt::Display;

/// Value attached to a token by the scanner.
///
/// Hex and binary literals keep their digit text so the code generator can
/// decide on the encoding later.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Char(char),
    Integer(i32),
    Number(f64),
    Boolean(bool),
    Nil,
    Hex(String),
    Binary(String),
}

impl LiteralValue {
    /// Builds a hex literal from the digits following `x`, zero-padded to a
    /// byte, half word or word width.
    pub fn hex(digits: &str) -> Self {
        let width = match digits.len() {
            0..=2 => 2,
            3..=4 => 4,
            _ => 8,
        };

        LiteralValue::Hex(format!("{:0>width$}", digits, width = width))
    }

    pub fn binary(digits: &str) -> Self {
        LiteralValue::Binary(digits.to_string())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            LiteralValue::String(_) => "string",
            LiteralValue::Char(_) => "char",
            LiteralValue::Integer(_) => "integer",
            LiteralValue::Number(_) => "number",
            LiteralValue::Boolean(_) => "boolean",
            LiteralValue::Nil => "nil",
            LiteralValue::Hex(_) => "hex",
            LiteralValue::Binary(_) => "binary",
        }
    }

    /// Only `nil` and `false` are falsey.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, LiteralValue::Nil | LiteralValue::Boolean(false))
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::String(value) => write!(f, "{}", value),
            LiteralValue::Char(value) => write!(f, "{}", value),
            LiteralValue::Integer(value) => write!(f, "{}", value),
            LiteralValue::Number(value) => write!(f, "{:?}", value),
            LiteralValue::Boolean(value) => write!(f, "{}", value),
            LiteralValue::Nil => write!(f, "nil"),
            LiteralValue::Hex(value) => write!(f, "0x{}", value),
            LiteralValue::Binary(value) => write!(f, "0b{}", value),
        }
    }
}
