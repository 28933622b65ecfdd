use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use super::literals::LiteralValue;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        // Language
        map.insert("print", TokenKind::Print);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("fun", TokenKind::Fun);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("nil", TokenKind::Nil);

        // Assembler directives
        map.insert("const", TokenKind::Const);
        map.insert("import", TokenKind::Import);
        map.insert("code", TokenKind::Code);
        map.insert("alignTo", TokenKind::AlignTo);
        map.insert("global", TokenKind::Global);
        map.insert("at", TokenKind::At);
        map.insert("as", TokenKind::As);
        map.insert("use", TokenKind::Use);
        map.insert("readOnly", TokenKind::ReadOnly);
        map.insert("byte", TokenKind::Byte);
        map.insert("half", TokenKind::Half);
        map.insert("word", TokenKind::Word);
        map.insert("data", TokenKind::Data);
        map.insert("int", TokenKind::Int);
        map.insert("hi", TokenKind::Hi);
        map.insert("lo", TokenKind::Lo);

        // RISC-V instructions. `and` and `or` double as the logical operators.
        map.insert("add", TokenKind::Add);
        map.insert("sub", TokenKind::Sub);
        map.insert("xor", TokenKind::Xor);
        map.insert("or", TokenKind::Or);
        map.insert("and", TokenKind::And);
        map.insert("sll", TokenKind::Sll);
        map.insert("srl", TokenKind::Srl);
        map.insert("sra", TokenKind::Sra);
        map.insert("slt", TokenKind::Slt);
        map.insert("sltu", TokenKind::Sltu);
        map.insert("addi", TokenKind::Addi);
        map.insert("xori", TokenKind::Xori);
        map.insert("ori", TokenKind::Ori);
        map.insert("andi", TokenKind::Andi);
        map.insert("slli", TokenKind::Slli);
        map.insert("srli", TokenKind::Srli);
        map.insert("srai", TokenKind::Srai);
        map.insert("slti", TokenKind::Slti);
        map.insert("sltiu", TokenKind::Sltiu);
        map.insert("lb", TokenKind::Lb);
        map.insert("lh", TokenKind::Lh);
        map.insert("lw", TokenKind::Lw);
        map.insert("lbu", TokenKind::Lbu);
        map.insert("lhu", TokenKind::Lhu);
        map.insert("sb", TokenKind::Sb);
        map.insert("sh", TokenKind::Sh);
        map.insert("sw", TokenKind::Sw);
        map.insert("beq", TokenKind::Beq);
        map.insert("bne", TokenKind::Bne);
        map.insert("blt", TokenKind::Blt);
        map.insert("bge", TokenKind::Bge);
        map.insert("bltu", TokenKind::Bltu);
        map.insert("bgeu", TokenKind::Bgeu);
        map.insert("jal", TokenKind::Jal);
        map.insert("jalr", TokenKind::Jalr);
        map.insert("lui", TokenKind::Lui);
        map.insert("auipc", TokenKind::Auipc);
        map.insert("ecall", TokenKind::Ecall);
        map.insert("ebreak", TokenKind::Ebreak);

        // RISC-V pseudo instructions
        map.insert("la", TokenKind::La);
        map.insert("nop", TokenKind::Nop);
        map.insert("li", TokenKind::Li);
        map.insert("mv", TokenKind::Mv);
        map.insert("not", TokenKind::NotPseudo);
        map.insert("neg", TokenKind::Neg);
        map.insert("negw", TokenKind::Negw);
        map.insert("sext", TokenKind::Sext);
        map.insert("seqz", TokenKind::Seqz);
        map.insert("snez", TokenKind::Snez);
        map.insert("sltz", TokenKind::Sltz);
        map.insert("sgtz", TokenKind::Sgtz);
        map.insert("beqz", TokenKind::Beqz);
        map.insert("bnez", TokenKind::Bnez);
        map.insert("blez", TokenKind::Blez);
        map.insert("bgez", TokenKind::Bgez);
        map.insert("bltz", TokenKind::Bltz);
        map.insert("bgtz", TokenKind::Bgtz);
        map.insert("bgt", TokenKind::Bgt);
        map.insert("ble", TokenKind::Ble);
        map.insert("bgtu", TokenKind::Bgtu);
        map.insert("bleu", TokenKind::Bleu);
        map.insert("j", TokenKind::J);
        map.insert("ret", TokenKind::Ret);
        map.insert("call", TokenKind::Call);
        map.insert("tail", TokenKind::Tail);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Number,
    String,
    Char,
    Hex,
    Binary,
    Identifier,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
    Dot,
    Dash,
    Plus,
    Slash,
    Star,
    Percent,

    Not,        // !
    NotEquals,  // !=
    Assignment, // =
    Equals,     // ==
    Greater,
    GreaterEquals,
    Less,
    LessEquals,

    // Reserved
    True,
    False,
    Nil,
    Print,
    If,
    Else,
    Var,
    While,
    For,
    Break,
    Continue,
    Fun,
    Return,

    // Directives
    Const,
    Import,
    Code,
    AlignTo,
    Global,
    At,
    As,
    Use,
    ReadOnly,
    Byte,
    Half,
    Word,
    Data,
    Int,
    Hi,
    Lo,

    // RISC-V instructions
    Add,
    Sub,
    Xor,
    Or,
    And,
    Sll,
    Srl,
    Sra,
    Slt,
    Sltu,
    Addi,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Slti,
    Sltiu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Jal,
    Jalr,
    Lui,
    Auipc,
    Ecall,
    Ebreak,

    // RISC-V pseudo instructions
    La,
    Nop,
    Li,
    Mv,
    NotPseudo,
    Neg,
    Negw,
    Sext,
    Seqz,
    Snez,
    Sltz,
    Sgtz,
    Beqz,
    Bnez,
    Blez,
    Bgez,
    Bltz,
    Bgtz,
    Bgt,
    Ble,
    Bgtu,
    Bleu,
    J,
    Ret,
    Call,
    Tail,
}

impl TokenKind {
    /// Tokens the parser may resynchronize on after a syntax error.
    ///
    /// Covers the statement keywords plus every reserved directive and
    /// RISC-V mnemonic.
    pub fn is_statement_boundary(&self) -> bool {
        matches!(
            self,
            TokenKind::Print
                | TokenKind::If
                | TokenKind::Var
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Fun
                | TokenKind::Return
        ) || self.is_reserved_for_assembly()
    }

    /// Directive and mnemonic keywords that the evaluator does not interpret yet.
    pub fn is_reserved_for_assembly(&self) -> bool {
        (*self as u16) >= (TokenKind::Const as u16) && (*self as u16) <= (TokenKind::Tail as u16)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: LiteralValue,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ kind: {}, lexeme: '{}', literal: {}, line: {} }}",
            self.kind, self.lexeme, self.literal, self.line
        )
    }
}
