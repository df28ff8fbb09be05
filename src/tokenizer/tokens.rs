use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("define", TokenKind::Define);
        map.insert("proc", TokenKind::Proc);
        map.insert("return", TokenKind::Return);
        map.insert("struct", TokenKind::Struct);
        map.insert("enum", TokenKind::Enum);
        map.insert("module", TokenKind::Module);
        map.insert("void", TokenKind::Void);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,
    Identifier,

    // Literals
    Integer,
    Float,
    String,

    // Reserved
    Let,
    Define,
    Proc,
    Return,
    Struct,
    Enum,
    Module,
    Void,
    For,
    While,
    Do,
    If,
    Elif,
    Else,
    True,
    False,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Dot,
    Colon,
    DoubleColon,

    Assignment, // =
    Equals,     // ==
    Bang,       // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    LeftShift,
    RightShift,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Ampersand,
    Pipe,
    Caret,
    Tilde,

    And, // &&
    Or,  // ||

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    LeftShiftEquals,
    RightShiftEquals,
    AndEquals,
    OrEquals,
    XorEquals,
    TildeEquals,
}

impl TokenKind {
    /// Source spelling of fixed-text kinds, `None` for kinds whose text varies.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Illegal
            | TokenKind::EOF
            | TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::String => return None,
            TokenKind::Let => "let",
            TokenKind::Define => "define",
            TokenKind::Proc => "proc",
            TokenKind::Return => "return",
            TokenKind::Struct => "struct",
            TokenKind::Enum => "enum",
            TokenKind::Module => "module",
            TokenKind::Void => "void",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Bang => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::LeftShift => "<<",
            TokenKind::RightShift => ">>",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::StarEquals => "*=",
            TokenKind::SlashEquals => "/=",
            TokenKind::PercentEquals => "%=",
            TokenKind::LeftShiftEquals => "<<=",
            TokenKind::RightShiftEquals => ">>=",
            TokenKind::AndEquals => "&=",
            TokenKind::OrEquals => "|=",
            TokenKind::XorEquals => "^=",
            TokenKind::TildeEquals => "~=",
        };

        Some(symbol)
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "`{}`", symbol),
            None => match self {
                TokenKind::Illegal => write!(f, "illegal token"),
                TokenKind::EOF => write!(f, "end of file"),
                TokenKind::Identifier => write!(f, "identifier"),
                TokenKind::Integer => write!(f, "integer literal"),
                TokenKind::Float => write!(f, "float literal"),
                _ => write!(f, "string literal"),
            },
        }
    }
}

/// A classified lexical unit. `text` holds the exact source slice, except for
/// string literals, which drop the surrounding quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4} {:?} {:?}", self.line, self.kind, self.text)
    }
}
