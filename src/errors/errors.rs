use std::fmt::Display;

use thiserror::Error;

use crate::{tokenizer::tokens::TokenKind, Position};

/// A diagnostic produced while tokenizing or parsing one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. }
            | ErrorImpl::MalformedNumber { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::UnterminatedComment => ErrorCategory::Lexical,
            _ => ErrorCategory::Syntax,
        }
    }

    /// Stable name of the diagnostic kind.
    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedDataType { .. } => "ExpectedDataType",
            ErrorImpl::ExpectedStructMember { .. } => "ExpectedStructMember",
            ErrorImpl::ExpectedTopLevelItem { .. } => "ExpectedTopLevelItem",
            ErrorImpl::MissingComma { .. } => "MissingComma",
            ErrorImpl::DanglingElseClause { .. } => "DanglingElseClause",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { literal } => ErrorTip::Suggestion(format!(
                "`{}` has more than one decimal point",
                literal
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add a closing `\"`"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("add a closing `*/`"))
            }
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                ..
            } => ErrorTip::Suggestion(String::from("did you miss a semicolon?")),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::ExpectedExpression { found, .. } => ErrorTip::Suggestion(format!(
                "an expression cannot start with {}",
                found
            )),
            ErrorImpl::ExpectedDataType { .. } => ErrorTip::Suggestion(String::from(
                "types are written as a name, e.g. `i32` or `void`",
            )),
            ErrorImpl::ExpectedStructMember { .. } => ErrorTip::Suggestion(String::from(
                "struct members are fields (`name :: type;`) or procedures",
            )),
            ErrorImpl::ExpectedTopLevelItem { .. } => ErrorTip::Suggestion(String::from(
                "only procedures, structs and `let` declarations may appear at the top level",
            )),
            ErrorImpl::MissingComma { .. } => {
                ErrorTip::Suggestion(String::from("separate list items with `,`"))
            }
            ErrorImpl::DanglingElseClause { clause } => ErrorTip::Suggestion(format!(
                "{} must follow an `if` or `elif` body",
                clause
            )),
            ErrorImpl::NumberParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the construct into smaller procedures or temporaries",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.position.1, self.position.0, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("malformed number literal {literal:?}")]
    MalformedNumber { literal: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("expected {expected}, found {found} {text:?}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        text: String,
    },
    #[error("expected expression, found {found} {text:?}")]
    ExpectedExpression { found: TokenKind, text: String },
    #[error("expected data type, found {found} {text:?}")]
    ExpectedDataType { found: TokenKind, text: String },
    #[error("expected struct field or procedure, found {found} {text:?}")]
    ExpectedStructMember { found: TokenKind, text: String },
    #[error("expected procedure, struct or `let`, found {found} {text:?}")]
    ExpectedTopLevelItem { found: TokenKind, text: String },
    #[error("expected `,` between list items, found {found}")]
    MissingComma { found: TokenKind },
    #[error("{clause} clause without a preceding `if`")]
    DanglingElseClause { clause: TokenKind },
    #[error("error parsing number: {literal:?}")]
    NumberParseError { literal: String },
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
