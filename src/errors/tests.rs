//! Unit tests for error handling.
//!
//! This module contains tests for error construction, categories, tips and
//! rendering.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::tokenizer::tokens::TokenKind;
use crate::{render_error, Position, SourceFile};
use std::rc::Rc;

fn at(line: u32) -> Position {
    Position(line, Rc::new("test.viper".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::IllegalCharacter { character: '@' }, at(10));

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_line(), 10);
    assert_eq!(error.get_position().1.as_str(), "test.viper");
}

#[test]
fn test_error_categories() {
    let lexical = [
        ErrorImpl::IllegalCharacter { character: '$' },
        ErrorImpl::MalformedNumber {
            literal: "1.2.3".to_string(),
        },
        ErrorImpl::UnterminatedString,
        ErrorImpl::UnterminatedComment,
    ];
    for kind in lexical {
        assert_eq!(Error::new(kind, at(1)).get_category(), ErrorCategory::Lexical);
    }

    let syntax = [
        ErrorImpl::ExpectedExpression {
            found: TokenKind::Semicolon,
            text: ";".to_string(),
        },
        ErrorImpl::MissingComma {
            found: TokenKind::Identifier,
        },
        ErrorImpl::DanglingElseClause {
            clause: TokenKind::Else,
        },
        ErrorImpl::NumberParseError {
            literal: "99999999999999999999".to_string(),
        },
        ErrorImpl::NestingTooDeep { limit: 256 },
    ];
    for kind in syntax {
        assert_eq!(Error::new(kind, at(1)).get_category(), ErrorCategory::Syntax);
    }
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Return,
            text: "return".to_string(),
        },
        at(3),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "test.viper:3: expected `;`, found `return` \"return\""
    );
    assert_eq!(error.get_tip().to_string(), "did you miss a semicolon?");
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, at(1));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "test.viper:1: nesting exceeds 256 levels");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_without_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::EOF,
            text: String::new(),
        },
        at(1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_dangling_else_message() {
    let error = Error::new(
        ErrorImpl::DanglingElseClause {
            clause: TokenKind::Elif,
        },
        at(7),
    );

    assert_eq!(error.get_kind().to_string(), "`elif` clause without a preceding `if`");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_render_error() {
    let file = SourceFile::new("main.viper", "proc main(): i32 {\n    let a: i32 = 5\n}\n");
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::CloseCurly,
            text: "}".to_string(),
        },
        Position(2, Rc::clone(&file.name)),
    );

    let rendered = render_error(&error, &file);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: UnexpectedToken (did you miss a semicolon?)"
    );
    assert_eq!(lines[1], "-> main.viper");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | let a: i32 = 5");
    assert!(lines[4].contains("expected `;`, found `}`"));
}

#[test]
fn test_render_error_past_end_of_file() {
    let file = SourceFile::new("main.viper", "let a: i32 = 1;");
    let error = Error::new(ErrorImpl::UnterminatedComment, Position(9, Rc::clone(&file.name)));

    let rendered = render_error(&error, &file);

    assert!(rendered.starts_with("Error: UnterminatedComment (add a closing `*/`)"));
    assert!(!rendered.contains("9 |"));
}
