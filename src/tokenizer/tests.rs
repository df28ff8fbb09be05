//! Unit tests for the tokenizer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers, floats, malformed numbers)
//! - String literals
//! - Operators with multi-character lookahead
//! - Comments and line tracking
//! - Error cases

use crate::{errors::errors::ErrorCategory, SourceFile};

use super::{
    tokenizer::{tokenize, Tokenizer},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

fn lex(source: &str) -> Vec<Token> {
    let (tokens, _) = tokenize(&SourceFile::new("test.viper", source));
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|token| token.kind).collect()
}

const OPERATORS: &[(&str, TokenKind)] = &[
    (";", TokenKind::Semicolon),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
    (":", TokenKind::Colon),
    ("::", TokenKind::DoubleColon),
    ("=", TokenKind::Assignment),
    ("==", TokenKind::Equals),
    ("!", TokenKind::Bang),
    ("!=", TokenKind::NotEquals),
    ("+", TokenKind::Plus),
    ("+=", TokenKind::PlusEquals),
    ("-", TokenKind::Dash),
    ("-=", TokenKind::MinusEquals),
    ("*", TokenKind::Star),
    ("*=", TokenKind::StarEquals),
    ("/", TokenKind::Slash),
    ("/=", TokenKind::SlashEquals),
    ("%", TokenKind::Percent),
    ("%=", TokenKind::PercentEquals),
    ("<", TokenKind::Less),
    ("<=", TokenKind::LessEquals),
    ("<<", TokenKind::LeftShift),
    ("<<=", TokenKind::LeftShiftEquals),
    (">", TokenKind::Greater),
    (">=", TokenKind::GreaterEquals),
    (">>", TokenKind::RightShift),
    (">>=", TokenKind::RightShiftEquals),
    ("&", TokenKind::Ampersand),
    ("&=", TokenKind::AndEquals),
    ("&&", TokenKind::And),
    ("|", TokenKind::Pipe),
    ("|=", TokenKind::OrEquals),
    ("||", TokenKind::Or),
    ("^", TokenKind::Caret),
    ("^=", TokenKind::XorEquals),
    ("~", TokenKind::Tilde),
    ("~=", TokenKind::TildeEquals),
];

#[test]
fn test_tokenize_every_operator_alone() {
    for (text, kind) in OPERATORS {
        let tokens = lex(text);

        assert_eq!(tokens.len(), 2, "{:?} should be one token plus EOF", text);
        assert_eq!(tokens[0].kind, *kind, "kind of {:?}", text);
        assert_eq!(tokens[0].text, *text);
        assert_eq!(kind.symbol(), Some(*text));
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_longest_match() {
    assert_eq!(
        kinds("<<= < <= << >>= >> &&& |||"),
        vec![
            TokenKind::LeftShiftEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::LeftShift,
            TokenKind::RightShiftEquals,
            TokenKind::RightShift,
            TokenKind::And,
            TokenKind::Ampersand,
            TokenKind::Or,
            TokenKind::Pipe,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_adjacent_operators() {
    assert_eq!(
        kinds("a<<=b::c"),
        vec![
            TokenKind::Identifier,
            TokenKind::LeftShiftEquals,
            TokenKind::Identifier,
            TokenKind::DoubleColon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    for (text, kind) in RESERVED_LOOKUP.iter() {
        let tokens = lex(text);

        assert_eq!(tokens[0].kind, *kind);
        assert_eq!(tokens[0].text, *text);
        assert!(kind.is_keyword());
    }

    assert_eq!(
        kinds("proc define let return struct enum module void for while do if elif else true false"),
        vec![
            TokenKind::Proc,
            TokenKind::Define,
            TokenKind::Let,
            TokenKind::Return,
            TokenKind::Struct,
            TokenKind::Enum,
            TokenKind::Module,
            TokenKind::Void,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::True,
            TokenKind::False,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo _bar baz_123 Letter lets iff i32 const");

    for token in &tokens[..8] {
        assert_eq!(token.kind, TokenKind::Identifier, "{:?}", token.text);
    }
    assert_eq!(tokens[0].text, "foo");
    assert_eq!(tokens[1].text, "_bar");
    assert_eq!(tokens[2].text, "baz_123");
    assert_eq!(tokens[4].text, "lets");
    assert_eq!(tokens[6].text, "i32");
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("42 3.14 0 100. 7");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].text, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].text, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].text, "100.");
    assert_eq!(tokens[4].text, "7");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_malformed_number() {
    let (tokens, errors) = tokenize(&SourceFile::new("test.viper", "let x = 1.2.3;"));

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].text, "1.2.3");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "MalformedNumber");
    assert_eq!(errors[0].get_category(), ErrorCategory::Lexical);
}

#[test]
fn test_tokenize_strings() {
    let tokens = lex(r#""hello" "two words" """#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "hello");
    assert_eq!(tokens[1].text, "two words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].text, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_is_raw() {
    let tokens = lex(r#""a\nb""#);

    assert_eq!(tokens[0].text, r"a\nb");
}

#[test]
fn test_tokenize_unterminated_string() {
    let (tokens, errors) = tokenize(&SourceFile::new("test.viper", "\"never closed"));

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].text, "never closed");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
    assert_eq!(errors[0].get_error_name(), "UnterminatedString");
}

#[test]
fn test_tokenize_comments_are_elided() {
    assert_eq!(kinds("// comment\nlet"), kinds("let"));
    assert_eq!(kinds("/* block\n comment */let"), kinds("let"));
    assert_eq!(
        kinds("a /* x */ / b // trailing"),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_unterminated_block_comment() {
    let (tokens, errors) = tokenize(&SourceFile::new("test.viper", "let /* open"));

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
    assert_eq!(errors[0].get_error_name(), "UnterminatedComment");
}

#[test]
fn test_tokenize_illegal_character_continues() {
    let (tokens, errors) = tokenize(&SourceFile::new("test.viper", "a @ b $"));

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Illegal,
            TokenKind::Identifier,
            TokenKind::Illegal,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].text, "@");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_error_name(), "IllegalCharacter");
}

#[test]
fn test_tokenize_line_numbers() {
    let tokens = lex("let\n\nx\r\n= /* one\ntwo */ 5 // end\n;");

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 3);
    assert_eq!(tokens[2].line, 4);
    assert_eq!(tokens[3].line, 5);
    assert_eq!(tokens[4].line, 6);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
    assert_eq!(tokens[5].line, 6);

    for pair in tokens.windows(2) {
        assert!(pair[0].line <= pair[1].line);
    }
}

#[test]
fn test_next_token_is_pull_based() {
    let file = SourceFile::new("test.viper", "let x");
    let mut tokenizer = Tokenizer::new(&file);

    assert_eq!(tokenizer.next_token().kind, TokenKind::Let);
    assert_eq!(tokenizer.next_token().kind, TokenKind::Identifier);
    assert_eq!(tokenizer.next_token().kind, TokenKind::EOF);
    assert_eq!(tokenizer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_main_procedure() {
    assert_eq!(
        kinds("proc main(): i32 {   let x: u32 = 1;   return 0;}"),
        vec![
            TokenKind::Proc,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::OpenCurly,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Return,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}
