use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, SourceFile, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9][0-9.]*").unwrap();
}

/// Marks the end of the buffer in `current_char`.
const END_OF_INPUT: char = '\0';

/// A pull-based tokenizer over one source file.
///
/// `position` is the byte index of `current_char`, `read_position` the byte
/// index of the character after it.
#[derive(Clone)]
pub struct Tokenizer {
    source: String,
    file: Rc<String>,
    position: usize,
    read_position: usize,
    current_char: char,
    line: u32,
    errors: Vec<Error>,
}

impl Tokenizer {
    pub fn new(file: &SourceFile) -> Tokenizer {
        let mut tokenizer = Tokenizer {
            source: file.content.clone(),
            file: Rc::clone(&file.name),
            position: 0,
            read_position: 0,
            current_char: END_OF_INPUT,
            line: 1,
            errors: vec![],
        };
        tokenizer.read_char();
        tokenizer
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    /// Drains the lexical diagnostics recorded since the last call.
    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    fn read_char(&mut self) {
        self.position = self.read_position;
        if self.read_position >= self.source.len() {
            self.current_char = END_OF_INPUT;
            self.read_position = self.source.len() + 1;
        } else {
            self.current_char = self.source[self.read_position..]
                .chars()
                .next()
                .unwrap_or(END_OF_INPUT);
            self.read_position += self.current_char.len_utf8();
        }
    }

    fn peek_char(&self) -> char {
        if self.read_position >= self.source.len() {
            return END_OF_INPUT;
        }

        self.source[self.read_position..]
            .chars()
            .next()
            .unwrap_or(END_OF_INPUT)
    }

    fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char, ' ' | '\t' | '\n' | '\r') && !self.at_eof() {
            if self.current_char == '\n' {
                self.line += 1;
            }
            self.read_char();
        }
    }

    fn report(&mut self, error: ErrorImpl, line: u32) {
        warn!(file = %self.file, line, "{}", error);
        self.errors
            .push(Error::new(error, Position(line, Rc::clone(&self.file))));
    }

    /// Advances until the cursor sits on the last character of a `len`-byte match.
    fn consume_match(&mut self, len: usize) -> String {
        let start = self.position;
        let end = start + len;
        while self.read_position < end {
            self.read_char();
        }

        self.source[start..end].to_string()
    }

    fn skip_single_line_comment(&mut self) {
        while self.current_char != '\n' && !self.at_eof() {
            self.read_char();
        }
    }

    /// Returns false when the buffer ends before the closing `*/`.
    fn skip_multi_line_comment(&mut self) -> bool {
        // Step over the opening `/*`
        self.read_char();
        self.read_char();

        while !self.at_eof() {
            if self.current_char == '*' && self.peek_char() == '/' {
                self.read_char();
                self.read_char();
                return true;
            }

            if self.current_char == '\n' {
                self.line += 1;
            }
            self.read_char();
        }

        false
    }

    fn read_string(&mut self, line: u32) -> Token {
        // Step over the opening quote
        self.read_char();
        let start = self.position;

        while self.current_char != '"' && !self.at_eof() {
            if self.current_char == '\n' {
                self.line += 1;
            }
            self.read_char();
        }

        let content = self.source[start..self.position.min(self.source.len())].to_string();
        if self.at_eof() {
            self.report(ErrorImpl::UnterminatedString, line);
            return MK_TOKEN!(TokenKind::Illegal, content, line);
        }

        MK_TOKEN!(TokenKind::String, content, line)
    }

    fn read_number(&mut self) -> Token {
        let len = NUMBER_PATTERN
            .find(&self.source[self.position..])
            .map_or(1, |matched| matched.end());
        let literal = self.consume_match(len);

        let kind = match literal.matches('.').count() {
            0 => TokenKind::Integer,
            1 => TokenKind::Float,
            _ => {
                self.report(
                    ErrorImpl::MalformedNumber {
                        literal: literal.clone(),
                    },
                    self.line,
                );
                TokenKind::Illegal
            }
        };

        MK_TOKEN!(kind, literal, self.line)
    }

    fn read_identifier(&mut self) -> Token {
        let len = IDENTIFIER_PATTERN
            .find(&self.source[self.position..])
            .map_or(1, |matched| matched.end());
        let value = self.consume_match(len);

        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, value, self.line)
    }

    /// Builds a one-character token, or a two-character one when the next
    /// character matches one of `extensions`.
    fn select(&mut self, single: TokenKind, extensions: &[(char, TokenKind)]) -> Token {
        let next = self.peek_char();
        for (follow, kind) in extensions {
            if next == *follow {
                let mut text = String::from(self.current_char);
                self.read_char();
                text.push(self.current_char);
                return MK_TOKEN!(*kind, text, self.line);
            }
        }

        MK_TOKEN!(single, self.current_char, self.line)
    }

    /// Handles `<`, `<=`, `<<`, `<<=` and their `>` counterparts.
    fn select_angle(
        &mut self,
        single: TokenKind,
        or_equal: TokenKind,
        shift: TokenKind,
        shift_equal: TokenKind,
    ) -> Token {
        let angle = self.current_char;
        if self.peek_char() == angle {
            self.read_char();
            if self.peek_char() == '=' {
                self.read_char();
                return MK_TOKEN!(shift_equal, format!("{0}{0}=", angle), self.line);
            }
            return MK_TOKEN!(shift, format!("{0}{0}", angle), self.line);
        }

        self.select(single, &[('=', or_equal)])
    }

    /// Scans and returns the next token. Once the buffer is exhausted every
    /// call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, "", self.line);
            }

            let token = match self.current_char {
                '/' if self.peek_char() == '/' => {
                    self.skip_single_line_comment();
                    continue;
                }
                '/' if self.peek_char() == '*' => {
                    let line = self.line;
                    if self.skip_multi_line_comment() {
                        continue;
                    }
                    self.report(ErrorImpl::UnterminatedComment, line);
                    return MK_TOKEN!(TokenKind::Illegal, "/*", line);
                }
                '/' => self.select(TokenKind::Slash, &[('=', TokenKind::SlashEquals)]),

                ';' => MK_TOKEN!(TokenKind::Semicolon, ";", self.line),
                '(' => MK_TOKEN!(TokenKind::OpenParen, "(", self.line),
                ')' => MK_TOKEN!(TokenKind::CloseParen, ")", self.line),
                '{' => MK_TOKEN!(TokenKind::OpenCurly, "{", self.line),
                '}' => MK_TOKEN!(TokenKind::CloseCurly, "}", self.line),
                '[' => MK_TOKEN!(TokenKind::OpenBracket, "[", self.line),
                ']' => MK_TOKEN!(TokenKind::CloseBracket, "]", self.line),
                ',' => MK_TOKEN!(TokenKind::Comma, ",", self.line),
                '.' => MK_TOKEN!(TokenKind::Dot, ".", self.line),

                '=' => self.select(TokenKind::Assignment, &[('=', TokenKind::Equals)]),
                '!' => self.select(TokenKind::Bang, &[('=', TokenKind::NotEquals)]),
                '+' => self.select(TokenKind::Plus, &[('=', TokenKind::PlusEquals)]),
                '-' => self.select(TokenKind::Dash, &[('=', TokenKind::MinusEquals)]),
                '*' => self.select(TokenKind::Star, &[('=', TokenKind::StarEquals)]),
                '%' => self.select(TokenKind::Percent, &[('=', TokenKind::PercentEquals)]),
                '^' => self.select(TokenKind::Caret, &[('=', TokenKind::XorEquals)]),
                '~' => self.select(TokenKind::Tilde, &[('=', TokenKind::TildeEquals)]),
                ':' => self.select(TokenKind::Colon, &[(':', TokenKind::DoubleColon)]),
                '&' => self.select(
                    TokenKind::Ampersand,
                    &[('=', TokenKind::AndEquals), ('&', TokenKind::And)],
                ),
                '|' => self.select(
                    TokenKind::Pipe,
                    &[('=', TokenKind::OrEquals), ('|', TokenKind::Or)],
                ),
                '<' => self.select_angle(
                    TokenKind::Less,
                    TokenKind::LessEquals,
                    TokenKind::LeftShift,
                    TokenKind::LeftShiftEquals,
                ),
                '>' => self.select_angle(
                    TokenKind::Greater,
                    TokenKind::GreaterEquals,
                    TokenKind::RightShift,
                    TokenKind::RightShiftEquals,
                ),

                '"' => {
                    let line = self.line;
                    self.read_string(line)
                }
                c if c.is_ascii_digit() => return self.advance_past(|t| t.read_number()),
                c if c.is_ascii_alphabetic() || c == '_' => {
                    return self.advance_past(|t| t.read_identifier())
                }
                c => {
                    self.report(ErrorImpl::IllegalCharacter { character: c }, self.line);
                    MK_TOKEN!(TokenKind::Illegal, c, self.line)
                }
            };

            self.read_char();
            return token;
        }
    }

    /// Runs a scanner that leaves the cursor on its last character, then steps past it.
    fn advance_past(&mut self, scan: impl FnOnce(&mut Self) -> Token) -> Token {
        let token = scan(self);
        self.read_char();
        token
    }
}

/// Tokenizes a whole file eagerly. The returned stream always ends with `EOF`.
#[tracing::instrument(level = "trace", skip_all, fields(file = %file.name))]
pub fn tokenize(file: &SourceFile) -> (Vec<Token>, Vec<Error>) {
    let mut tokenizer = Tokenizer::new(file);
    let mut tokens = vec![];

    loop {
        let token = tokenizer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    (tokens, tokenizer.take_errors())
}
