//! Parser state and the top-level parsing loop.
//!
//! The parser pulls tokens from a [`Tokenizer`] on demand and keeps exactly
//! one token of lookahead beyond the current one. Expressions are parsed by
//! precedence climbing (see `expr.rs`), statements by recursive descent
//! dispatched through the statement lookup table.
//!
//! Parsing never stops at the first error. Every failed sub-parse is
//! recorded and replaced by an `Invalid` node, so the resulting tree keeps
//! its shape and the caller receives all diagnostics at once.

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::ast::{Ast, NodeId, NodeKind},
    errors::errors::{Error, ErrorImpl},
    tokenizer::{
        tokenizer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    Position, SourceFile, MK_TOKEN,
};

use super::stmt::{parse_proc_decl_stmt, parse_struct_decl_stmt, parse_var_decl_stmt};

/// How deep statements and expressions may nest before the parser gives up
/// on the construct.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Everything produced by parsing one file: the tree and every diagnostic,
/// lexical and syntactic, in the order they were encountered.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub ast: Ast,
    pub errors: Vec<Error>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct Parser<'t> {
    tokenizer: &'t mut Tokenizer,
    current_token: Token,
    peek_token: Token,
    file: Rc<String>,
    ast: Ast,
    errors: Vec<Error>,
    depth: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser and primes the current and peek tokens.
    pub fn new(tokenizer: &'t mut Tokenizer) -> Self {
        let current_token = tokenizer.next_token();
        let peek_token = tokenizer.next_token();
        let file = Rc::clone(tokenizer.file());
        let errors = tokenizer.take_errors();

        Parser {
            tokenizer,
            current_token,
            peek_token,
            file,
            ast: Ast::new(),
            errors,
            depth: 0,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn is_at_end(&self) -> bool {
        self.current_token.kind == TokenKind::EOF
    }

    /// Moves to the next token and returns the one just left behind. Lexical
    /// errors raised while reading ahead are collected here, so they are
    /// ordered before any syntax error reported at the same token.
    pub fn advance(&mut self) -> Token {
        let next = self.tokenizer.next_token();
        let peek = std::mem::replace(&mut self.peek_token, next);
        let previous = std::mem::replace(&mut self.current_token, peek);
        self.errors.extend(self.tokenizer.take_errors());
        previous
    }

    /// Consumes the current token if it has the expected kind. On a mismatch
    /// the offending token is consumed as well, unless it is EOF or a `}`
    /// that an enclosing block still needs.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token.kind == expected_kind {
            return Ok(self.advance());
        }

        let error = self.unexpected(expected_kind);
        if !matches!(
            self.current_token.kind,
            TokenKind::EOF | TokenKind::CloseCurly
        ) {
            self.advance();
        }

        Err(error)
    }

    /// Like `expect`, but records the error and hands back an empty token of
    /// the expected kind so the caller can carry on.
    pub fn eat(&mut self, expected_kind: TokenKind) -> Token {
        let line = self.current_token.line;

        match self.expect(expected_kind) {
            Ok(token) => token,
            Err(error) => {
                self.record(error);
                MK_TOKEN!(expected_kind, "", line)
            }
        }
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub fn unexpected(&self, expected_kind: TokenKind) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.current_token.kind,
                text: self.current_token.text.clone(),
            },
            self.get_position(),
        )
    }

    pub fn record(&mut self, error: Error) {
        debug!(error = %error, "syntax error");
        self.errors.push(error);
    }

    /// Unwraps a sub-parse, turning a failure into a recorded error and an
    /// `Invalid` node at the current token.
    pub fn recover(&mut self, result: Result<NodeId, Error>) -> NodeId {
        match result {
            Ok(id) => id,
            Err(error) => {
                self.record(error);
                let token = self.current_token.clone();
                self.alloc(NodeKind::Invalid, token)
            }
        }
    }

    /// Runs `parse_fn` one nesting level deeper. Past `MAX_NESTING_DEPTH` the
    /// construct at the current token is skipped and `NestingTooDeep` is
    /// returned instead.
    pub fn nested<F>(&mut self, parse_fn: F) -> Result<NodeId, Error>
    where
        F: FnOnce(&mut Self) -> Result<NodeId, Error>,
    {
        if self.depth >= MAX_NESTING_DEPTH {
            let error = Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            );
            if !matches!(
                self.current_token.kind,
                TokenKind::EOF | TokenKind::CloseCurly
            ) {
                self.skip_nested();
            }

            return Err(error);
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }

    /// Consumes the current token and, if it opens a bracket, everything up
    /// to the matching close. Otherwise stops after the next `;` or before a
    /// closing bracket of an enclosing group.
    fn skip_nested(&mut self) {
        let mut balance = 0usize;

        loop {
            match self.advance().kind {
                TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::OpenCurly => {
                    balance += 1;
                }
                TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseCurly => {
                    balance = balance.saturating_sub(1);
                    if balance == 0 {
                        return;
                    }
                }
                TokenKind::Semicolon if balance == 0 => return,
                _ => {}
            }

            let at_close = matches!(
                self.current_token.kind,
                TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseCurly
            );
            if self.is_at_end() || (balance == 0 && at_close) {
                return;
            }
        }
    }

    pub fn alloc(&mut self, kind: NodeKind, token: Token) -> NodeId {
        self.ast.alloc(kind, token)
    }

    pub fn get_position(&self) -> Position {
        Position(self.current_token.line, Rc::clone(&self.file))
    }

    /// Parses top-level items until EOF. Each contiguous run of tokens that
    /// cannot start an item is reported once and skipped.
    pub fn parse_program(&mut self) {
        let mut skipping = false;

        while !self.is_at_end() {
            let item = match self.current_token_kind() {
                TokenKind::Proc | TokenKind::Define => parse_proc_decl_stmt(self),
                TokenKind::Struct => parse_struct_decl_stmt(self),
                TokenKind::Let => parse_var_decl_stmt(self),
                found => {
                    if !skipping {
                        let error = Error::new(
                            ErrorImpl::ExpectedTopLevelItem {
                                found,
                                text: self.current_token.text.clone(),
                            },
                            self.get_position(),
                        );
                        self.record(error);
                    }

                    skipping = true;
                    self.advance();
                    continue;
                }
            };

            skipping = false;
            let id = self.recover(item);
            self.ast.push_root(id);
        }
    }

    pub fn finish(self) -> ParseResult {
        ParseResult {
            ast: self.ast,
            errors: self.errors,
        }
    }
}

/// Tokenizes and parses a whole file.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file.name))]
pub fn parse(file: &SourceFile) -> ParseResult {
    let mut tokenizer = Tokenizer::new(file);
    let mut parser = Parser::new(&mut tokenizer);
    parser.parse_program();

    let result = parser.finish();
    debug!(
        nodes = result.ast.len(),
        errors = result.errors.len(),
        "parsed"
    );

    result
}
