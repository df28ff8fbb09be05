//! Lexical analysis for Viper source files.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Keywords, identifiers, number and string literals
//! - Multi-character operators with greedy longest-match lookahead
//! - Line tracking for diagnostics
//! - Eliding `//` and `/* */` comments and whitespace
//!
//! Malformed input never stops the scan: it becomes an `Illegal` token plus
//! a recorded diagnostic.

pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;
