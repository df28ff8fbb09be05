//! Parser module for building the arena-backed syntax tree.
//!
//! The parser pulls tokens from the tokenizer with one token of lookahead
//! and handles:
//!
//! - Top-level items (procedures, structs, `let` declarations)
//! - Statements (declarations, control flow, nested blocks)
//! - Expressions by precedence climbing over a binding power table
//! - Data type names
//! - Error recovery: failed sub-parses become `Invalid` nodes

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
