//! Diagnostics for the front end.
//!
//! Lexical and syntax problems are collected as values rather than raised,
//! so a single pass over a file can report every problem it finds.

pub mod errors;

#[cfg(test)]
mod tests;
