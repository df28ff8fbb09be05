use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::NodeId, errors::errors::Error, tokenizer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Binary operator precedence, loosest first. Prefix operators bind tighter
/// than every entry here.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Assignment,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Comparison,
    Shift,
    Additive,
    Multiplicative,
}

impl BindingPower {
    /// Right-associative operators fold on equal precedence as well.
    pub fn is_right_associative(&self) -> bool {
        *self == BindingPower::Assignment
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<NodeId, Error>;

lazy_static! {
    pub static ref BP_LOOKUP: BPLookup = {
        let mut map = HashMap::new();

        // Assignment and compound assignment
        map.insert(TokenKind::Assignment, BindingPower::Assignment);
        map.insert(TokenKind::PlusEquals, BindingPower::Assignment);
        map.insert(TokenKind::MinusEquals, BindingPower::Assignment);
        map.insert(TokenKind::StarEquals, BindingPower::Assignment);
        map.insert(TokenKind::SlashEquals, BindingPower::Assignment);
        map.insert(TokenKind::PercentEquals, BindingPower::Assignment);
        map.insert(TokenKind::LeftShiftEquals, BindingPower::Assignment);
        map.insert(TokenKind::RightShiftEquals, BindingPower::Assignment);
        map.insert(TokenKind::AndEquals, BindingPower::Assignment);
        map.insert(TokenKind::OrEquals, BindingPower::Assignment);
        map.insert(TokenKind::XorEquals, BindingPower::Assignment);
        map.insert(TokenKind::TildeEquals, BindingPower::Assignment);

        // Logical
        map.insert(TokenKind::Or, BindingPower::LogicalOr);
        map.insert(TokenKind::And, BindingPower::LogicalAnd);

        // Bitwise
        map.insert(TokenKind::Pipe, BindingPower::BitwiseOr);
        map.insert(TokenKind::Caret, BindingPower::BitwiseXor);
        map.insert(TokenKind::Ampersand, BindingPower::BitwiseAnd);

        // Comparison
        map.insert(TokenKind::Equals, BindingPower::Comparison);
        map.insert(TokenKind::NotEquals, BindingPower::Comparison);
        map.insert(TokenKind::Less, BindingPower::Comparison);
        map.insert(TokenKind::LessEquals, BindingPower::Comparison);
        map.insert(TokenKind::Greater, BindingPower::Comparison);
        map.insert(TokenKind::GreaterEquals, BindingPower::Comparison);

        map.insert(TokenKind::LeftShift, BindingPower::Shift);
        map.insert(TokenKind::RightShift, BindingPower::Shift);

        // Additive and multiplicative
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map.insert(TokenKind::Percent, BindingPower::Multiplicative);

        map
    };

    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::Let, parse_var_decl_stmt);
        map.insert(TokenKind::Return, parse_return_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::Elif, parse_dangling_clause);
        map.insert(TokenKind::Else, parse_dangling_clause);
        map.insert(TokenKind::While, parse_while_stmt);
        map.insert(TokenKind::Do, parse_do_while_stmt);
        map.insert(TokenKind::For, parse_for_stmt);
        map.insert(TokenKind::OpenCurly, parse_block_stmt);
        map
    };
}

/// Precedence of `kind` as a binary operator, `None` when it is not one.
pub fn binding_power(kind: TokenKind) -> Option<BindingPower> {
    BP_LOOKUP.get(&kind).copied()
}

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
