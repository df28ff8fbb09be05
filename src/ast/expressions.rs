use crate::tokenizer::tokens::TokenKind;

use super::ast::NodeId;

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
}

// COMPLEX

/// A variable reference, optionally indexed: `name` or `name[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
    pub index: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<NodeId>,
}

/// `object.member`, where `member` is itself an identifier, call or member access.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: NodeId,
    pub member: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: TokenKind,
    pub right_expr: NodeId,
}

/// Covers assignment and compound assignment as well as arithmetic,
/// logical and comparison operators.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: NodeId,
    pub operator: TokenKind,
    pub right: NodeId,
}
