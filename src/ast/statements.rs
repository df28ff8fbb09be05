use crate::tokenizer::tokens::Token;

use super::ast::NodeId;

/// An ordered statement list forming one lexical scope.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: NodeId,
}

/// `let name: data_type = assigned_value;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub data_type: NodeId,
    pub assigned_value: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    If,
    Elif,
    Else,
}

/// One link of an `if`/`elif`/`else` chain. `else_clause` points at the next
/// link; an `Else` link never has a condition or a further clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalStmt {
    pub branch: Branch,
    pub condition: Option<NodeId>,
    pub body: NodeId,
    pub else_clause: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStmt {
    pub body: NodeId,
    pub condition: NodeId,
}

/// `for (init; condition; action) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: NodeId,
    pub condition: NodeId,
    pub action: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclStmt {
    pub name: String,
    pub fields: Vec<NodeId>,
    pub methods: Vec<NodeId>,
}

/// `name :: data_type;` inside a struct body.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub data_type: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcDeclStmt {
    pub identifier: String,
    pub parameters: Vec<NodeId>,
    pub return_type: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcParameter {
    pub name: String,
    pub data_type: Token,
}

/// A named type such as `i32`, `User` or `void`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataType {
    pub name: String,
}
