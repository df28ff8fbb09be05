use std::{
    fmt::{self, Display},
    ops::Index,
};

use la_arena::{Arena, Idx};

use crate::tokenizer::tokens::Token;

use super::{
    expressions::{
        BinaryExpr, BooleanExpr, CallExpr, FloatExpr, IdentifierExpr, IntegerExpr, MemberExpr,
        PrefixExpr, StringExpr,
    },
    statements::{
        BlockStmt, Branch, ConditionalStmt, DataType, DoWhileStmt, ExpressionStmt, ForStmt,
        ProcDeclStmt, ProcParameter, ReturnStmt, StructDeclStmt, StructField, VarDeclStmt,
        WhileStmt,
    },
};

/// Dense index of a node inside its `Ast`.
pub type NodeId = Idx<Node>;

/// Every variant of the tree. `Invalid` stands in for a sub-tree that failed
/// to parse, so every slot of its parent stays filled.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Invalid,

    // Expressions
    Integer(IntegerExpr),
    Float(FloatExpr),
    Boolean(BooleanExpr),
    String(StringExpr),
    Identifier(IdentifierExpr),
    Call(CallExpr),
    Member(MemberExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),

    // Statements
    VarDecl(VarDeclStmt),
    Expression(ExpressionStmt),
    Return(ReturnStmt),
    Conditional(ConditionalStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    Block(BlockStmt),
    StructDecl(StructDeclStmt),
    StructField(StructField),
    ProcDecl(ProcDeclStmt),
    ProcParameter(ProcParameter),
    DataType(DataType),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Invalid => "Invalid",
            NodeKind::Integer(_) => "Integer",
            NodeKind::Float(_) => "Float",
            NodeKind::Boolean(_) => "Boolean",
            NodeKind::String(_) => "String",
            NodeKind::Identifier(_) => "Identifier",
            NodeKind::Call(_) => "Call",
            NodeKind::Member(_) => "Member",
            NodeKind::Prefix(_) => "Prefix",
            NodeKind::Binary(_) => "Binary",
            NodeKind::VarDecl(_) => "VarDecl",
            NodeKind::Expression(_) => "Expression",
            NodeKind::Return(_) => "Return",
            NodeKind::Conditional(_) => "Conditional",
            NodeKind::While(_) => "While",
            NodeKind::DoWhile(_) => "DoWhile",
            NodeKind::For(_) => "For",
            NodeKind::Block(_) => "Block",
            NodeKind::StructDecl(_) => "StructDecl",
            NodeKind::StructField(_) => "StructField",
            NodeKind::ProcDecl(_) => "ProcDecl",
            NodeKind::ProcParameter(_) => "ProcParameter",
            NodeKind::DataType(_) => "DataType",
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::Integer(_)
                | NodeKind::Float(_)
                | NodeKind::Boolean(_)
                | NodeKind::String(_)
                | NodeKind::Identifier(_)
                | NodeKind::Call(_)
                | NodeKind::Member(_)
                | NodeKind::Prefix(_)
                | NodeKind::Binary(_)
        )
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Invalid
            | NodeKind::Integer(_)
            | NodeKind::Float(_)
            | NodeKind::Boolean(_)
            | NodeKind::String(_)
            | NodeKind::ProcParameter(_)
            | NodeKind::DataType(_) => vec![],
            NodeKind::Identifier(identifier) => identifier.index.into_iter().collect(),
            NodeKind::Call(call) => call.arguments.clone(),
            NodeKind::Member(member) => vec![member.object, member.member],
            NodeKind::Prefix(prefix) => vec![prefix.right_expr],
            NodeKind::Binary(binary) => vec![binary.left, binary.right],
            NodeKind::VarDecl(decl) => vec![decl.data_type, decl.assigned_value],
            NodeKind::Expression(stmt) => vec![stmt.expression],
            NodeKind::Return(stmt) => stmt.value.into_iter().collect(),
            NodeKind::Conditional(stmt) => stmt
                .condition
                .into_iter()
                .chain(Some(stmt.body))
                .chain(stmt.else_clause)
                .collect(),
            NodeKind::While(stmt) => vec![stmt.condition, stmt.body],
            NodeKind::DoWhile(stmt) => vec![stmt.body, stmt.condition],
            NodeKind::For(stmt) => vec![stmt.init, stmt.condition, stmt.action, stmt.body],
            NodeKind::Block(block) => block.body.clone(),
            NodeKind::StructDecl(decl) => {
                decl.fields.iter().chain(decl.methods.iter()).copied().collect()
            }
            NodeKind::StructField(field) => vec![field.data_type],
            NodeKind::ProcDecl(decl) => decl
                .parameters
                .iter()
                .copied()
                .chain([decl.return_type, decl.body])
                .collect(),
        }
    }
}

/// A node plus the token it started at. `parent` is `None` for roots.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub token: Token,
    pub parent: Option<NodeId>,
}

/// The tree for one file: every node lives in one arena, and `roots` lists
/// the top-level procedures, structs and `let` declarations in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ast {
    nodes: Arena<Node>,
    roots: Vec<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Ast::default()
    }

    /// Stores a node and links its children back to it. Children must
    /// already be allocated.
    pub fn alloc(&mut self, kind: NodeKind, token: Token) -> NodeId {
        let children = kind.children();
        let id = self.nodes.alloc(Node {
            kind,
            token,
            parent: None,
        });

        for child in children {
            self.nodes[child].parent = Some(id);
        }

        id
    }

    pub fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id].kind.children()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `id` and everything below it, in pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut visited = vec![];
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            visited.push(current);
            stack.extend(self.nodes[current].kind.children().into_iter().rev());
        }

        visited
    }

    /// Every node reachable from a root. Sub-trees discarded during error
    /// recovery stay in the arena but are not reachable.
    pub fn reachable(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|root| self.descendants(*root))
            .collect()
    }

    pub fn count_invalid(&self) -> usize {
        self.reachable()
            .into_iter()
            .filter(|id| self.nodes[*id].kind == NodeKind::Invalid)
            .count()
    }

    fn label(&self, node: &Node) -> String {
        match &node.kind {
            NodeKind::Invalid => format!("Invalid (at {:?})", node.token.text),
            NodeKind::Integer(literal) => format!("Integer {}", literal.value),
            NodeKind::Float(literal) => format!("Float {:?}", literal.value),
            NodeKind::Boolean(literal) => format!("Boolean {}", literal.value),
            NodeKind::String(literal) => format!("String {:?}", literal.value),
            NodeKind::Identifier(identifier) => format!("Identifier {}", identifier.name),
            NodeKind::Call(call) => format!("Call {}", call.callee),
            NodeKind::Prefix(prefix) => format!("Prefix {}", prefix.operator),
            NodeKind::Binary(binary) => format!("Binary {}", binary.operator),
            NodeKind::VarDecl(decl) => format!("VarDecl {}", decl.identifier),
            NodeKind::Conditional(stmt) => match stmt.branch {
                Branch::If => String::from("Conditional if"),
                Branch::Elif => String::from("Conditional elif"),
                Branch::Else => String::from("Conditional else"),
            },
            NodeKind::StructDecl(decl) => format!("StructDecl {}", decl.name),
            NodeKind::StructField(field) => format!("StructField {}", field.name),
            NodeKind::ProcDecl(decl) => format!("ProcDecl {}", decl.identifier),
            NodeKind::ProcParameter(param) => {
                format!("ProcParameter {}: {}", param.name, param.data_type.text)
            }
            NodeKind::DataType(data_type) => format!("DataType {}", data_type.name),
            kind => kind.name().to_string(),
        }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = &self.nodes[id];
        writeln!(f, "{}{}", "  ".repeat(depth), self.label(node))?;

        for child in node.kind.children() {
            self.write_node(f, child, depth + 1)?;
        }

        Ok(())
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in &self.roots {
            self.write_node(f, *root, 0)?;
        }

        Ok(())
    }
}
