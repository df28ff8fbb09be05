/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node arena, the closed `NodeKind` sum type and the tree printer
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement and declaration variants
pub mod ast;
pub mod expressions;
pub mod statements;
