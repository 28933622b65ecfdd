/// AST (Abstract Syntax Tree) module
/// Contains the node types produced by the parser
///
/// Submodules:
/// - expressions: Expression variants and expression ids
/// - statements: Statement variants
/// - printer: Prefix-form rendering of expressions
pub mod expressions;
pub mod printer;
pub mod statements;
