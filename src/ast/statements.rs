use std::rc::Rc;

use crate::lexer::tokens::Token;

use super::expressions::Expr;

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

#[derive(Debug, Clone)]
pub struct PrintStmt {
    pub keyword: Token,
    pub expression: Expr,
}

/// Variable Declaration Statement
/// `var name [= initializer];`
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub name: Token,
    pub initializer: Option<Expr>,
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptKind {
    Break,
    Continue,
}

/// Interrupt Statement
/// `break;` or `continue;`
#[derive(Debug, Clone)]
pub struct InterruptStmt {
    pub keyword: Token,
    pub kind: InterruptKind,
}

/// Function Declaration Statement
/// Shared by the tree and every runtime function value created from it.
#[derive(Debug)]
pub struct FunctionDeclStmt {
    pub name: Token,
    pub parameters: Vec<Token>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub keyword: Token,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Print(PrintStmt),
    Var(VarDeclStmt),
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    Interrupt(InterruptStmt),
    Function(Rc<FunctionDeclStmt>),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn is_return(&self) -> bool {
        matches!(self, Stmt::Return(_))
    }
}
