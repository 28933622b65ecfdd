use std::collections::HashMap;

use crate::{
    ast::{
        expressions::{Expr, ExprId},
        statements::{FunctionDeclStmt, InterruptKind, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

/// Receives the scope distance computed for each resolved expression.
pub trait ResolutionTable {
    fn record(&mut self, id: ExprId, depth: usize);
}

impl ResolutionTable for HashMap<ExprId, usize> {
    fn record(&mut self, id: ExprId, depth: usize) {
        self.insert(id, depth);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FunctionKind {
    None,
    Function,
}

/// One block or function scope. `false` marks a name that is declared but
/// whose initializer has not been resolved yet.
#[derive(Debug, Default)]
pub struct Scope {
    pub variable_lookup: HashMap<String, bool>,
}

impl Scope {
    pub fn declare_variable(&mut self, name: &Token) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&name.lexeme) {
            return Err(Error::at_token(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.lexeme.clone(),
                },
                name,
            ));
        }

        self.variable_lookup.insert(name.lexeme.clone(), false);
        Ok(())
    }

    pub fn define_variable(&mut self, name: &Token) {
        self.variable_lookup.insert(name.lexeme.clone(), true);
    }
}

pub struct Resolver<'t> {
    pub scopes: Vec<Scope>,
    pub current_function: FunctionKind,
    pub in_loop: bool,
    pub errors: Vec<Error>,
    pub warnings: Vec<Error>,
    table: &'t mut dyn ResolutionTable,
}

/// Outcome of a resolution pass.
#[derive(Debug, Default)]
pub struct Resolution {
    pub errors: Vec<Error>,
    pub warnings: Vec<Error>,
}

impl Resolution {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t mut dyn ResolutionTable) -> Self {
        Resolver {
            scopes: vec![],
            current_function: FunctionKind::None,
            in_loop: false,
            errors: vec![],
            warnings: vec![],
            table,
        }
    }

    pub fn begin_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    pub fn end_scope(&mut self) {
        self.scopes.pop();
    }

    pub fn declare(&mut self, name: &Token) {
        let result = match self.scopes.last_mut() {
            Some(scope) => scope.declare_variable(name),
            None => Ok(()),
        };

        if let Err(error) = result {
            self.errors.push(error);
        }
    }

    pub fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.define_variable(name);
        }
    }

    /// Records the distance to the innermost scope binding `name`.
    /// Unknown names are assumed global and left unrecorded.
    pub fn resolve_local(&mut self, id: ExprId, name: &Token) {
        let found = self
            .scopes
            .iter()
            .rev()
            .position(|scope| scope.variable_lookup.contains_key(&name.lexeme));

        if let Some(depth) = found {
            self.table.record(id, depth);
        }
    }
}

pub fn resolve_expr(resolver: &mut Resolver, expr: &Expr) {
    match expr {
        Expr::Variable(variable) => {
            let in_own_initializer = resolver
                .scopes
                .last()
                .and_then(|scope| scope.variable_lookup.get(&variable.name.lexeme))
                == Some(&false);

            if in_own_initializer {
                resolver.errors.push(Error::at_token(
                    ErrorImpl::SelfReferencingInitializer {
                        variable: variable.name.lexeme.clone(),
                    },
                    &variable.name,
                ));
            }

            resolver.resolve_local(variable.id, &variable.name);
        }
        Expr::Assign(assign) => {
            resolve_expr(resolver, &assign.value);
            resolver.resolve_local(assign.id, &assign.name);
        }
        Expr::Binary(binary) => {
            resolve_expr(resolver, &binary.left);
            resolve_expr(resolver, &binary.right);
        }
        Expr::Logical(logical) => {
            resolve_expr(resolver, &logical.left);
            resolve_expr(resolver, &logical.right);
        }
        Expr::Call(call) => {
            resolve_expr(resolver, &call.callee);
            for argument in &call.arguments {
                resolve_expr(resolver, argument);
            }
        }
        Expr::Grouping(grouping) => resolve_expr(resolver, &grouping.expression),
        Expr::Unary(unary) => resolve_expr(resolver, &unary.right),
        Expr::Literal(_) => {}
    }
}

pub fn resolve_stmt(resolver: &mut Resolver, stmt: &Stmt) {
    match stmt {
        Stmt::Block(block) => {
            resolver.begin_scope();
            resolve_stmts(resolver, &block.body);
            resolver.end_scope();
        }
        Stmt::Var(var) => {
            resolver.declare(&var.name);
            if let Some(initializer) = &var.initializer {
                resolve_expr(resolver, initializer);
            }
            resolver.define(&var.name);
        }
        Stmt::Function(function) => {
            // Defined before the body so the function can recurse
            resolver.declare(&function.name);
            resolver.define(&function.name);
            resolve_function(resolver, function, FunctionKind::Function);
        }
        Stmt::Expression(stmt) => resolve_expr(resolver, &stmt.expression),
        Stmt::Print(stmt) => resolve_expr(resolver, &stmt.expression),
        Stmt::If(stmt) => {
            resolve_expr(resolver, &stmt.condition);
            resolve_stmt(resolver, &stmt.then_branch);
            if let Some(else_branch) = &stmt.else_branch {
                resolve_stmt(resolver, else_branch);
            }
        }
        Stmt::While(stmt) => {
            resolve_expr(resolver, &stmt.condition);

            let enclosing_loop = resolver.in_loop;
            resolver.in_loop = true;
            resolve_stmt(resolver, &stmt.body);
            resolver.in_loop = enclosing_loop;
        }
        Stmt::Interrupt(stmt) => {
            if !resolver.in_loop {
                let error = match stmt.kind {
                    InterruptKind::Break => ErrorImpl::BreakOutsideLoop,
                    InterruptKind::Continue => ErrorImpl::ContinueOutsideLoop,
                };
                resolver.errors.push(Error::at_token(error, &stmt.keyword));
            }
        }
        Stmt::Return(stmt) => {
            if resolver.current_function == FunctionKind::None {
                resolver.errors.push(Error::at_token(
                    ErrorImpl::ReturnOutsideFunction,
                    &stmt.keyword,
                ));
            }

            if let Some(value) = &stmt.value {
                resolve_expr(resolver, value);
            }
        }
    }
}

pub fn resolve_function(resolver: &mut Resolver, function: &FunctionDeclStmt, kind: FunctionKind) {
    let enclosing_function = resolver.current_function;
    let enclosing_loop = resolver.in_loop;
    resolver.current_function = kind;
    // A loop around the declaration does not extend into the body
    resolver.in_loop = false;

    resolver.begin_scope();
    for parameter in &function.parameters {
        resolver.declare(parameter);
        resolver.define(parameter);
    }
    resolve_stmts(resolver, &function.body);
    resolver.end_scope();

    resolver.current_function = enclosing_function;
    resolver.in_loop = enclosing_loop;
}

/// Resolves a statement list, flagging every statement after a `return`.
pub fn resolve_stmts(resolver: &mut Resolver, statements: &[Stmt]) {
    let mut return_line = None;

    for stmt in statements {
        if let Some(line) = return_line {
            tracing::warn!(line, "unreachable code after return");
            resolver
                .warnings
                .push(Error::new(ErrorImpl::UnreachableCode, line));
        } else if let Stmt::Return(stmt) = stmt {
            return_line = Some(stmt.keyword.line);
        }

        resolve_stmt(resolver, stmt);
    }
}

/// Resolves a whole program, recording scope distances into `table`.
///
/// All errors are collected; interpretation must not proceed unless the
/// result `is_ok`.
pub fn resolve(statements: &[Stmt], table: &mut dyn ResolutionTable) -> Resolution {
    let mut resolver = Resolver::new(table);
    resolve_stmts(&mut resolver, statements);

    tracing::debug!(
        errors = resolver.errors.len(),
        warnings = resolver.warnings.len(),
        "resolved program"
    );

    Resolution {
        errors: resolver.errors,
        warnings: resolver.warnings,
    }
}
