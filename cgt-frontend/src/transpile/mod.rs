//! Expression and declaration transpilation
//!
//! Every expression transpiles to a [`TranspiledExpr`]: the Go expression,
//! the C type of its value, and the statements that must run before and
//! after the value is used. Side effects that Go cannot express inside an
//! expression (`i++`, `x = y`, the comma operator) are hoisted into those
//! lists. Wherever several children are combined, the first child's lists
//! come before the next child's, so hoisted statements keep the order the C
//! expression would have run them in.

mod declarations;
mod expressions;

#[cfg(test)]
pub(crate) mod fixtures;

pub use declarations::{transpile_decl_stmt, transpile_var_decl, TranspiledDecls};
pub use expressions::ExpressionTranspiler;

use crate::ast::Node;
use crate::goast::{Expr, Stmt};
use crate::registry::Registry;
use crate::types::NULL_TYPE;
use cgt_common::TranspileError;

/// Result of transpiling one expression
#[derive(Debug, Clone, PartialEq)]
pub struct TranspiledExpr {
    pub expr: Expr,
    /// C type descriptor of the value, resolved to Go only where needed
    pub c_type: String,
    pub pre: Vec<Stmt>,
    pub post: Vec<Stmt>,
}

impl TranspiledExpr {
    /// An expression without side effects
    pub fn pure(expr: Expr, c_type: impl Into<String>) -> Self {
        Self {
            expr,
            c_type: c_type.into(),
            pre: Vec::new(),
            post: Vec::new(),
        }
    }

    /// Whether this is a null pointer constant. Casts and parentheses keep
    /// it null until it reaches a declaration or coercion, whatever the Go
    /// expression is spelled.
    pub fn is_null(&self) -> bool {
        self.c_type == NULL_TYPE
    }

    /// Flatten an expression evaluated only for its side effects.
    ///
    /// Only calls are kept as expression statements; Go rejects any other
    /// unused expression.
    pub fn into_stmts(self) -> Vec<Stmt> {
        let mut stmts = self.pre;
        if matches!(self.expr, Expr::Call { .. }) {
            stmts.push(Stmt::expr(self.expr));
        }
        stmts.extend(self.post);
        stmts
    }
}

/// Pre and post statements collected while combining children
#[derive(Debug, Default)]
pub struct SideEffects {
    pre: Vec<Stmt>,
    post: Vec<Stmt>,
}

impl SideEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child's lists after everything collected so far and hand
    /// back its expression and type.
    pub fn absorb(&mut self, child: TranspiledExpr) -> (Expr, String) {
        self.pre.extend(child.pre);
        self.post.extend(child.post);
        (child.expr, child.c_type)
    }

    pub fn push_pre(&mut self, stmt: Stmt) {
        self.pre.push(stmt);
    }

    pub fn push_post(&mut self, stmt: Stmt) {
        self.post.push(stmt);
    }

    pub fn extend_pre(&mut self, stmts: impl IntoIterator<Item = Stmt>) {
        self.pre.extend(stmts);
    }

    pub fn finish(self, expr: Expr, c_type: impl Into<String>) -> TranspiledExpr {
        TranspiledExpr {
            expr,
            c_type: c_type.into(),
            pre: self.pre,
            post: self.post,
        }
    }

    pub fn into_parts(self) -> (Vec<Stmt>, Vec<Stmt>) {
        (self.pre, self.post)
    }
}

/// Transpile an expression node
pub fn transpile_expr(registry: &mut Registry, node: &Node) -> Result<TranspiledExpr, TranspileError> {
    ExpressionTranspiler::new(registry).transpile(node)
}

/// Transpile an expression used as a statement into `pre ++ [expr] ++ post`
pub fn transpile_to_stmts(registry: &mut Registry, node: &Node) -> Result<Vec<Stmt>, TranspileError> {
    Ok(transpile_expr(registry, node)?.into_stmts())
}
