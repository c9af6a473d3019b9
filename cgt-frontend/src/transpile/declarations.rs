//! Variable declarations
//!
//! C lets one declaration introduce several variables of different types
//! (`int a, *b, c[4];`). Go does not, so every variable gets its own `var`
//! statement.

use super::{ExpressionTranspiler, SideEffects};
use crate::ast::{Node, NodeKind};
use crate::goast::{Expr, Stmt};
use crate::registry::Registry;
use crate::types::{array_type_and_size, cast_expr, resolve_type};
use cgt_common::TranspileError;
use log::{debug, warn};

/// Declarations produced by one declaration statement, with the statements
/// hoisted out of their initializers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranspiledDecls {
    pub decls: Vec<Stmt>,
    pub pre: Vec<Stmt>,
    pub post: Vec<Stmt>,
}

impl TranspiledDecls {
    /// `pre ++ decls ++ post`
    pub fn into_stmts(self) -> Vec<Stmt> {
        let mut stmts = self.pre;
        stmts.extend(self.decls);
        stmts.extend(self.post);
        stmts
    }
}

/// Transpile one variable declaration into a `var` statement.
///
/// A `NULL` initializer is dropped since it equals Go's zero value. A
/// fixed-size array without an initializer gets `make([]T, N, N)` so that
/// its storage exists as it would in C.
pub fn transpile_var_decl(registry: &mut Registry, node: &Node) -> Result<TranspiledDecls, TranspileError> {
    let NodeKind::VarDecl { name, c_type } = &node.kind else {
        return Err(TranspileError::malformed_node(
            node.variant_name(),
            &node.address,
            "expected a VarDecl",
        ));
    };

    let mut effects = SideEffects::new();
    let mut value = None;

    if let Some(init) = node.children.first() {
        let init = ExpressionTranspiler::new(registry).transpile(init)?;
        let is_null = init.is_null();
        let (expr, init_type) = effects.absorb(init);

        if !is_null {
            value = Some(cast_expr(registry, expr, &init_type, c_type)?);
        }
    }

    if value.is_none() {
        if let Some((element, size)) = array_type_and_size(c_type) {
            let element = resolve_type(registry, &element)?;
            value = Some(Expr::call(
                Expr::ident("make"),
                vec![Expr::array_type(element), Expr::int_lit(size), Expr::int_lit(size)],
            ));
        }
    }

    let ty = resolve_type(registry, c_type)?;
    debug!("declared {} as {}", name, ty);

    let (pre, post) = effects.into_parts();
    Ok(TranspiledDecls {
        decls: vec![Stmt::var(name.as_str(), ty, value)],
        pre,
        post,
    })
}

/// Transpile a declaration statement. Nested record declarations are
/// skipped; any other child that is not a variable is fatal.
pub fn transpile_decl_stmt(registry: &mut Registry, node: &Node) -> Result<TranspiledDecls, TranspileError> {
    if node.kind != NodeKind::DeclStmt {
        return Err(TranspileError::malformed_node(
            node.variant_name(),
            &node.address,
            "expected a DeclStmt",
        ));
    }

    let mut result = TranspiledDecls::default();

    for child in &node.children {
        match &child.kind {
            NodeKind::RecordDecl { name, .. } => {
                warn!("skipping record declaration '{}' at {}", name, child.address);
            }

            NodeKind::VarDecl { .. } => {
                let var = transpile_var_decl(registry, child)?;
                result.decls.extend(var.decls);
                result.pre.extend(var.pre);
                result.post.extend(var.post);
            }

            _ => {
                return Err(TranspileError::unknown_declaration_child(
                    child.variant_name(),
                    &child.address,
                ))
            }
        }
    }

    Ok(result)
}
