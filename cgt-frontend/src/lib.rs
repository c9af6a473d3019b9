//! C-to-Go Transpiler - Frontend
//!
//! This crate provides the core of the transpiler:
//! - AST: the input tree as extracted from a clang AST dump
//! - Go AST: the output tree handed to the printer
//! - Registry: declared types and required imports of one run
//! - Types: resolution of C type descriptors to Go types
//! - Transpile: expressions and declarations, with side-effect hoisting

pub mod ast;
pub mod goast;
pub mod registry;
pub mod transpile;
pub mod types;

pub use ast::{BinaryOp, Node, NodeKind, UnaryOp};
pub use goast::{Expr, Stmt, Token};
pub use registry::Registry;
pub use transpile::{
    transpile_decl_stmt, transpile_expr, transpile_to_stmts, transpile_var_decl, TranspiledDecls,
    TranspiledExpr,
};
pub use types::{resolve_type, PlatformProfile};

use cgt_common::TranspileError;
use log::debug;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Parse a JSON dump into top-level nodes. Accepts a single node or an
    /// array of nodes.
    pub fn parse_nodes(json: &str) -> Result<Vec<Node>, TranspileError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| TranspileError::InvalidInput { message: e.to_string() })?;

        let nodes = if value.is_array() {
            serde_json::from_value::<Vec<Node>>(value)
        } else {
            serde_json::from_value::<Node>(value).map(|node| vec![node])
        };

        nodes.map_err(|e| TranspileError::InvalidInput { message: e.to_string() })
    }

    /// Transpile one top-level unit into the statements it stands for.
    ///
    /// Type declarations only record their name in the registry; emitting
    /// them is left to the declaration emitter.
    pub fn transpile_unit(registry: &mut Registry, node: &Node) -> Result<Vec<Stmt>, TranspileError> {
        match &node.kind {
            NodeKind::DeclStmt => Ok(transpile_decl_stmt(registry, node)?.into_stmts()),

            NodeKind::VarDecl { .. } => Ok(transpile_var_decl(registry, node)?.into_stmts()),

            NodeKind::TypedefDecl { name, .. }
            | NodeKind::RecordDecl { name, .. }
            | NodeKind::EnumDecl { name } => {
                if !name.is_empty() {
                    debug!("recording declared type {}", name);
                    registry.declare_type(name.as_str());
                }
                Ok(Vec::new())
            }

            _ => transpile_to_stmts(registry, node),
        }
    }

    /// Transpile a whole dump, stopping at the first error
    pub fn transpile_source(registry: &mut Registry, json: &str) -> Result<Vec<Vec<Stmt>>, TranspileError> {
        Self::parse_nodes(json)?
            .iter()
            .map(|node| Self::transpile_unit(registry, node))
            .collect()
    }
}
