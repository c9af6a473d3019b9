//! Expression transpilation modules

mod binary_ops;
mod casts;
mod function_calls;
mod identifiers;
mod literals;
mod members;
mod pointer_ops;
mod unary_ops;

use super::TranspiledExpr;
use crate::ast::{Node, NodeKind};
use crate::registry::Registry;
use cgt_common::TranspileError;
use log::trace;

/// Recursive expression transpiler over one registry
pub struct ExpressionTranspiler<'a> {
    pub registry: &'a mut Registry,
}

impl<'a> ExpressionTranspiler<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        Self { registry }
    }

    /// Transpile an expression node and, recursively, its children
    pub fn transpile(&mut self, node: &Node) -> Result<TranspiledExpr, TranspileError> {
        trace!("transpiling {} at {}", node.variant_name(), node.address);

        match &node.kind {
            NodeKind::DeclRefExpr { name, c_type } => Ok(identifiers::transpile_decl_ref(self, name, c_type)),

            NodeKind::ArraySubscriptExpr { .. } => pointer_ops::transpile_array_subscript(self, node),

            NodeKind::MemberExpr { name, c_type, .. } => members::transpile_member(self, node, name, c_type),

            NodeKind::IntegerLiteral { c_type, value } => Ok(literals::transpile_integer(value, c_type)),

            NodeKind::FloatingLiteral { c_type, value } => Ok(literals::transpile_floating(*value, c_type)),

            NodeKind::CharacterLiteral { c_type, value } => Ok(literals::transpile_character(*value, c_type)),

            NodeKind::StringLiteral { c_type, value } => Ok(literals::transpile_string(value, c_type)),

            NodeKind::ParenExpr { c_type } => casts::transpile_paren(self, node, c_type),

            NodeKind::ImplicitCastExpr { c_type, cast_kind } => {
                casts::transpile_implicit_cast(self, node, c_type, cast_kind)
            }

            NodeKind::CStyleCastExpr { c_type, cast_kind } => {
                casts::transpile_c_style_cast(self, node, c_type, cast_kind)
            }

            NodeKind::CallExpr { c_type } => function_calls::transpile_call(self, node, c_type),

            NodeKind::UnaryOperator {
                c_type,
                operator,
                is_postfix,
            } => unary_ops::transpile_unary(self, node, *operator, *is_postfix, c_type),

            NodeKind::BinaryOperator { c_type, operator }
            | NodeKind::CompoundAssignOperator { c_type, operator } => {
                binary_ops::transpile_binary(self, node, *operator, c_type)
            }

            NodeKind::InitListExpr { c_type } => casts::transpile_init_list(self, node, c_type),

            _ => Err(TranspileError::unsupported_node(node.variant_name(), &node.address)),
        }
    }

    /// Transpile a required child
    pub(crate) fn transpile_child(&mut self, node: &Node, index: usize) -> Result<TranspiledExpr, TranspileError> {
        self.transpile(node.child(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpile::fixtures::*;

    #[test]
    fn test_declarations_are_not_expressions() {
        let mut registry = Registry::new();
        let node = var_decl("x", "int", None).at("0x20");

        let err = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap_err();
        assert_eq!(err, TranspileError::unsupported_node("VarDecl", "0x20"));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_missing_child_is_recoverable() {
        let mut registry = Registry::new();
        let node = Node::new(NodeKind::ParenExpr {
            c_type: "int".to_string(),
        });

        let err = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap_err();
        assert!(matches!(err, TranspileError::MalformedNode { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_child_error_propagates_without_output() {
        let mut registry = Registry::new();
        let node = subscript("int", decl_ref("a", "int [3]"), decl_stmt(vec![]));

        let err = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap_err();
        assert_eq!(err, TranspileError::unsupported_node("DeclStmt", ""));
    }
}
