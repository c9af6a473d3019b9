//! Input tree definitions
//!
//! Nodes mirror what the upstream parser extracts from a clang AST dump:
//! a variant tag, the variant-specific fields (names, raw C type
//! descriptors, operators, cast kinds) and an ordered list of children.
//! The transpiler only ever borrows these nodes.

pub mod ops;

pub use ops::{BinaryOp, UnaryOp};

use cgt_common::TranspileError;
use serde::{Deserialize, Serialize};

/// A node of the input tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Address printed by clang (e.g. `0x7f980b858309`), used in diagnostics
    #[serde(default)]
    pub address: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node")]
pub enum NodeKind {
    /// Reference to a declared variable or function
    DeclRefExpr {
        name: String,
        #[serde(rename = "type")]
        c_type: String,
    },

    /// `base[index]`; children are the base and the index
    ArraySubscriptExpr {
        #[serde(rename = "type")]
        c_type: String,
    },

    /// `base.name` or `base->name`; the only child is the base
    MemberExpr {
        name: String,
        #[serde(rename = "type")]
        c_type: String,
        #[serde(default)]
        is_pointer: bool,
    },

    /// Integer literal, value kept as printed
    IntegerLiteral {
        #[serde(rename = "type")]
        c_type: String,
        value: String,
    },

    FloatingLiteral {
        #[serde(rename = "type")]
        c_type: String,
        value: f64,
    },

    /// Character literal, value is the code point
    CharacterLiteral {
        #[serde(rename = "type")]
        c_type: String,
        value: u32,
    },

    StringLiteral {
        #[serde(rename = "type")]
        c_type: String,
        value: String,
    },

    ParenExpr {
        #[serde(rename = "type")]
        c_type: String,
    },

    /// Conversion inserted by the C compiler (`LValueToRValue`, `IntegralCast`, ...)
    ImplicitCastExpr {
        #[serde(rename = "type")]
        c_type: String,
        #[serde(rename = "kind")]
        cast_kind: String,
    },

    /// Conversion written in the source as `(T) expr`
    CStyleCastExpr {
        #[serde(rename = "type")]
        c_type: String,
        #[serde(rename = "kind")]
        cast_kind: String,
    },

    /// Function call; the first child is the callee, the rest are arguments
    CallExpr {
        #[serde(rename = "type")]
        c_type: String,
    },

    UnaryOperator {
        #[serde(rename = "type")]
        c_type: String,
        operator: UnaryOp,
        #[serde(default)]
        is_postfix: bool,
    },

    BinaryOperator {
        #[serde(rename = "type")]
        c_type: String,
        operator: BinaryOp,
    },

    /// `+=`, `-=`, ... which clang dumps as a separate node kind
    CompoundAssignOperator {
        #[serde(rename = "type")]
        c_type: String,
        operator: BinaryOp,
    },

    /// Brace initializer; children are the element initializers
    InitListExpr {
        #[serde(rename = "type")]
        c_type: String,
    },

    /// Variable declaration; an optional single child is the initializer
    VarDecl {
        name: String,
        #[serde(rename = "type")]
        c_type: String,
    },

    /// Declaration statement grouping one or more declarations
    DeclStmt,

    /// Struct or union definition
    RecordDecl {
        #[serde(default)]
        name: String,
        #[serde(rename = "kind")]
        record_kind: String,
    },

    TypedefDecl {
        name: String,
        #[serde(rename = "type")]
        c_type: String,
    },

    EnumDecl {
        #[serde(default)]
        name: String,
    },
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            address: String::new(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn at(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    /// Get a required child, failing with a malformed-node error if it is missing
    pub fn child(&self, index: usize) -> Result<&Node, TranspileError> {
        self.children.get(index).ok_or_else(|| {
            TranspileError::malformed_node(
                self.variant_name(),
                &self.address,
                format!("expected a child at position {index}, found {} children", self.children.len()),
            )
        })
    }

    /// Name of the node variant as clang prints it
    pub fn variant_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::DeclRefExpr { .. } => "DeclRefExpr",
            NodeKind::ArraySubscriptExpr { .. } => "ArraySubscriptExpr",
            NodeKind::MemberExpr { .. } => "MemberExpr",
            NodeKind::IntegerLiteral { .. } => "IntegerLiteral",
            NodeKind::FloatingLiteral { .. } => "FloatingLiteral",
            NodeKind::CharacterLiteral { .. } => "CharacterLiteral",
            NodeKind::StringLiteral { .. } => "StringLiteral",
            NodeKind::ParenExpr { .. } => "ParenExpr",
            NodeKind::ImplicitCastExpr { .. } => "ImplicitCastExpr",
            NodeKind::CStyleCastExpr { .. } => "CStyleCastExpr",
            NodeKind::CallExpr { .. } => "CallExpr",
            NodeKind::UnaryOperator { .. } => "UnaryOperator",
            NodeKind::BinaryOperator { .. } => "BinaryOperator",
            NodeKind::CompoundAssignOperator { .. } => "CompoundAssignOperator",
            NodeKind::InitListExpr { .. } => "InitListExpr",
            NodeKind::VarDecl { .. } => "VarDecl",
            NodeKind::DeclStmt => "DeclStmt",
            NodeKind::RecordDecl { .. } => "RecordDecl",
            NodeKind::TypedefDecl { .. } => "TypedefDecl",
            NodeKind::EnumDecl { .. } => "EnumDecl",
        }
    }
}
