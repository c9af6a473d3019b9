//! Operator definitions for the input tree
//!
//! Operators are spelled in the dump exactly as they appear in C source,
//! so each variant deserializes from its C spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Mod,

    // Bitwise
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "<<")]
    LeftShift,
    #[serde(rename = ">>")]
    RightShift,

    // Logical
    #[serde(rename = "&&")]
    LogicalAnd,
    #[serde(rename = "||")]
    LogicalOr,

    // Comparison
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">=")]
    GreaterEqual,

    // Assignment
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "%=")]
    ModAssign,
    #[serde(rename = "&=")]
    BitAndAssign,
    #[serde(rename = "|=")]
    BitOrAssign,
    #[serde(rename = "^=")]
    BitXorAssign,
    #[serde(rename = "<<=")]
    LeftShiftAssign,
    #[serde(rename = ">>=")]
    RightShiftAssign,

    // Sequencing
    #[serde(rename = ",")]
    Comma,
}

impl BinaryOp {
    /// Check if the operator stores into its left operand
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            BinaryOp::Assign
                | BinaryOp::AddAssign
                | BinaryOp::SubAssign
                | BinaryOp::MulAssign
                | BinaryOp::DivAssign
                | BinaryOp::ModAssign
                | BinaryOp::BitAndAssign
                | BinaryOp::BitOrAssign
                | BinaryOp::BitXorAssign
                | BinaryOp::LeftShiftAssign
                | BinaryOp::RightShiftAssign
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubAssign => "-=",
            BinaryOp::MulAssign => "*=",
            BinaryOp::DivAssign => "/=",
            BinaryOp::ModAssign => "%=",
            BinaryOp::BitAndAssign => "&=",
            BinaryOp::BitOrAssign => "|=",
            BinaryOp::BitXorAssign => "^=",
            BinaryOp::LeftShiftAssign => "<<=",
            BinaryOp::RightShiftAssign => ">>=",
            BinaryOp::Comma => ",",
        };
        write!(f, "{}", op_str)
    }
}

/// Unary operators. Whether `++`/`--` is prefix or postfix is carried by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    // Arithmetic
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,

    // Bitwise
    #[serde(rename = "~")]
    BitNot,

    // Logical
    #[serde(rename = "!")]
    LogicalNot,

    // Pointer/address
    #[serde(rename = "*")]
    Dereference,
    #[serde(rename = "&")]
    AddressOf,

    // Increment/decrement
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::BitNot => "~",
            UnaryOp::LogicalNot => "!",
            UnaryOp::Dereference => "*",
            UnaryOp::AddressOf => "&",
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        };
        write!(f, "{}", op_str)
    }
}
