//! Input node builders for unit tests
#![allow(dead_code)]

use crate::ast::{BinaryOp, Node, NodeKind, UnaryOp};

pub fn decl_ref(name: &str, c_type: &str) -> Node {
    Node::new(NodeKind::DeclRefExpr {
        name: name.to_string(),
        c_type: c_type.to_string(),
    })
}

pub fn int_lit(value: &str) -> Node {
    Node::new(NodeKind::IntegerLiteral {
        c_type: "int".to_string(),
        value: value.to_string(),
    })
}

pub fn string_lit(value: &str) -> Node {
    Node::new(NodeKind::StringLiteral {
        c_type: format!("char [{}]", value.len() + 1),
        value: value.to_string(),
    })
}

pub fn paren(c_type: &str, child: Node) -> Node {
    Node::new(NodeKind::ParenExpr {
        c_type: c_type.to_string(),
    })
    .with_children(vec![child])
}

pub fn implicit(cast_kind: &str, c_type: &str, child: Node) -> Node {
    Node::new(NodeKind::ImplicitCastExpr {
        c_type: c_type.to_string(),
        cast_kind: cast_kind.to_string(),
    })
    .with_children(vec![child])
}

pub fn c_style(cast_kind: &str, c_type: &str, child: Node) -> Node {
    Node::new(NodeKind::CStyleCastExpr {
        c_type: c_type.to_string(),
        cast_kind: cast_kind.to_string(),
    })
    .with_children(vec![child])
}

/// Value of a variable, as clang wraps every rvalue use
pub fn rvalue(name: &str, c_type: &str) -> Node {
    implicit("LValueToRValue", c_type, decl_ref(name, c_type))
}

/// `NULL` as the darwin headers expand it: `((void *)0)`
pub fn null() -> Node {
    paren("void *", c_style("NullToPointer", "void *", int_lit("0")))
}

pub fn call(c_type: &str, callee: &str, args: Vec<Node>) -> Node {
    let callee = implicit(
        "FunctionToPointerDecay",
        &format!("{c_type} (*)()"),
        decl_ref(callee, &format!("{c_type} ()")),
    );
    let mut children = vec![callee];
    children.extend(args);

    Node::new(NodeKind::CallExpr {
        c_type: c_type.to_string(),
    })
    .with_children(children)
}

pub fn subscript(c_type: &str, base: Node, index: Node) -> Node {
    Node::new(NodeKind::ArraySubscriptExpr {
        c_type: c_type.to_string(),
    })
    .with_children(vec![base, index])
}

pub fn member(name: &str, c_type: &str, is_pointer: bool, base: Node) -> Node {
    Node::new(NodeKind::MemberExpr {
        name: name.to_string(),
        c_type: c_type.to_string(),
        is_pointer,
    })
    .with_children(vec![base])
}

pub fn unary(operator: UnaryOp, is_postfix: bool, c_type: &str, operand: Node) -> Node {
    Node::new(NodeKind::UnaryOperator {
        c_type: c_type.to_string(),
        operator,
        is_postfix,
    })
    .with_children(vec![operand])
}

pub fn binary(operator: BinaryOp, c_type: &str, lhs: Node, rhs: Node) -> Node {
    Node::new(NodeKind::BinaryOperator {
        c_type: c_type.to_string(),
        operator,
    })
    .with_children(vec![lhs, rhs])
}

pub fn compound_assign(operator: BinaryOp, c_type: &str, lhs: Node, rhs: Node) -> Node {
    Node::new(NodeKind::CompoundAssignOperator {
        c_type: c_type.to_string(),
        operator,
    })
    .with_children(vec![lhs, rhs])
}

pub fn init_list(c_type: &str, elements: Vec<Node>) -> Node {
    Node::new(NodeKind::InitListExpr {
        c_type: c_type.to_string(),
    })
    .with_children(elements)
}

pub fn var_decl(name: &str, c_type: &str, init: Option<Node>) -> Node {
    Node::new(NodeKind::VarDecl {
        name: name.to_string(),
        c_type: c_type.to_string(),
    })
    .with_children(init.into_iter().collect())
}

pub fn decl_stmt(children: Vec<Node>) -> Node {
    Node::new(NodeKind::DeclStmt).with_children(children)
}

pub fn record_decl(name: &str) -> Node {
    Node::new(NodeKind::RecordDecl {
        name: name.to_string(),
        record_kind: "struct".to_string(),
    })
}
