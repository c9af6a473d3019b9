//! Binary operators, assignments and the comma operator

use super::ExpressionTranspiler;
use crate::ast::{BinaryOp, Node};
use crate::goast::{Expr, Stmt, Token};
use crate::transpile::{SideEffects, TranspiledExpr};
use cgt_common::TranspileError;

pub fn transpile_binary(
    tx: &mut ExpressionTranspiler,
    node: &Node,
    op: BinaryOp,
    c_type: &str,
) -> Result<TranspiledExpr, TranspileError> {
    let lhs = tx.transpile_child(node, 0)?;
    let rhs = tx.transpile_child(node, 1)?;

    let mut effects = SideEffects::new();

    let Some(token) = go_token(op) else {
        // Comma: the left operand runs completely before the right one
        effects.extend_pre(lhs.into_stmts());
        let (y, y_type) = effects.absorb(rhs);
        return Ok(effects.finish(y, y_type));
    };

    // Hoisted statements would run even when the operator short-circuits
    let short_circuits = matches!(op, BinaryOp::LogicalAnd | BinaryOp::LogicalOr);
    if short_circuits && !(rhs.pre.is_empty() && rhs.post.is_empty()) {
        return Err(TranspileError::unsupported_construct(
            node.variant_name(),
            &node.address,
            format!("side effect in the right operand of {}", token),
        ));
    }

    let (x, x_type) = effects.absorb(lhs);
    let (y, _) = effects.absorb(rhs);

    if op.is_assignment() {
        effects.push_pre(Stmt::Assign {
            lhs: x.clone(),
            tok: token,
            rhs: y,
        });
        return Ok(effects.finish(x, x_type));
    }

    Ok(effects.finish(Expr::binary(x, token, y), c_type))
}

fn go_token(op: BinaryOp) -> Option<Token> {
    let token = match op {
        BinaryOp::Add => Token::Add,
        BinaryOp::Sub => Token::Sub,
        BinaryOp::Mul => Token::Mul,
        BinaryOp::Div => Token::Quo,
        BinaryOp::Mod => Token::Rem,
        BinaryOp::BitAnd => Token::And,
        BinaryOp::BitOr => Token::Or,
        BinaryOp::BitXor => Token::Xor,
        BinaryOp::LeftShift => Token::Shl,
        BinaryOp::RightShift => Token::Shr,
        BinaryOp::LogicalAnd => Token::LAnd,
        BinaryOp::LogicalOr => Token::LOr,
        BinaryOp::Equal => Token::Eql,
        BinaryOp::NotEqual => Token::Neq,
        BinaryOp::Less => Token::Lss,
        BinaryOp::Greater => Token::Gtr,
        BinaryOp::LessEqual => Token::Leq,
        BinaryOp::GreaterEqual => Token::Geq,
        BinaryOp::Assign => Token::Assign,
        BinaryOp::AddAssign => Token::AddAssign,
        BinaryOp::SubAssign => Token::SubAssign,
        BinaryOp::MulAssign => Token::MulAssign,
        BinaryOp::DivAssign => Token::QuoAssign,
        BinaryOp::ModAssign => Token::RemAssign,
        BinaryOp::BitAndAssign => Token::AndAssign,
        BinaryOp::BitOrAssign => Token::OrAssign,
        BinaryOp::BitXorAssign => Token::XorAssign,
        BinaryOp::LeftShiftAssign => Token::ShlAssign,
        BinaryOp::RightShiftAssign => Token::ShrAssign,
        BinaryOp::Comma => return None,
    };
    Some(token)
}
