//! Unary operators

use super::{pointer_ops, ExpressionTranspiler};
use crate::ast::{Node, UnaryOp};
use crate::goast::{Expr, Stmt, Token};
use crate::transpile::{SideEffects, TranspiledExpr};
use cgt_common::TranspileError;

pub fn transpile_unary(
    tx: &mut ExpressionTranspiler,
    node: &Node,
    op: UnaryOp,
    is_postfix: bool,
    c_type: &str,
) -> Result<TranspiledExpr, TranspileError> {
    let operand = tx.transpile_child(node, 0)?;

    let token = match op {
        UnaryOp::Increment | UnaryOp::Decrement => {
            return Ok(transpile_inc_dec(operand, op == UnaryOp::Increment, is_postfix));
        }
        UnaryOp::Dereference => return pointer_ops::transpile_dereference(operand),
        UnaryOp::AddressOf => return Ok(pointer_ops::transpile_address_of(operand)),
        UnaryOp::Plus => Token::Add,
        UnaryOp::Minus => Token::Sub,
        UnaryOp::LogicalNot => Token::Not,
        UnaryOp::BitNot => Token::Xor,
    };

    let mut effects = SideEffects::new();
    let (x, _) = effects.absorb(operand);
    Ok(effects.finish(Expr::unary(token, x), c_type))
}

// `++x` hoists before the value is used, `x++` after. Either way the value
// is the operand itself.
fn transpile_inc_dec(operand: TranspiledExpr, increment: bool, is_postfix: bool) -> TranspiledExpr {
    let mut effects = SideEffects::new();
    let (x, x_type) = effects.absorb(operand);

    let stmt = Stmt::IncDec {
        x: x.clone(),
        tok: if increment { Token::Inc } else { Token::Dec },
    };

    if is_postfix {
        effects.push_post(stmt);
    } else {
        effects.push_pre(stmt);
    }

    effects.finish(x, x_type)
}
