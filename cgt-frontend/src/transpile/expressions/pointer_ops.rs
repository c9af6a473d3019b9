//! Subscripts, dereferences and address-of

use super::ExpressionTranspiler;
use crate::ast::Node;
use crate::goast::{Expr, Token};
use crate::transpile::{SideEffects, TranspiledExpr};
use crate::types::{dereference, pointer_to};
use cgt_common::TranspileError;

/// `base[index]`. The element type comes from the base's type; a base that
/// cannot be indexed is fatal.
pub fn transpile_array_subscript(
    tx: &mut ExpressionTranspiler,
    node: &Node,
) -> Result<TranspiledExpr, TranspileError> {
    let base = tx.transpile_child(node, 0)?;
    let index = tx.transpile_child(node, 1)?;

    let mut effects = SideEffects::new();
    let (base, base_type) = effects.absorb(base);
    let (index, _) = effects.absorb(index);

    let element_type =
        dereference(&base_type).ok_or_else(|| TranspileError::not_dereferenceable(&base_type, &base))?;

    Ok(effects.finish(Expr::index(base, index), element_type))
}

/// `*operand`
pub fn transpile_dereference(operand: TranspiledExpr) -> Result<TranspiledExpr, TranspileError> {
    let mut effects = SideEffects::new();
    let (x, x_type) = effects.absorb(operand);

    let target_type = dereference(&x_type).ok_or_else(|| TranspileError::not_dereferenceable(&x_type, &x))?;

    Ok(effects.finish(Expr::star(x), target_type))
}

/// `&operand`
pub fn transpile_address_of(operand: TranspiledExpr) -> TranspiledExpr {
    let mut effects = SideEffects::new();
    let (x, x_type) = effects.absorb(operand);
    effects.finish(Expr::unary(Token::And, x), pointer_to(&x_type))
}
