//! Function calls

use super::ExpressionTranspiler;
use crate::ast::Node;
use crate::goast::Expr;
use crate::transpile::{SideEffects, TranspiledExpr};
use cgt_common::TranspileError;

/// The callee is the first child, the arguments follow. All of them are
/// evaluated left to right.
pub fn transpile_call(
    tx: &mut ExpressionTranspiler,
    node: &Node,
    c_type: &str,
) -> Result<TranspiledExpr, TranspileError> {
    let callee = tx.transpile_child(node, 0)?;
    let arguments = node.children[1..]
        .iter()
        .map(|arg| tx.transpile(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let mut effects = SideEffects::new();
    let (fun, _) = effects.absorb(callee);
    let args = arguments.into_iter().map(|arg| effects.absorb(arg).0).collect();

    Ok(effects.finish(Expr::call(fun, args), c_type))
}
