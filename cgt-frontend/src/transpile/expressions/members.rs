//! Member access

use super::ExpressionTranspiler;
use crate::ast::Node;
use crate::goast::Expr;
use crate::transpile::{SideEffects, TranspiledExpr};
use crate::types::resolve_type;
use cgt_common::TranspileError;

/// `base.name` and `base->name`; Go selects through pointers with the same syntax.
///
/// The Darwin vector layouts cannot be modelled as structs, so their fields
/// are reached through the exported fields of the runtime type and read as
/// plain integers.
pub fn transpile_member(
    tx: &mut ExpressionTranspiler,
    node: &Node,
    name: &str,
    c_type: &str,
) -> Result<TranspiledExpr, TranspileError> {
    let base = tx.transpile_child(node, 0)?;

    let mut effects = SideEffects::new();
    let (base, base_type) = effects.absorb(base);

    let resolved = resolve_type(tx.registry, &base_type)?;
    let record = resolved.strip_prefix('*').unwrap_or(&resolved);

    if tx.registry.profile().is_vector_type(record) {
        return Ok(effects.finish(Expr::selector(base, exported_name(name)), "int"));
    }

    Ok(effects.finish(Expr::selector(base, name), c_type))
}

fn exported_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
