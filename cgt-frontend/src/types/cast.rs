//! Coercions between C types in the output tree

use super::profile::{NULL_TYPE, OPAQUE_TYPE, RUNTIME_PACKAGE, VOID_TYPE};
use super::resolve::resolve_type;
use crate::goast::{Expr, LitKind, Token};
use crate::registry::Registry;
use cgt_common::TranspileError;

const NUMERIC_TYPES: &[&str] = &[
    "byte", "float32", "float64", "int", "int8", "int16", "int32", "int64", "uint8", "uint16",
    "uint32", "uint64",
];

fn is_numeric(resolved: &str) -> bool {
    NUMERIC_TYPES.contains(&resolved)
}

// Targets whose zero value is spelled `nil`
fn is_nillable(resolved: &str) -> bool {
    resolved.starts_with('*') || resolved.starts_with("[]") || resolved == OPAQUE_TYPE
}

/// Go zero value of a resolved type, spelled as a literal
fn zero_value(resolved: &str) -> Expr {
    match resolved {
        _ if is_nillable(resolved) => Expr::nil(),
        "string" => Expr::BasicLit {
            kind: LitKind::String,
            value: "\"\"".to_string(),
        },
        "bool" => Expr::ident("false"),
        _ if is_numeric(resolved) => Expr::int_lit(0),
        _ => Expr::CompositeLit {
            ty: Box::new(Expr::ident(resolved)),
            elts: Vec::new(),
        },
    }
}

/// Coerce `expr`, a value of C type `from`, to C type `to`.
pub fn cast_expr(
    registry: &mut Registry,
    expr: Expr,
    from: &str,
    to: &str,
) -> Result<Expr, TranspileError> {
    let from = resolve_type(registry, from)?;
    let to = resolve_type(registry, to)?;

    if from == NULL_TYPE {
        return Ok(zero_value(&to));
    }

    if from == to || to == VOID_TYPE || to == OPAQUE_TYPE {
        return Ok(expr);
    }

    if to == "bool" && is_numeric(&from) {
        return Ok(Expr::binary(expr, Token::Neq, Expr::int_lit(0)));
    }

    if from == "bool" && is_numeric(&to) {
        let helper = registry.qualify(&format!("{RUNTIME_PACKAGE}.BoolToInt"));
        let converted = Expr::call(Expr::qualified(&helper), vec![expr]);
        return Ok(if to == "int" {
            converted
        } else {
            convert(&to, converted)
        });
    }

    Ok(convert(&to, expr))
}

// `T(x)`, or `(*T)(x)` for pointer targets
fn convert(to: &str, expr: Expr) -> Expr {
    let target = if to.starts_with('*') {
        Expr::paren(Expr::ident(to))
    } else {
        Expr::ident(to)
    };
    Expr::call(target, vec![expr])
}
