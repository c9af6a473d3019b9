//! Parentheses, casts and brace initializers

use super::ExpressionTranspiler;
use crate::ast::Node;
use crate::goast::Expr;
use crate::transpile::{SideEffects, TranspiledExpr};
use crate::types::{cast_expr, resolve_type, NULL_TYPE};
use cgt_common::TranspileError;

// Implicit conversions that change the value's representation
const VALUE_CASTS: &[&str] = &[
    "IntegralCast",
    "FloatingCast",
    "IntegralToFloating",
    "FloatingToIntegral",
    "IntegralToBoolean",
    "FloatingToBoolean",
];

pub fn transpile_paren(
    tx: &mut ExpressionTranspiler,
    node: &Node,
    c_type: &str,
) -> Result<TranspiledExpr, TranspileError> {
    let inner = tx.transpile_child(node, 0)?;

    // `NULL` expands to `((void *)0)`
    if inner.is_null() {
        return Ok(inner);
    }

    let mut effects = SideEffects::new();
    let (x, _) = effects.absorb(inner);
    Ok(effects.finish(Expr::paren(x), c_type))
}

pub fn transpile_implicit_cast(
    tx: &mut ExpressionTranspiler,
    node: &Node,
    c_type: &str,
    cast_kind: &str,
) -> Result<TranspiledExpr, TranspileError> {
    let inner = tx.transpile_child(node, 0)?;

    if cast_kind == "NullToPointer" {
        return Ok(null_pointer(inner));
    }
    if inner.is_null() {
        return Ok(inner);
    }

    let mut effects = SideEffects::new();
    let (x, x_type) = effects.absorb(inner);

    let expr = if VALUE_CASTS.contains(&cast_kind) {
        cast_expr(tx.registry, x, &x_type, c_type)?
    } else {
        x
    };

    Ok(effects.finish(expr, c_type))
}

pub fn transpile_c_style_cast(
    tx: &mut ExpressionTranspiler,
    node: &Node,
    c_type: &str,
    cast_kind: &str,
) -> Result<TranspiledExpr, TranspileError> {
    let inner = tx.transpile_child(node, 0)?;

    if cast_kind == "NullToPointer" {
        return Ok(null_pointer(inner));
    }
    if inner.is_null() {
        return Ok(inner);
    }

    let mut effects = SideEffects::new();
    let (x, x_type) = effects.absorb(inner);
    let expr = cast_expr(tx.registry, x, &x_type, c_type)?;

    Ok(effects.finish(expr, c_type))
}

/// `{a, b, c}` becomes a composite literal of the resolved type
pub fn transpile_init_list(
    tx: &mut ExpressionTranspiler,
    node: &Node,
    c_type: &str,
) -> Result<TranspiledExpr, TranspileError> {
    let elements = node
        .children
        .iter()
        .map(|element| tx.transpile(element))
        .collect::<Result<Vec<_>, _>>()?;

    let ty = resolve_type(tx.registry, c_type)?;

    let mut effects = SideEffects::new();
    let elts = elements.into_iter().map(|element| effects.absorb(element).0).collect();

    let expr = Expr::CompositeLit {
        ty: Box::new(Expr::ident(ty)),
        elts,
    };
    Ok(effects.finish(expr, c_type))
}

// Null pointer constants become nil. The operand's own lists are kept.
fn null_pointer(inner: TranspiledExpr) -> TranspiledExpr {
    let mut effects = SideEffects::new();
    effects.absorb(inner);
    effects.finish(Expr::nil(), NULL_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOp;
    use crate::registry::Registry;
    use crate::transpile::fixtures::*;

    #[test]
    fn test_null_macro_becomes_nil() {
        let mut registry = Registry::new();
        let result = ExpressionTranspiler::new(&mut registry).transpile(&null()).unwrap();

        assert_eq!(result.expr, Expr::nil());
        assert_eq!(result.c_type, NULL_TYPE);
    }

    #[test]
    fn test_cast_over_null_stays_null() {
        let mut registry = Registry::new();
        let node = c_style("BitCast", "char *", null());

        let result = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap();
        assert!(result.is_null());
        assert_eq!(result.expr, Expr::nil());
    }

    #[test]
    fn test_paren_around_identifier_named_nil() {
        let mut registry = Registry::new();
        let node = paren("int", rvalue("nil", "int"));

        let result = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap();
        assert!(!result.is_null());
        assert_eq!(result.expr.to_string(), "(nil)");
    }

    #[test]
    fn test_paren_wraps_child() {
        let mut registry = Registry::new();
        let node = paren("int", binary(BinaryOp::Add, "int", rvalue("a", "int"), int_lit("1")));

        let result = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap();
        assert_eq!(result.expr.to_string(), "(a + 1)");
        assert_eq!(result.c_type, "int");
    }

    #[test]
    fn test_transparent_implicit_casts() {
        let mut registry = Registry::new();
        let node = implicit("ArrayToPointerDecay", "char *", decl_ref("buf", "char [8]"));

        let result = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap();
        assert_eq!(result.expr, Expr::ident("buf"));
        assert_eq!(result.c_type, "char *");
    }

    #[test]
    fn test_value_changing_implicit_cast() {
        let mut registry = Registry::new();
        let node = implicit("IntegralToFloating", "double", rvalue("n", "int"));

        let result = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap();
        assert_eq!(result.expr.to_string(), "float64(n)");
        assert_eq!(result.c_type, "double");
    }

    #[test]
    fn test_c_style_cast() {
        let mut registry = Registry::new();
        let node = c_style("IntegralCast", "unsigned char", rvalue("n", "int"));

        let result = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap();
        assert_eq!(result.expr.to_string(), "uint8(n)");
        assert_eq!(result.c_type, "unsigned char");
    }

    #[test]
    fn test_cast_to_void_keeps_operand() {
        let mut registry = Registry::new();
        let node = c_style("ToVoid", "void", rvalue("n", "int"));

        let result = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap();
        assert_eq!(result.expr, Expr::ident("n"));
    }

    #[test]
    fn test_init_list() {
        let mut registry = Registry::new();
        let node = init_list("int [3]", vec![int_lit("1"), int_lit("2"), int_lit("3")]);

        let result = ExpressionTranspiler::new(&mut registry).transpile(&node).unwrap();
        assert_eq!(result.expr.to_string(), "[]int{1, 2, 3}");
        assert_eq!(result.c_type, "int [3]");
    }
}
