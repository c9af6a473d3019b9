//! Identifier references

use super::ExpressionTranspiler;
use crate::goast::Expr;
use crate::transpile::TranspiledExpr;

/// Transpile a reference to a declared name.
///
/// `argc` and `argv` become their `os` package equivalents; every other name
/// passes through with its declared C type.
pub fn transpile_decl_ref(tx: &mut ExpressionTranspiler, name: &str, c_type: &str) -> TranspiledExpr {
    match name {
        "argc" => {
            tx.registry.register_import("os");
            TranspiledExpr::pure(Expr::call(Expr::ident("len"), vec![Expr::qualified("os.Args")]), "int")
        }
        "argv" => {
            tx.registry.register_import("os");
            TranspiledExpr::pure(Expr::qualified("os.Args"), "char **")
        }
        _ => TranspiledExpr::pure(Expr::ident(name), c_type),
    }
}
