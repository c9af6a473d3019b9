//! End-to-end tests from JSON dumps to Go statements

use cgt_common::TranspileError;
use cgt_frontend::{resolve_type, transpile_expr, Frontend, Registry, Stmt};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn render(stmts: &[Stmt]) -> Vec<String> {
    stmts.iter().map(|s| s.to_string()).collect()
}

fn transpile(json: &str) -> (Vec<Vec<String>>, Registry) {
    let mut registry = Registry::new();
    let units = Frontend::transpile_source(&mut registry, json).expect("Should transpile");
    (units.iter().map(|unit| render(unit)).collect(), registry)
}

#[test]
fn test_main_arguments() {
    let (units, registry) = transpile(indoc! {r#"
        [
            {"node": "DeclStmt", "children": [
                {"node": "VarDecl", "name": "count", "type": "int", "children": [
                    {"node": "ImplicitCastExpr", "type": "int", "kind": "LValueToRValue", "children": [
                        {"node": "DeclRefExpr", "name": "argc", "type": "int"}
                    ]}
                ]}
            ]},
            {"node": "DeclStmt", "children": [
                {"node": "VarDecl", "name": "first", "type": "char *", "children": [
                    {"node": "ImplicitCastExpr", "type": "char *", "kind": "LValueToRValue", "children": [
                        {"node": "ArraySubscriptExpr", "type": "char *", "children": [
                            {"node": "ImplicitCastExpr", "type": "char **", "kind": "LValueToRValue", "children": [
                                {"node": "DeclRefExpr", "name": "argv", "type": "char **"}
                            ]},
                            {"node": "IntegerLiteral", "type": "int", "value": "1"}
                        ]}
                    ]}
                ]}
            ]}
        ]
    "#});

    assert_eq!(
        units,
        vec![
            vec!["var count int = len(os.Args)".to_string()],
            vec!["var first string = os.Args[1]".to_string()],
        ]
    );
    assert_eq!(registry.imports(), vec!["os".to_string()]);
}

#[test]
fn test_array_declaration_and_loop_body() {
    let (units, _) = transpile(indoc! {r#"
        [
            {"node": "DeclStmt", "children": [
                {"node": "VarDecl", "name": "squares", "type": "long [10]"}
            ]},
            {"node": "BinaryOperator", "type": "long", "operator": "=", "children": [
                {"node": "ArraySubscriptExpr", "type": "long", "children": [
                    {"node": "ImplicitCastExpr", "type": "long *", "kind": "ArrayToPointerDecay", "children": [
                        {"node": "DeclRefExpr", "name": "squares", "type": "long [10]"}
                    ]},
                    {"node": "UnaryOperator", "type": "int", "operator": "++", "is_postfix": true, "children": [
                        {"node": "DeclRefExpr", "name": "i", "type": "int"}
                    ]}
                ]},
                {"node": "ImplicitCastExpr", "type": "long", "kind": "IntegralCast", "children": [
                    {"node": "BinaryOperator", "type": "int", "operator": "*", "children": [
                        {"node": "ImplicitCastExpr", "type": "int", "kind": "LValueToRValue", "children": [
                            {"node": "DeclRefExpr", "name": "i", "type": "int"}
                        ]},
                        {"node": "ImplicitCastExpr", "type": "int", "kind": "LValueToRValue", "children": [
                            {"node": "DeclRefExpr", "name": "i", "type": "int"}
                        ]}
                    ]}
                ]}
            ]}
        ]
    "#});

    assert_eq!(units[0], vec!["var squares []int32 = make([]int32, 10, 10)"]);
    assert_eq!(units[1], vec!["squares[i] = int32(i * i)", "i++"]);
}

#[test]
fn test_null_pointer_declaration() {
    let (units, _) = transpile(indoc! {r#"
        {"node": "DeclStmt", "children": [
            {"node": "VarDecl", "name": "f", "type": "FILE *", "children": [
                {"node": "ImplicitCastExpr", "type": "FILE *", "kind": "BitCast", "children": [
                    {"node": "ParenExpr", "type": "void *", "children": [
                        {"node": "CStyleCastExpr", "type": "void *", "kind": "NullToPointer", "children": [
                            {"node": "IntegerLiteral", "type": "int", "value": "0"}
                        ]}
                    ]}
                ]}
            ]}
        ]}
    "#});

    assert_eq!(units, vec![vec!["var f *noarch.File".to_string()]]);
}

#[test]
fn test_nested_record_is_skipped() {
    let (units, registry) = transpile(indoc! {r#"
        [
            {"node": "RecordDecl", "name": "point", "kind": "struct"},
            {"node": "DeclStmt", "children": [
                {"node": "RecordDecl", "kind": "struct"},
                {"node": "VarDecl", "name": "origin", "type": "struct point"},
                {"node": "VarDecl", "name": "path", "type": "struct point *"}
            ]}
        ]
    "#});

    assert!(units[0].is_empty());
    assert_eq!(units[1], vec!["var origin point", "var path *point"]);
    assert!(registry.is_declared_type("point"));
}

#[test]
fn test_vector_member_access() {
    let (units, registry) = transpile(indoc! {r#"
        {"node": "DeclStmt", "children": [
            {"node": "VarDecl", "name": "x", "type": "double", "children": [
                {"node": "ImplicitCastExpr", "type": "double", "kind": "LValueToRValue", "children": [
                    {"node": "MemberExpr", "name": "x", "type": "double", "children": [
                        {"node": "DeclRefExpr", "name": "v", "type": "struct __double2"}
                    ]}
                ]}
            ]}
        ]}
    "#});

    assert_eq!(units, vec![vec!["var x float64 = v.X".to_string()]]);
    assert_eq!(
        registry.imports(),
        vec!["github.com/elliotchance/c2go/darwin".to_string()]
    );
}

#[test]
fn test_unresolvable_declaration_aborts() {
    let mut registry = Registry::new();
    let json = indoc! {r#"
        {"node": "DeclStmt", "children": [
            {"node": "VarDecl", "name": "state", "type": "union __unknown"}
        ]}
    "#};

    let err = Frontend::transpile_source(&mut registry, json).unwrap_err();
    assert_eq!(err, TranspileError::unresolved_type("union __unknown"));
    assert!(err.is_fatal());
}

#[test]
fn test_unknown_declaration_child_aborts() {
    let mut registry = Registry::new();
    let json = indoc! {r#"
        {"node": "DeclStmt", "children": [
            {"address": "0x7f01", "node": "TypedefDecl", "name": "myint", "type": "int"}
        ]}
    "#};

    let err = Frontend::transpile_source(&mut registry, json).unwrap_err();
    assert_eq!(err, TranspileError::unknown_declaration_child("TypedefDecl", "0x7f01"));
}

#[test]
fn test_expression_result_carries_c_type() {
    let mut registry = Registry::new();
    let nodes = Frontend::parse_nodes(indoc! {r#"
        {"node": "ArraySubscriptExpr", "type": "int [4]", "children": [
            {"node": "DeclRefExpr", "name": "grid", "type": "int [3][4]"},
            {"node": "IntegerLiteral", "type": "int", "value": "2"}
        ]}
    "#})
    .unwrap();

    let result = transpile_expr(&mut registry, &nodes[0]).unwrap();
    assert_eq!(result.expr.to_string(), "grid[2]");
    assert_eq!(result.c_type, "int [4]");
    assert_eq!(resolve_type(&mut registry, &result.c_type).unwrap(), "[]int");
}

#[test]
fn test_declared_types_resolve_as_themselves() {
    let mut registry = Registry::new();
    registry.declare_type("Point");

    assert_eq!(resolve_type(&mut registry, "Point").unwrap(), "Point");
    assert_eq!(resolve_type(&mut registry, "const Point *").unwrap(), "*Point");
    assert_eq!(resolve_type(&mut registry, "Point [2]").unwrap(), "[]Point");
}
