//! Literal transpilation

use crate::goast::{Expr, LitKind};
use crate::transpile::TranspiledExpr;
use std::fmt::Write;

pub fn transpile_integer(value: &str, c_type: &str) -> TranspiledExpr {
    TranspiledExpr::pure(Expr::int_lit(value), c_type)
}

pub fn transpile_floating(value: f64, c_type: &str) -> TranspiledExpr {
    let expr = Expr::BasicLit {
        kind: LitKind::Float,
        value: format!("{value:?}"),
    };
    TranspiledExpr::pure(expr, c_type)
}

/// Character literals become their numeric code point
pub fn transpile_character(value: u32, c_type: &str) -> TranspiledExpr {
    TranspiledExpr::pure(Expr::int_lit(value), c_type)
}

pub fn transpile_string(value: &str, c_type: &str) -> TranspiledExpr {
    let expr = Expr::BasicLit {
        kind: LitKind::String,
        value: quote(value),
    };
    TranspiledExpr::pure(expr, c_type)
}

/// Quote a string as a Go interpreted string literal
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');

    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() && (c as u32) < 0x80 => {
                let _ = write!(quoted, "\\x{:02x}", c as u32);
            }
            c => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote() {
        assert_eq!(quote("hello"), "\"hello\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(quote("line\n\ttab"), "\"line\\n\\ttab\"");
        assert_eq!(quote("bell\u{7}"), "\"bell\\x07\"");
        assert_eq!(quote("héllo"), "\"héllo\"");
    }

    #[test]
    fn test_literals_keep_node_type() {
        let lit = transpile_integer("42", "unsigned long");
        assert_eq!(lit.expr.to_string(), "42");
        assert_eq!(lit.c_type, "unsigned long");

        assert_eq!(transpile_floating(1.5, "double").expr.to_string(), "1.5");
        assert_eq!(transpile_floating(2.0, "double").expr.to_string(), "2.0");
        assert_eq!(transpile_character(97, "char").expr.to_string(), "97");
        assert_eq!(transpile_string("hi\n", "char [4]").expr.to_string(), "\"hi\\n\"");
    }
}
