//! Output tree definitions
//!
//! A small subset of Go's abstract syntax: just the expressions and
//! statements the transpiler produces. Printing the tree as Go source is the
//! job of a later stage; `Display` here gives a compact one-line spelling for
//! diagnostics and tests.

mod token;

pub use token::Token;

use serde::Serialize;
use std::fmt;

/// Kind of a basic literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LitKind {
    Int,
    Float,
    String,
}

/// Go expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "expr")]
pub enum Expr {
    /// Identifier; may be a type spelling such as `*int` when used as a conversion target
    Ident { name: String },
    BasicLit { kind: LitKind, value: String },
    Index { x: Box<Expr>, index: Box<Expr> },
    Selector { x: Box<Expr>, sel: String },
    Call { fun: Box<Expr>, args: Vec<Expr> },
    Star { x: Box<Expr> },
    Unary { op: Token, x: Box<Expr> },
    Binary { x: Box<Expr>, op: Token, y: Box<Expr> },
    Paren { x: Box<Expr> },
    /// `[]elt`, used as the first argument of `make`
    ArrayType { elt: Box<Expr> },
    /// `ty{elts...}`
    CompositeLit { ty: Box<Expr>, elts: Vec<Expr> },
}

/// Go variable declaration (`var name ty = value`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarSpec {
    pub name: String,
    pub ty: String,
    pub value: Option<Expr>,
}

/// Go statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stmt")]
pub enum Stmt {
    Expr { x: Expr },
    Assign { lhs: Expr, tok: Token, rhs: Expr },
    IncDec { x: Expr, tok: Token },
    Decl { spec: VarSpec },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident { name: name.into() }
    }

    /// The untyped nil value
    pub fn nil() -> Self {
        Expr::ident("nil")
    }

    pub fn int_lit(value: impl fmt::Display) -> Self {
        Expr::BasicLit {
            kind: LitKind::Int,
            value: value.to_string(),
        }
    }

    /// `pkg.Name` spelled as a selector on the package identifier
    pub fn qualified(spelling: &str) -> Self {
        match spelling.rsplit_once('.') {
            Some((pkg, name)) => Expr::selector(Expr::ident(pkg), name),
            None => Expr::ident(spelling),
        }
    }

    pub fn selector(x: Expr, sel: impl Into<String>) -> Self {
        Expr::Selector {
            x: Box::new(x),
            sel: sel.into(),
        }
    }

    pub fn index(x: Expr, index: Expr) -> Self {
        Expr::Index {
            x: Box::new(x),
            index: Box::new(index),
        }
    }

    pub fn call(fun: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            fun: Box::new(fun),
            args,
        }
    }

    pub fn star(x: Expr) -> Self {
        Expr::Star { x: Box::new(x) }
    }

    pub fn unary(op: Token, x: Expr) -> Self {
        Expr::Unary { op, x: Box::new(x) }
    }

    pub fn binary(x: Expr, op: Token, y: Expr) -> Self {
        Expr::Binary {
            x: Box::new(x),
            op,
            y: Box::new(y),
        }
    }

    pub fn paren(x: Expr) -> Self {
        Expr::Paren { x: Box::new(x) }
    }

    pub fn array_type(elt: impl Into<String>) -> Self {
        Expr::ArrayType {
            elt: Box::new(Expr::ident(elt)),
        }
    }
}

impl Stmt {
    pub fn expr(x: Expr) -> Self {
        Stmt::Expr { x }
    }

    pub fn var(name: impl Into<String>, ty: impl Into<String>, value: Option<Expr>) -> Self {
        Stmt::Decl {
            spec: VarSpec {
                name: name.into(),
                ty: ty.into(),
                value,
            },
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident { name } => write!(f, "{}", name),
            Expr::BasicLit { value, .. } => write!(f, "{}", value),
            Expr::Index { x, index } => write!(f, "{}[{}]", x, index),
            Expr::Selector { x, sel } => write!(f, "{}.{}", x, sel),
            Expr::Call { fun, args } => {
                write!(f, "{}(", fun)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Expr::Star { x } => write!(f, "*{}", x),
            Expr::Unary { op, x } => write!(f, "{}{}", op, x),
            Expr::Binary { x, op, y } => write!(f, "{} {} {}", x, op, y),
            Expr::Paren { x } => write!(f, "({})", x),
            Expr::ArrayType { elt } => write!(f, "[]{}", elt),
            Expr::CompositeLit { ty, elts } => {
                write!(f, "{}{{", ty)?;
                write_list(f, elts)?;
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expr { x } => write!(f, "{}", x),
            Stmt::Assign { lhs, tok, rhs } => write!(f, "{} {} {}", lhs, tok, rhs),
            Stmt::IncDec { x, tok } => write!(f, "{}{}", x, tok),
            Stmt::Decl { spec } => {
                write!(f, "var {} {}", spec.name, spec.ty)?;
                if let Some(value) = &spec.value {
                    write!(f, " = {}", value)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_expression() {
        let expr = Expr::index(
            Expr::qualified("os.Args"),
            Expr::binary(Expr::ident("i"), Token::Add, Expr::int_lit(1)),
        );
        assert_eq!(expr.to_string(), "os.Args[i + 1]");
    }

    #[test]
    fn test_display_make_declaration() {
        let make = Expr::call(
            Expr::ident("make"),
            vec![Expr::array_type("int"), Expr::int_lit(10), Expr::int_lit(10)],
        );
        let stmt = Stmt::var("buf", "[]int", Some(make));
        assert_eq!(stmt.to_string(), "var buf []int = make([]int, 10, 10)");
    }

    #[test]
    fn test_qualified_without_package_is_ident() {
        assert_eq!(Expr::qualified("len"), Expr::ident("len"));
    }

    #[test]
    fn test_serializes_with_tags() {
        let stmt = Stmt::IncDec {
            x: Expr::ident("i"),
            tok: Token::Inc,
        };
        let json = serde_json::to_value(&stmt).unwrap();
        assert_eq!(json["stmt"], "IncDec");
        assert_eq!(json["tok"], "++");
        assert_eq!(json["x"]["expr"], "Ident");
    }
}
