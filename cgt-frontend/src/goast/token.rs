//! Go operator tokens, named after the go/token package

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Quo,
    #[serde(rename = "%")]
    Rem,

    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "^")]
    Xor,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,

    #[serde(rename = "&&")]
    LAnd,
    #[serde(rename = "||")]
    LOr,
    #[serde(rename = "!")]
    Not,

    #[serde(rename = "==")]
    Eql,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = "<")]
    Lss,
    #[serde(rename = ">")]
    Gtr,
    #[serde(rename = "<=")]
    Leq,
    #[serde(rename = ">=")]
    Geq,

    #[serde(rename = "++")]
    Inc,
    #[serde(rename = "--")]
    Dec,

    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    QuoAssign,
    #[serde(rename = "%=")]
    RemAssign,
    #[serde(rename = "&=")]
    AndAssign,
    #[serde(rename = "|=")]
    OrAssign,
    #[serde(rename = "^=")]
    XorAssign,
    #[serde(rename = "<<=")]
    ShlAssign,
    #[serde(rename = ">>=")]
    ShrAssign,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tok = match self {
            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Quo => "/",
            Token::Rem => "%",
            Token::And => "&",
            Token::Or => "|",
            Token::Xor => "^",
            Token::Shl => "<<",
            Token::Shr => ">>",
            Token::LAnd => "&&",
            Token::LOr => "||",
            Token::Not => "!",
            Token::Eql => "==",
            Token::Neq => "!=",
            Token::Lss => "<",
            Token::Gtr => ">",
            Token::Leq => "<=",
            Token::Geq => ">=",
            Token::Inc => "++",
            Token::Dec => "--",
            Token::Assign => "=",
            Token::AddAssign => "+=",
            Token::SubAssign => "-=",
            Token::MulAssign => "*=",
            Token::QuoAssign => "/=",
            Token::RemAssign => "%=",
            Token::AndAssign => "&=",
            Token::OrAssign => "|=",
            Token::XorAssign => "^=",
            Token::ShlAssign => "<<=",
            Token::ShrAssign => ">>=",
        };
        write!(f, "{}", tok)
    }
}
