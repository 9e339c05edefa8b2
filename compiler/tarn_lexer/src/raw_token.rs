//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! string interning and integer conversion.

use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r";[^\n]*", logos::skip)]
    LineComment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":")]
    Colon,
    #[token("->")]
    Arrow,

    #[token("let")]
    Let,
    #[token("if")]
    If,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("lambda")]
    Lambda,
    #[token("cons")]
    Cons,
    #[token("empty")]
    Empty,

    #[token("#t")]
    True,
    #[token("#f")]
    False,

    // Wins over `Ident` for same-length matches, so `-1` is an integer
    // while `-` and `-x` stay identifiers.
    #[regex(r"-?[0-9]+", priority = 3)]
    Int,

    // No escape sequences: a string runs to the next double quote.
    #[regex(r#""[^"]*""#)]
    Str,

    // Printable runs without parens, colons, quotes or comment starts.
    #[regex(r#"[^\x00-\x20\x7f();":]+"#)]
    Ident,
}
