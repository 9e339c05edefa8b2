//! Lexer for Tarn using logos with string interning.
//!
//! Produces the fixed token set of the s-expression syntax: parentheses,
//! `:` and `->` for type annotations, the special-form keywords, and
//! boolean, integer, string and identifier literals. `;` starts a line
//! comment.

mod lex_error;
mod raw_token;
mod token;

use logos::Logos;
use tarn_ir::{Span, StringInterner};

use raw_token::RawToken;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind, TokenList};

/// Lex source code into a `TokenList` ending in `Eof`.
///
/// Stops at the first error.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let Ok(raw) = token_result else {
            return Err(classify_error(source, span, slice));
        };

        let kind = match raw {
            // Skipped by logos; never yielded.
            RawToken::LineComment => continue,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::Let => TokenKind::Let,
            RawToken::If => TokenKind::If,
            RawToken::And => TokenKind::And,
            RawToken::Or => TokenKind::Or,
            RawToken::Lambda => TokenKind::Lambda,
            RawToken::Cons => TokenKind::Cons,
            RawToken::Empty => TokenKind::Empty,
            RawToken::True => TokenKind::Bool(true),
            RawToken::False => TokenKind::Bool(false),
            RawToken::Int => match slice.parse::<i64>() {
                Ok(n) => TokenKind::Int(n),
                Err(_) => {
                    return Err(LexError::new(
                        LexErrorKind::IntegerOutOfRange {
                            literal: slice.to_owned(),
                        },
                        span,
                    ))
                }
            },
            RawToken::Str => TokenKind::Str(interner.intern(&slice[1..slice.len() - 1])),
            RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        };
        result.push(Token::new(kind, span));
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    Ok(result)
}

/// Work out why logos rejected `slice`.
fn classify_error(source: &str, span: Span, slice: &str) -> LexError {
    if slice.starts_with('"') {
        let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
        return LexError::new(
            LexErrorKind::UnterminatedString,
            Span::new(span.start, end),
        );
    }
    let ch = slice.chars().next().unwrap_or('\u{fffd}');
    LexError::new(LexErrorKind::UnexpectedCharacter { ch }, span)
}
