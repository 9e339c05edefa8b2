//! Token cursor for navigating the token stream.

use tarn_ir::Span;
use tarn_lexer::{Token, TokenKind, TokenList};

use crate::{ParseError, ParseErrorKind};

/// Position in a `TokenList`.
///
/// The list always ends in `Eof`, so `current()` is valid at every position.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.tokens.get(self.pos.saturating_sub(1)).span
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens.get(self.pos + 1).kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume and return the current token. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind` or fail describing `expected`.
    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Error for the current token when `expected` was wanted.
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        let kind = if token.kind == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: token.kind,
            }
        };
        ParseError::new(kind, token.span)
    }
}
