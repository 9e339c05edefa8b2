//! Recursive descent parser for Tarn.
//!
//! Turns a `TokenList` into a flat `ExprArena`. A program is exactly one
//! expression. `and`/`or` are desugared into `if` here so later phases
//! never see them.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use tarn_ir::{ExprArena, ExprId, ExprKind, Span, StringInterner};
use tarn_lexer::TokenList;

/// A parsed program: the arena and its root expression.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            interner,
            arena: ExprArena::new(),
        }
    }

    /// Parse a whole program.
    pub fn parse_program(mut self) -> Result<ParseOutput, ParseError> {
        let root = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            let token = self.cursor.current();
            return Err(ParseError::new(
                ParseErrorKind::TrailingInput { found: token.kind },
                token.span,
            ));
        }
        tracing::debug!(nodes = self.arena.len(), "parsed program");
        Ok(ParseOutput {
            arena: self.arena,
            root,
        })
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc(kind, span)
    }
}

/// Parse tokens into an expression arena.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    Parser::new(tokens, interner).parse_program()
}
