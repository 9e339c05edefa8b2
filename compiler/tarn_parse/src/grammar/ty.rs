//! Type annotation productions.
//!
//! ```text
//! type := IDENT                   ; int, bool, str, or an unknown name
//!       | "(" Listof type ")"
//!       | "(" "->" type* type ")"
//! ```

use tarn_ir::ParsedType;
use tarn_lexer::TokenKind;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) -> Result<ParsedType, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(match self.interner.lookup(name) {
                    "int" => ParsedType::Int,
                    "bool" => ParsedType::Bool,
                    "str" => ParsedType::Str,
                    _ => ParsedType::Named(name),
                })
            }
            TokenKind::LParen => {
                let open = self.cursor.advance().span;
                let ty = match self.cursor.current_kind() {
                    TokenKind::Arrow => {
                        self.cursor.advance();
                        let mut parts = Vec::new();
                        while !self.cursor.check(TokenKind::RParen) {
                            parts.push(self.parse_type()?);
                        }
                        let Some(ret) = parts.pop() else {
                            let close = self.cursor.current_span();
                            return Err(ParseError::new(
                                ParseErrorKind::EmptyArrowType,
                                open.merge(close),
                            ));
                        };
                        ParsedType::Arrow {
                            params: parts,
                            ret: Box::new(ret),
                        }
                    }
                    TokenKind::Ident(name) if self.interner.lookup(name) == "Listof" => {
                        self.cursor.advance();
                        ParsedType::List(Box::new(self.parse_type()?))
                    }
                    _ => return Err(self.cursor.unexpected("`->` or `Listof`")),
                };
                self.cursor.expect(TokenKind::RParen, "`)`")?;
                Ok(ty)
            }
            _ => Err(self.cursor.unexpected("a type")),
        }
    }
}
