//! Expression productions.
//!
//! ```text
//! expr   := BOOL | INT | STR | IDENT | empty | "(" form ")"
//! form   := let IDENT expr expr
//!         | if expr expr expr
//!         | and expr expr | or expr expr
//!         | lambda "(" param* ")" expr
//!         | cons expr expr
//!         | expr expr*
//! param  := IDENT | IDENT ":" type
//! ```

use tarn_ir::{ExprId, ExprKind, Param, Span};
use tarn_lexer::TokenKind;

use crate::{ParseError, Parser};

const EXPRESSION: &str = "an expression";

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::Bool(b) => ExprKind::Bool(b),
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Str(s) => ExprKind::Str(s),
            TokenKind::Ident(name) => ExprKind::Var(name),
            TokenKind::Empty => ExprKind::Empty,
            TokenKind::LParen => return self.parse_form(),
            _ => return Err(self.cursor.unexpected(EXPRESSION)),
        };
        self.cursor.advance();
        Ok(self.alloc(kind, token.span))
    }

    /// Parse a parenthesized form. The cursor is on `(`.
    fn parse_form(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let kind = match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let()?,
            TokenKind::If => {
                self.cursor.advance();
                let cond = self.parse_expr()?;
                let then_branch = self.parse_expr()?;
                let else_branch = self.parse_expr()?;
                ExprKind::If {
                    cond,
                    then_branch,
                    else_branch,
                }
            }
            TokenKind::And | TokenKind::Or => self.parse_logical(open)?,
            TokenKind::Lambda => self.parse_lambda()?,
            TokenKind::Cons => {
                self.cursor.advance();
                let car = self.parse_expr()?;
                let cdr = self.parse_expr()?;
                ExprKind::Cons { car, cdr }
            }
            _ => self.parse_call()?,
        };
        let close = self.cursor.expect(TokenKind::RParen, "`)`")?.span;
        Ok(self.alloc(kind, open.merge(close)))
    }

    fn parse_let(&mut self) -> Result<ExprKind, ParseError> {
        self.cursor.advance();
        let TokenKind::Ident(name) = self.cursor.current_kind() else {
            return Err(self.cursor.unexpected("a variable name"));
        };
        self.cursor.advance();
        let value = self.parse_expr()?;
        let body = self.parse_expr()?;
        Ok(ExprKind::Let { name, value, body })
    }

    /// `(and a b)` becomes `(if a b #f)`, `(or a b)` becomes `(if a #t b)`.
    fn parse_logical(&mut self, open: Span) -> Result<ExprKind, ParseError> {
        let is_and = self.cursor.advance().kind == TokenKind::And;
        let lhs = self.parse_expr()?;
        let rhs = self.parse_expr()?;
        let literal_span = open.merge(self.arena.span(rhs));
        let kind = if is_and {
            let otherwise = self.alloc(ExprKind::Bool(false), literal_span);
            ExprKind::If {
                cond: lhs,
                then_branch: rhs,
                else_branch: otherwise,
            }
        } else {
            let short = self.alloc(ExprKind::Bool(true), literal_span);
            ExprKind::If {
                cond: lhs,
                then_branch: short,
                else_branch: rhs,
            }
        };
        Ok(kind)
    }

    fn parse_lambda(&mut self) -> Result<ExprKind, ParseError> {
        self.cursor.advance();
        self.cursor
            .expect(TokenKind::LParen, "`(` to start the parameter list")?;
        let mut params = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            params.push(self.parse_param()?);
        }
        self.cursor.advance();
        let body = self.parse_expr()?;
        Ok(ExprKind::Lambda { params, body })
    }

    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let token = self.cursor.current();
        let TokenKind::Ident(name) = token.kind else {
            return Err(self.cursor.unexpected("a parameter name"));
        };
        self.cursor.advance();
        if !self.cursor.check(TokenKind::Colon) {
            return Ok(Param {
                name,
                ty: None,
                span: token.span,
            });
        }
        self.cursor.advance();
        let ty_start = self.cursor.current_span();
        let ty = self.parse_type()?;
        let ty_end = self.cursor.previous_span();
        Ok(Param {
            name,
            ty: Some(ty),
            span: token.span.merge(ty_start).merge(ty_end),
        })
    }

    fn parse_call(&mut self) -> Result<ExprKind, ParseError> {
        let func = self.parse_expr()?;
        let mut args = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            args.push(self.parse_expr()?);
        }
        Ok(ExprKind::Call { func, args })
    }
}
