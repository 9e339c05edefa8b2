//! Parse error types.

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarn_ir::Span;
use tarn_lexer::TokenKind;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },
    /// The program expression is complete but tokens remain.
    #[error("unexpected {found} after the end of the program")]
    TrailingInput { found: TokenKind },
    /// `(->)` has no return type.
    #[error("function type needs a return type")]
    EmptyArrowType,
}

/// Parse error with location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnexpectedEof { .. } => ErrorCode::E1002,
            ParseErrorKind::TrailingInput { .. } => ErrorCode::E1003,
            ParseErrorKind::EmptyArrowType => ErrorCode::E1004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => {
                diag.with_label(self.span, format!("expected {expected}"))
            }
            ParseErrorKind::UnexpectedEof { .. } => diag
                .with_label(self.span, "input ends here")
                .with_suggestion("check for a missing `)`"),
            ParseErrorKind::TrailingInput { .. } => diag
                .with_label(self.span, "extra input")
                .with_note("a program is a single expression"),
            ParseErrorKind::EmptyArrowType => diag
                .with_label(self.span, "empty function type")
                .with_suggestion("write `(-> P... R)` with at least a return type"),
        }
    }
}
