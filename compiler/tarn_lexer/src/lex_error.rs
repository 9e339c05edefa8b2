//! Lexer errors.

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarn_ir::Span;
use thiserror::Error;

/// What went wrong while scanning.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("integer literal `{literal}` does not fit in 64 bits")]
    IntegerOutOfRange { literal: String },
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char },
}

/// Lexer error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0002,
            LexErrorKind::IntegerOutOfRange { .. } => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match &self.kind {
            LexErrorKind::UnterminatedString => diag
                .with_label(self.span, "string starts here")
                .with_suggestion("add a closing `\"`"),
            LexErrorKind::IntegerOutOfRange { .. } => {
                diag.with_label(self.span, "integer literal too large")
            }
            LexErrorKind::UnexpectedCharacter { .. } => {
                diag.with_label(self.span, "not valid here")
            }
        }
    }
}
