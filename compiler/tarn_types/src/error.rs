//! Static type errors.

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarn_ir::Span;
use thiserror::Error;

use crate::{TypeNamer, UnifyError};

/// Static error kinds. Types are already rendered, with one namer per error
/// so variables shared between the two sides print the same.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeErrorKind {
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },
    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch { expected: String, found: String },
    #[error("wrong number of arguments: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("circular type: `{var}` occurs in `{ty}`")]
    CircularType { var: String, ty: String },
    #[error("unknown type `{name}` in annotation")]
    UnknownTypeAnnotation { name: String },
}

/// A static error with the span of the offending expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub span: Span,
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, span: Span) -> Self {
        TypeError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            TypeErrorKind::TypeMismatch { .. } => ErrorCode::E2001,
            TypeErrorKind::ArityMismatch { .. } => ErrorCode::E2002,
            TypeErrorKind::UnboundVariable { .. } => ErrorCode::E2003,
            TypeErrorKind::CircularType { .. } => ErrorCode::E2004,
            TypeErrorKind::UnknownTypeAnnotation { .. } => ErrorCode::E2005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match &self.kind {
            TypeErrorKind::UnboundVariable { .. } => {
                diag.with_label(self.span, "not found in this scope")
            }
            TypeErrorKind::TypeMismatch { expected, .. } => {
                diag.with_label(self.span, format!("expected `{expected}`"))
            }
            TypeErrorKind::ArityMismatch { expected, .. } => {
                let plural = if *expected == 1 { "" } else { "s" };
                diag.with_label(self.span, format!("expects {expected} argument{plural}"))
            }
            TypeErrorKind::CircularType { .. } => {
                diag.with_label(self.span, "this would need an infinite type")
            }
            TypeErrorKind::UnknownTypeAnnotation { .. } => diag
                .with_label(self.span, "unknown type")
                .with_suggestion("use `int`, `bool`, `str`, `(Listof T)` or `(-> P... R)`"),
        }
    }
}

impl From<UnifyError> for TypeError {
    fn from(err: UnifyError) -> Self {
        let span = err.span();
        let mut namer = TypeNamer::new();
        let kind = match err {
            UnifyError::Mismatch {
                expected, found, ..
            } => TypeErrorKind::TypeMismatch {
                expected: namer.display(&expected),
                found: namer.display(&found),
            },
            UnifyError::ArityMismatch {
                expected, found, ..
            } => TypeErrorKind::ArityMismatch { expected, found },
            UnifyError::InfiniteType { var, ty, .. } => TypeErrorKind::CircularType {
                var: namer.name(var),
                ty: namer.display(&ty),
            },
        };
        TypeError::new(kind, span)
    }
}
