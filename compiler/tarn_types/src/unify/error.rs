//! Unification errors.

use tarn_ir::Span;

use crate::{Type, TypeVar};

/// Why a constraint could not be solved.
///
/// Carries raw types; `TypeError` renders them for users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnifyError {
    /// Two types with different constructors.
    Mismatch {
        expected: Type,
        found: Type,
        span: Span,
    },
    /// Function types with different parameter counts.
    ArityMismatch {
        expected: usize,
        found: usize,
        span: Span,
    },
    /// Binding `var` to `ty` would create an infinite type.
    InfiniteType { var: TypeVar, ty: Type, span: Span },
}

impl UnifyError {
    pub fn span(&self) -> Span {
        match self {
            UnifyError::Mismatch { span, .. }
            | UnifyError::ArityMismatch { span, .. }
            | UnifyError::InfiniteType { span, .. } => *span,
        }
    }
}
