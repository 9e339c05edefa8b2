//! Evaluation errors.
//!
//! Only `CalledOnEmptyList` and `IntegerOverflow` can happen in a
//! well-typed program. The rest mean the type checker let something
//! through that it should not have.

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarn_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },
    #[error("cannot call a value of type {found}")]
    CalledNonFunction { found: &'static str },
    #[error("`{function}` received arguments of the wrong shape")]
    InvalidArguments { function: &'static str },
    #[error("`if` condition evaluated to {found}, not a boolean")]
    NonBooleanCondition { found: &'static str },
    #[error("`{function}` called on an empty list")]
    CalledOnEmptyList { function: &'static str },
    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: &'static str },
}

impl EvalErrorKind {
    /// Whether this indicates a type checker defect rather than a
    /// legitimate runtime failure.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            EvalErrorKind::UnboundVariable { .. }
                | EvalErrorKind::CalledNonFunction { .. }
                | EvalErrorKind::InvalidArguments { .. }
                | EvalErrorKind::NonBooleanCondition { .. }
        )
    }
}

/// Evaluation error at the expression that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind.is_internal()
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::CalledOnEmptyList { .. } => ErrorCode::E6001,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6002,
            EvalErrorKind::UnboundVariable { .. }
            | EvalErrorKind::CalledNonFunction { .. }
            | EvalErrorKind::InvalidArguments { .. }
            | EvalErrorKind::NonBooleanCondition { .. } => ErrorCode::E9001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, "while evaluating this");
        if self.is_internal() {
            diag.with_note("this is a bug in the type checker: a well-typed program reached an impossible state")
        } else if let EvalErrorKind::CalledOnEmptyList { .. } = self.kind {
            diag.with_suggestion("check the list with `empty?` first")
        } else {
            diag
        }
    }
}
