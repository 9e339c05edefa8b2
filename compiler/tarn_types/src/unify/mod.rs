//! Constraint solving.
//!
//! Consumes an ordered constraint sequence head first and produces a
//! `Substitution`. Schemes met during solving are instantiated on the
//! spot, which is what gives each use of a let-bound name its own copy of
//! the quantified variables.

mod error;

use std::collections::VecDeque;

use tarn_ir::Span;

pub use error::UnifyError;

use crate::{Substitution, Type, TypeVarGen};

/// Equality between two types, with the span that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    pub expected: Type,
    pub found: Type,
    pub span: Span,
}

impl Constraint {
    #[inline]
    pub fn new(expected: Type, found: Type, span: Span) -> Self {
        Constraint {
            expected,
            found,
            span,
        }
    }
}

/// Solve `constraints` in order.
///
/// Each binding is substituted into the remaining constraints before the
/// next one is examined, so no variable is bound twice.
pub fn unify(
    constraints: Vec<Constraint>,
    gen: &mut TypeVarGen,
) -> Result<Substitution, UnifyError> {
    let total = constraints.len();
    let mut queue: VecDeque<Constraint> = constraints.into();
    let mut subst = Substitution::new();

    while let Some(Constraint {
        expected,
        found,
        span,
    }) = queue.pop_front()
    {
        match (expected, found) {
            (Type::Var(a), Type::Var(b)) if a == b => {}

            (expected, Type::Var(var)) => {
                let ty = match expected {
                    Type::Scheme(scheme) => scheme.instantiate(gen),
                    other => other,
                };
                if ty.occurs(var) {
                    return Err(UnifyError::InfiniteType { var, ty, span });
                }
                tracing::trace!(?var, ?ty, "bind");
                for pending in &mut queue {
                    pending.expected = pending.expected.substitute(var, &ty);
                    pending.found = pending.found.substitute(var, &ty);
                }
                subst.bind(var, ty);
            }

            (var @ Type::Var(_), found) => {
                queue.push_front(Constraint::new(found, var, span));
            }

            (Type::Scheme(lhs), Type::Scheme(rhs)) => {
                let lhs = lhs.instantiate(gen);
                let rhs = rhs.instantiate(gen);
                queue.push_front(Constraint::new(lhs, rhs, span));
            }
            (Type::Scheme(lhs), found) => {
                queue.push_front(Constraint::new(lhs.instantiate(gen), found, span));
            }
            (expected, Type::Scheme(rhs)) => {
                queue.push_front(Constraint::new(expected, rhs.instantiate(gen), span));
            }

            (Type::Bool, Type::Bool) | (Type::Int, Type::Int) | (Type::Str, Type::Str) => {}

            (Type::List(lhs), Type::List(rhs)) => {
                queue.push_front(Constraint::new(*lhs, *rhs, span));
            }

            (Type::Arrow(lhs_params, lhs_ret), Type::Arrow(rhs_params, rhs_ret)) => {
                if lhs_params.len() != rhs_params.len() {
                    return Err(UnifyError::ArityMismatch {
                        expected: lhs_params.len(),
                        found: rhs_params.len(),
                        span,
                    });
                }
                queue.push_front(Constraint::new(*lhs_ret, *rhs_ret, span));
                for (lhs, rhs) in lhs_params.into_iter().zip(rhs_params).rev() {
                    queue.push_front(Constraint::new(lhs, rhs, span));
                }
            }

            (expected, found) => {
                return Err(UnifyError::Mismatch {
                    expected,
                    found,
                    span,
                });
            }
        }
    }

    tracing::debug!(constraints = total, bindings = subst.len(), "unified");
    Ok(subst)
}
