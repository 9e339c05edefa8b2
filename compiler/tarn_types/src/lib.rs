//! Hindley-Milner type inference for Tarn.
//!
//! Inference runs in two passes over an immutable `ExprArena`:
//!
//! 1. **Generation** (`infer`): every sub-term yields a type and a list of
//!    equality constraints. Let-bound values are solved locally and
//!    generalized into a `TypeScheme`.
//! 2. **Solving** (`unify`): constraints are consumed in order, producing a
//!    `Substitution`. Schemes are instantiated with fresh variables each
//!    time unification meets one, so every use of a polymorphic name is
//!    typed independently.
//!
//! The substitution is then applied to the root type and every remaining
//! scheme wrapper is stripped for reporting.
//!
//! Names the program does not bind are resolved through `BuiltinTypes`.

mod context;
mod error;
mod format;
mod infer;
mod subst;
mod ty;
pub mod unify;

pub use context::{BuiltinTypes, TypeContext};
pub use error::{TypeError, TypeErrorKind};
pub use format::{var_letters, TypeNamer};
pub use infer::{InferEngine, Inferred};
pub use subst::Substitution;
pub use ty::{generalize, Type, TypeScheme, TypeVar, TypeVarGen};
pub use unify::{Constraint, UnifyError};

use tarn_ir::{ExprArena, ExprId, StringInterner};

/// Infer the principal type of `root`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn type_check(
    arena: &ExprArena,
    root: ExprId,
    builtins: &dyn BuiltinTypes,
    interner: &StringInterner,
) -> Result<Type, TypeError> {
    let mut engine = InferEngine::new(arena, interner, builtins);
    let (ty, constraints) = engine.infer(&TypeContext::Root, root)?;
    tracing::debug!(constraints = constraints.len(), "generated constraints");

    let subst = unify::unify(constraints, engine.vars_mut())?;
    let ty = subst.apply(&ty).strip_schemes();
    tracing::debug!(ty = %ty, "inferred");
    Ok(ty)
}
