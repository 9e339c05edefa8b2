//! Substitutions produced by unification.

use crate::{Type, TypeVar};

/// Ordered variable bindings, oldest first.
///
/// Application walks the bindings from oldest to newest, so a later binding
/// resolves any variable an earlier one left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: Vec<(TypeVar, Type)>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(&mut self, var: TypeVar, ty: Type) {
        self.bindings.push((var, ty));
    }

    /// Apply every binding to `ty`, oldest to newest.
    pub fn apply(&self, ty: &Type) -> Type {
        self.bindings
            .iter()
            .fold(ty.clone(), |acc, (var, replacement)| {
                acc.substitute(*var, replacement)
            })
    }

    /// The type `var` resolves to, if it is bound.
    #[cfg(test)]
    pub(crate) fn lookup(&self, var: TypeVar) -> Option<Type> {
        self.bindings
            .iter()
            .any(|(v, _)| *v == var)
            .then(|| self.apply(&Type::Var(var)))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
