//! Typing context and the built-in name seam.

use tarn_ir::Name;

use crate::{Substitution, Type, TypeVar, TypeVarGen};

/// Types for names that are not bound by the program.
///
/// Consulted only after the context misses. Implementations return a fresh
/// type per lookup, built from `vars`, so polymorphic entries come back as
/// schemes over variables that belong to the current session.
pub trait BuiltinTypes {
    fn builtin_type(&self, name: Name, vars: &mut TypeVarGen) -> Option<Type>;
}

/// No built-ins at all.
impl BuiltinTypes for () {
    fn builtin_type(&self, _name: Name, _vars: &mut TypeVarGen) -> Option<Type> {
        None
    }
}

/// Name to type bindings, innermost first.
///
/// Frames borrow their parent, so extending a context never copies it and
/// the extension is dropped when the sub-term is done.
#[derive(Debug)]
pub enum TypeContext<'a> {
    Root,
    Frame {
        /// Searched front to back; the first match wins.
        bindings: Vec<(Name, Type)>,
        parent: &'a TypeContext<'a>,
    },
}

impl<'a> TypeContext<'a> {
    /// Child context with a single binding.
    pub fn bind(&'a self, name: Name, ty: Type) -> TypeContext<'a> {
        self.extend(vec![(name, ty)])
    }

    /// Child context with several bindings.
    pub fn extend(&'a self, bindings: Vec<(Name, Type)>) -> TypeContext<'a> {
        TypeContext::Frame {
            bindings,
            parent: self,
        }
    }

    pub fn lookup(&self, name: Name) -> Option<&Type> {
        let mut ctx = self;
        loop {
            match ctx {
                TypeContext::Root => return None,
                TypeContext::Frame { bindings, parent } => {
                    if let Some((_, ty)) = bindings.iter().find(|(n, _)| *n == name) {
                        return Some(ty);
                    }
                    ctx = *parent;
                }
            }
        }
    }

    /// Free variables of every bound type after applying `subst`.
    pub fn free_vars_under(&self, subst: &Substitution) -> Vec<TypeVar> {
        let mut out = Vec::new();
        let mut ctx = self;
        while let TypeContext::Frame { bindings, parent } = ctx {
            for (_, ty) in bindings {
                subst.apply(ty).collect_free_vars(&[], &mut out);
            }
            ctx = *parent;
        }
        out
    }
}
