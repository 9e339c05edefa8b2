//! Type representation.
//!
//! Types are plain trees. A `TypeScheme` quantifies over some of the
//! variables in its body; those bound variables are invisible to
//! substitution, the occurs check and free-variable collection.

use std::fmt;

/// Unification variable.
///
/// Identities come from a `TypeVarGen` and are never reused within one
/// inference session.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TypeVar(u32);

impl TypeVar {
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// Fresh type variable source, owned by one inference session.
#[derive(Debug, Default)]
pub struct TypeVarGen {
    next: u32,
}

impl TypeVarGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self) -> TypeVar {
        let var = TypeVar(self.next);
        self.next += 1;
        var
    }

    #[inline]
    pub fn fresh_type(&mut self) -> Type {
        Type::Var(self.fresh())
    }

    /// Number of variables handed out so far.
    #[cfg(test)]
    pub(crate) fn count(&self) -> u32 {
        self.next
    }
}

/// A type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Int,
    Str,
    /// `(Listof T)`
    List(Box<Type>),
    /// `(-> P... R)`
    Arrow(Vec<Type>, Box<Type>),
    Var(TypeVar),
    Scheme(Box<TypeScheme>),
}

impl Type {
    #[inline]
    pub fn list(elem: Type) -> Type {
        Type::List(Box::new(elem))
    }

    #[inline]
    pub fn arrow(params: Vec<Type>, ret: Type) -> Type {
        Type::Arrow(params, Box::new(ret))
    }

    /// Polymorphic type over `vars`, or `body` itself when none of them occur.
    pub fn scheme(vars: Vec<TypeVar>, body: Type) -> Type {
        let scheme = TypeScheme::new(vars, body);
        if scheme.vars.is_empty() {
            scheme.body
        } else {
            Type::Scheme(Box::new(scheme))
        }
    }

    /// Short name of the outermost constructor.
    pub fn tag(&self) -> &'static str {
        match self {
            Type::Bool => "bool",
            Type::Int => "int",
            Type::Str => "str",
            Type::List(_) => "list",
            Type::Arrow(..) => "function",
            Type::Var(_) => "type variable",
            Type::Scheme(_) => "type scheme",
        }
    }

    /// Free variables in first-occurrence order, without duplicates.
    pub fn free_vars(&self) -> Vec<TypeVar> {
        let mut out = Vec::new();
        self.collect_free_vars(&[], &mut out);
        out
    }

    /// Append free variables not already in `out`.
    pub(crate) fn collect_free_vars(&self, bound: &[TypeVar], out: &mut Vec<TypeVar>) {
        match self {
            Type::Bool | Type::Int | Type::Str => {}
            Type::List(elem) => elem.collect_free_vars(bound, out),
            Type::Arrow(params, ret) => {
                for param in params {
                    param.collect_free_vars(bound, out);
                }
                ret.collect_free_vars(bound, out);
            }
            Type::Var(v) => {
                if !bound.contains(v) && !out.contains(v) {
                    out.push(*v);
                }
            }
            Type::Scheme(scheme) => {
                let mut inner: Vec<TypeVar> = bound.to_vec();
                inner.extend_from_slice(&scheme.vars);
                scheme.body.collect_free_vars(&inner, out);
            }
        }
    }

    /// Whether `var` occurs free in this type.
    pub fn occurs(&self, var: TypeVar) -> bool {
        match self {
            Type::Bool | Type::Int | Type::Str => false,
            Type::List(elem) => elem.occurs(var),
            Type::Arrow(params, ret) => params.iter().any(|p| p.occurs(var)) || ret.occurs(var),
            Type::Var(v) => *v == var,
            Type::Scheme(scheme) => !scheme.binds(var) && scheme.body.occurs(var),
        }
    }

    /// Replace free occurrences of `var` with `replacement`.
    #[must_use]
    pub fn substitute(&self, var: TypeVar, replacement: &Type) -> Type {
        match self {
            Type::Bool | Type::Int | Type::Str => self.clone(),
            Type::List(elem) => Type::list(elem.substitute(var, replacement)),
            Type::Arrow(params, ret) => Type::arrow(
                params
                    .iter()
                    .map(|p| p.substitute(var, replacement))
                    .collect(),
                ret.substitute(var, replacement),
            ),
            Type::Var(v) if *v == var => replacement.clone(),
            Type::Var(_) => self.clone(),
            Type::Scheme(scheme) if scheme.binds(var) => self.clone(),
            Type::Scheme(scheme) => Type::Scheme(Box::new(TypeScheme {
                vars: scheme.vars.clone(),
                body: scheme.body.substitute(var, replacement),
            })),
        }
    }

    /// Remove every scheme wrapper, outer and nested, keeping the bodies.
    #[must_use]
    pub fn strip_schemes(self) -> Type {
        match self {
            Type::Bool | Type::Int | Type::Str | Type::Var(_) => self,
            Type::List(elem) => Type::list(elem.strip_schemes()),
            Type::Arrow(params, ret) => Type::arrow(
                params.into_iter().map(Type::strip_schemes).collect(),
                ret.strip_schemes(),
            ),
            Type::Scheme(scheme) => scheme.body.strip_schemes(),
        }
    }
}

/// A polymorphic type: `body` quantified over `vars`.
///
/// `vars` is sorted, deduplicated, and each entry occurs free in `body`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeScheme {
    vars: Vec<TypeVar>,
    body: Type,
}

impl TypeScheme {
    /// Build a scheme, dropping any of `vars` that do not occur in `body`.
    pub fn new(mut vars: Vec<TypeVar>, body: Type) -> Self {
        vars.sort_unstable();
        vars.dedup();
        vars.retain(|v| body.occurs(*v));
        TypeScheme { vars, body }
    }

    #[inline]
    pub fn vars(&self) -> &[TypeVar] {
        &self.vars
    }

    #[inline]
    pub fn body(&self) -> &Type {
        &self.body
    }

    #[inline]
    pub fn binds(&self, var: TypeVar) -> bool {
        self.vars.binary_search(&var).is_ok()
    }

    /// Copy of the body with every bound variable replaced by a fresh one.
    ///
    /// Repeated occurrences of a bound variable map to the same fresh
    /// variable. Free variables of the body are left alone.
    pub fn instantiate(&self, gen: &mut TypeVarGen) -> Type {
        let mut ty = self.body.clone();
        for var in &self.vars {
            let fresh = gen.fresh_type();
            ty = ty.substitute(*var, &fresh);
        }
        ty
    }
}

/// Quantify `ty` over its free variables that are not in `env_vars`.
pub fn generalize(ty: Type, env_vars: &[TypeVar]) -> Type {
    let vars: Vec<TypeVar> = ty
        .free_vars()
        .into_iter()
        .filter(|v| !env_vars.contains(v))
        .collect();
    Type::scheme(vars, ty)
}
