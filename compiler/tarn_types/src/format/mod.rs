//! Type printing.
//!
//! Variables are named `'a`, `'b`, ... `'z`, `'aa`, `'ab`, ... in the order
//! they are first met. The names are for display only; the same namer must
//! be reused to print several types that share variables.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Type, TypeVar};

/// Letters for the `index`-th variable: `a`..`z`, then `aa`, `ab`, ...
pub fn var_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        #[allow(clippy::cast_possible_truncation, reason = "n % 26 < 26")]
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Assigns display names to type variables in first-occurrence order.
#[derive(Debug, Default)]
pub struct TypeNamer {
    names: FxHashMap<TypeVar, usize>,
}

impl TypeNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for `var`, assigning the next one if it is new.
    pub fn name(&mut self, var: TypeVar) -> String {
        let next = self.names.len();
        let index = *self.names.entry(var).or_insert(next);
        format!("'{}", var_letters(index))
    }

    pub fn display(&mut self, ty: &Type) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    fn write_type(&mut self, out: &mut String, ty: &Type) {
        match ty {
            Type::Bool => out.push_str("bool"),
            Type::Int => out.push_str("int"),
            Type::Str => out.push_str("str"),
            Type::List(elem) => {
                out.push_str("(Listof ");
                self.write_type(out, elem);
                out.push(')');
            }
            Type::Arrow(params, ret) => {
                out.push_str("(->");
                for param in params {
                    out.push(' ');
                    self.write_type(out, param);
                }
                out.push(' ');
                self.write_type(out, ret);
                out.push(')');
            }
            Type::Var(var) => {
                let name = self.name(*var);
                out.push_str(&name);
            }
            Type::Scheme(scheme) => self.write_type(out, scheme.body()),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TypeNamer::new().display(self))
    }
}
