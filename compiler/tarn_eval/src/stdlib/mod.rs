//! Standard library registry.
//!
//! Every built-in has a declared type and a native implementation. The
//! type checker sees the declared types through `BuiltinTypes`; the
//! interpreter calls the implementations with already-evaluated arguments.
//! Polymorphic entries are declared as schemes over fresh variables so each
//! use site is typed on its own.

use rustc_hash::FxHashMap;
use tarn_ir::{Name, StringInterner};
use tarn_types::{BuiltinTypes, Type, TypeVarGen};

use crate::{EvalErrorKind, Value};

/// A built-in function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinFn {
    Not,
    Add,
    Sub,
    Mul,
    Eq,
    StringEq,
    StringLength,
    StringConcat,
    StringToList,
    Car,
    Cdr,
    IsEmpty,
}

impl BuiltinFn {
    pub const ALL: [BuiltinFn; 12] = [
        BuiltinFn::Not,
        BuiltinFn::Add,
        BuiltinFn::Sub,
        BuiltinFn::Mul,
        BuiltinFn::Eq,
        BuiltinFn::StringEq,
        BuiltinFn::StringLength,
        BuiltinFn::StringConcat,
        BuiltinFn::StringToList,
        BuiltinFn::Car,
        BuiltinFn::Cdr,
        BuiltinFn::IsEmpty,
    ];

    /// Source-level name.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinFn::Not => "not",
            BuiltinFn::Add => "+",
            BuiltinFn::Sub => "-",
            BuiltinFn::Mul => "*",
            BuiltinFn::Eq => "=",
            BuiltinFn::StringEq => "string=?",
            BuiltinFn::StringLength => "string-length",
            BuiltinFn::StringConcat => "string-concat",
            BuiltinFn::StringToList => "string->list",
            BuiltinFn::Car => "car",
            BuiltinFn::Cdr => "cdr",
            BuiltinFn::IsEmpty => "empty?",
        }
    }

    /// Declared type, with fresh variables from `vars` for polymorphic entries.
    pub fn signature(self, vars: &mut TypeVarGen) -> Type {
        let fun = |params: Vec<Type>, ret: Type| Type::arrow(params, ret);
        match self {
            BuiltinFn::Not => fun(vec![Type::Bool], Type::Bool),
            BuiltinFn::Add | BuiltinFn::Sub | BuiltinFn::Mul => {
                fun(vec![Type::Int, Type::Int], Type::Int)
            }
            BuiltinFn::Eq => {
                let a = vars.fresh();
                Type::scheme(vec![a], fun(vec![Type::Var(a), Type::Var(a)], Type::Bool))
            }
            BuiltinFn::StringEq => fun(vec![Type::Str, Type::Str], Type::Bool),
            BuiltinFn::StringLength => fun(vec![Type::Str], Type::Int),
            BuiltinFn::StringConcat => fun(vec![Type::Str, Type::Str], Type::Str),
            BuiltinFn::StringToList => fun(vec![Type::Str], Type::list(Type::Str)),
            BuiltinFn::Car => {
                let a = vars.fresh();
                Type::scheme(vec![a], fun(vec![Type::list(Type::Var(a))], Type::Var(a)))
            }
            BuiltinFn::Cdr => {
                let a = vars.fresh();
                let list = Type::list(Type::Var(a));
                Type::scheme(vec![a], fun(vec![list.clone()], list))
            }
            BuiltinFn::IsEmpty => {
                let a = vars.fresh();
                Type::scheme(vec![a], fun(vec![Type::list(Type::Var(a))], Type::Bool))
            }
        }
    }

    /// Run the native implementation.
    ///
    /// Argument shapes are guaranteed by type checking.
    pub fn call(self, args: &[Value]) -> Result<Value, EvalErrorKind> {
        match (self, args) {
            (BuiltinFn::Not, [Value::Bool(b)]) => Ok(Value::Bool(!b)),
            (BuiltinFn::Add, [Value::Int(a), Value::Int(b)]) => checked(a.checked_add(*b), "+"),
            (BuiltinFn::Sub, [Value::Int(a), Value::Int(b)]) => checked(a.checked_sub(*b), "-"),
            (BuiltinFn::Mul, [Value::Int(a), Value::Int(b)]) => checked(a.checked_mul(*b), "*"),
            (BuiltinFn::Eq, [a, b]) => Ok(Value::Bool(a.same(b))),
            (BuiltinFn::StringEq, [Value::Str(a), Value::Str(b)]) => Ok(Value::Bool(a == b)),
            (BuiltinFn::StringLength, [Value::Str(s)]) => {
                Ok(Value::Int(i64::try_from(s.chars().count()).unwrap_or(i64::MAX)))
            }
            (BuiltinFn::StringConcat, [Value::Str(a), Value::Str(b)]) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::Str(joined.into()))
            }
            (BuiltinFn::StringToList, [Value::Str(s)]) => {
                let mut buf = [0u8; 4];
                Ok(Value::list(
                    s.chars()
                        .map(|c| Value::string(c.encode_utf8(&mut buf)))
                        .collect(),
                ))
            }
            (BuiltinFn::Car, [Value::Cons(cell)]) => Ok(cell.car.clone()),
            (BuiltinFn::Cdr, [Value::Cons(cell)]) => Ok(cell.cdr.clone()),
            (BuiltinFn::Car | BuiltinFn::Cdr, [Value::Empty]) => {
                Err(EvalErrorKind::CalledOnEmptyList {
                    function: self.name(),
                })
            }
            (BuiltinFn::IsEmpty, [Value::Empty]) => Ok(Value::Bool(true)),
            (BuiltinFn::IsEmpty, [Value::Cons(_)]) => Ok(Value::Bool(false)),
            _ => Err(EvalErrorKind::InvalidArguments {
                function: self.name(),
            }),
        }
    }
}

fn checked(result: Option<i64>, op: &'static str) -> Result<Value, EvalErrorKind> {
    result
        .map(Value::Int)
        .ok_or(EvalErrorKind::IntegerOverflow { op })
}

/// Name to built-in table for one interner.
#[derive(Debug)]
pub struct Stdlib {
    by_name: FxHashMap<Name, BuiltinFn>,
}

impl Stdlib {
    /// Register every built-in under its name in `interner`.
    pub fn new(interner: &StringInterner) -> Self {
        let by_name = BuiltinFn::ALL
            .into_iter()
            .map(|builtin| (interner.intern(builtin.name()), builtin))
            .collect();
        Stdlib { by_name }
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<BuiltinFn> {
        self.by_name.get(&name).copied()
    }

    /// Runtime value for `name`.
    pub fn value(&self, name: Name) -> Option<Value> {
        self.get(name).map(Value::Builtin)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.by_name.len()
    }
}

impl BuiltinTypes for Stdlib {
    fn builtin_type(&self, name: Name, vars: &mut TypeVarGen) -> Option<Type> {
        self.get(name).map(|builtin| builtin.signature(vars))
    }
}
