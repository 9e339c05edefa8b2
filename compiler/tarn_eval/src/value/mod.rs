//! Runtime values.
//!
//! Strings, cons cells and closures are reference counted and never
//! mutated after construction, so cloning a `Value` is cheap and sharing
//! is always safe.

use std::fmt;
use std::rc::Rc;

use tarn_ir::{ExprId, Name};

use crate::{BuiltinFn, FrameId};

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(Rc<str>),
    Empty,
    Cons(Rc<ConsCell>),
    Closure(Rc<Closure>),
    Builtin(BuiltinFn),
}

/// A non-empty list cell.
#[derive(Debug)]
pub struct ConsCell {
    pub car: Value,
    pub cdr: Value,
}

/// A function value with the environment it was defined in.
#[derive(Debug)]
pub struct Closure {
    pub params: Vec<Name>,
    pub body: ExprId,
    /// `None` is the empty root environment.
    pub env: Option<FrameId>,
}

impl Value {
    #[inline]
    pub fn string(s: &str) -> Value {
        Value::Str(Rc::from(s))
    }

    #[inline]
    pub fn cons(car: Value, cdr: Value) -> Value {
        Value::Cons(Rc::new(ConsCell { car, cdr }))
    }

    /// Build a proper list from `items`, first item at the head.
    pub fn list(items: Vec<Value>) -> Value {
        items
            .into_iter()
            .rev()
            .fold(Value::Empty, |tail, item| Value::cons(item, tail))
    }

    /// Shape name for internal error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Empty => "empty",
            Value::Cons(_) => "cons",
            Value::Closure(_) => "procedure",
            Value::Builtin(_) => "builtin",
        }
    }

    /// Equality used by the `=` builtin.
    ///
    /// Atoms and `empty` compare by value. Cons cells, closures and
    /// builtins compare by identity.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Empty, Value::Empty) => true,
            (Value::Cons(a), Value::Cons(b)) => Rc::ptr_eq(a, b),
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural equality, for tests and the printing round trip.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Cons(a), Value::Cons(b)) => a.car == b.car && a.cdr == b.cdr,
            _ => self.same(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("#t"),
            Value::Bool(false) => f.write_str("#f"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Empty => f.write_str("empty"),
            Value::Cons(cell) => write!(f, "(cons {} {})", cell.car, cell.cdr),
            Value::Closure(_) => f.write_str("#<procedure>"),
            Value::Builtin(builtin) => write!(f, "#<builtin:{}>", builtin.name()),
        }
    }
}
