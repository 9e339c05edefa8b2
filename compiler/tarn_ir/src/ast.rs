//! Expression tree.
//!
//! The parser allocates every node into an `ExprArena`; children refer to
//! each other by `ExprId`. Once parsing finishes the arena is never mutated:
//! type inference and evaluation only read it.

use crate::{ExprId, Name, Span};

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// `#t` / `#f`
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// String literal (interned contents, without quotes).
    Str(Name),
    /// Variable reference.
    Var(Name),
    /// `(if cond then else)`; `and`/`or` desugar to this.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    /// `(let name value body)`; `name` is in scope inside `value` too.
    Let {
        name: Name,
        value: ExprId,
        body: ExprId,
    },
    /// `(lambda (params...) body)`
    Lambda { params: Vec<Param>, body: ExprId },
    /// `(func args...)`
    Call { func: ExprId, args: Vec<ExprId> },
    /// `empty`
    Empty,
    /// `(cons car cdr)`
    Cons { car: ExprId, cdr: ExprId },
}

/// Lambda parameter with an optional type annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Name,
    pub ty: Option<ParsedType>,
    pub span: Span,
}

/// Type annotation as written in the source.
///
/// Base names other than `int`, `bool` and `str` are kept as `Named` and
/// rejected by the type checker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedType {
    Bool,
    Int,
    Str,
    /// `(Listof T)`
    List(Box<ParsedType>),
    /// `(-> P... R)`
    Arrow {
        params: Vec<ParsedType>,
        ret: Box<ParsedType>,
    },
    /// Unrecognized base type name.
    Named(Name),
}

/// Arena of expression nodes with their source spans.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<ExprKind>,
    spans: Vec<Span>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    ///
    /// # Panics
    /// Panics if the arena grows past `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} nodes", u32::MAX));
        self.exprs.push(kind);
        self.spans.push(span);
        ExprId::new(index)
    }

    /// The node behind `id`.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    /// Source span of `id`.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
