//! Tarn IR - shared syntax data for every compiler phase.
//!
//! - `Name` / `StringInterner`: interned identifiers and string literals
//! - `Span`: byte ranges into the source text
//! - `ExprArena` / `ExprId`: the flat, immutable expression tree built by the parser
//! - `ParsedType`: type annotations as written in the source

mod ast;
mod expr_id;
mod interner;
mod name;
mod span;

pub use ast::{ExprArena, ExprKind, Param, ParsedType};
pub use expr_id::ExprId;
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
