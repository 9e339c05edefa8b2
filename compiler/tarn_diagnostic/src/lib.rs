//! Diagnostic system for Tarn error reporting.
//!
//! Every phase error (lexing, parsing, type inference, evaluation) is turned
//! into a `Diagnostic`:
//! - an `ErrorCode` for searchability
//! - a message saying what went wrong
//! - at most one labeled span saying where
//! - notes and help lines

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
