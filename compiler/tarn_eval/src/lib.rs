//! Tarn evaluator.
//!
//! Runs programs that have already passed type inference. Environments are
//! frames in an arena owned by the `Interpreter`; closures hold a frame
//! handle, which lets a let-bound lambda capture the frame that binds it.
//!
//! The standard library (`Stdlib`) lives here too: it supplies both the
//! runtime implementations and, through `tarn_types::BuiltinTypes`, the
//! declared types the checker uses.

mod environment;
mod errors;
mod interpreter;
mod stdlib;
mod value;

pub use environment::{Environment, FrameId};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::Interpreter;
pub use stdlib::{BuiltinFn, Stdlib};
pub use value::{Closure, ConsCell, Value};

use tarn_ir::{ExprArena, ExprId, StringInterner};

/// Evaluate a type-checked program from the empty environment.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(
    arena: &ExprArena,
    root: ExprId,
    stdlib: &Stdlib,
    interner: &StringInterner,
) -> Result<Value, EvalError> {
    let mut interpreter = Interpreter::new(arena, interner, stdlib);
    let result = interpreter.eval(root, None);
    tracing::debug!(frames = interpreter.frame_count(), ok = result.is_ok(), "evaluated");
    result
}
