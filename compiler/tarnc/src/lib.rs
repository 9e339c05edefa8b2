//! Tarn driver.
//!
//! # Architecture
//!
//! ```text
//! source text
//!     │
//!     ▼
//! tarn_lexer::lex ──► TokenList
//!     │
//!     ▼
//! tarn_parse::parse ──► ParseOutput (ExprArena + root)
//!     │
//!     ▼
//! tarn_types::type_check ──► Type
//!     │
//!     ▼
//! tarn_eval::evaluate ──► Value
//! ```
//!
//! Each stage short-circuits: the first failure becomes the single
//! `Diagnostic` reported for the program, and nothing downstream runs.
//! A program that fails type checking is never evaluated.

pub mod commands;
mod session;

pub use session::{Checked, Outcome, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
