//! Command handlers for the `tarn` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! sources and reporting diagnostics live here.

use tarn_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tarn_diagnostic::Diagnostic;

mod check;
mod eval;
mod explain;
mod run;

pub use check::check_file;
pub use eval::eval_source;
pub use explain::explain_error;
pub use run::run_file;

/// Parse a `--color=<mode>` value.
pub fn parse_color_mode(value: &str) -> Option<ColorMode> {
    match value {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

/// Read a source file, exiting with a message if it can't be read.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Emit `diagnostic` to stderr with source context, then exit with status 1.
pub(super) fn report_and_exit(
    diagnostic: &Diagnostic,
    source: &str,
    path: &str,
    color: ColorMode,
) -> ! {
    let mut emitter = TerminalEmitter::stderr(color)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(diagnostic);
    emitter.flush();
    std::process::exit(1);
}
