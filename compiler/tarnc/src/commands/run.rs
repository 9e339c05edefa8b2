//! The `run` command: parse, type-check, and evaluate a Tarn source file.

use tarn_diagnostic::emitter::ColorMode;

use crate::Session;

use super::{read_file, report_and_exit};

/// Run a Tarn source file and print its value.
pub fn run_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let session = Session::new();
    match session.run(&content) {
        Ok(outcome) => println!("{}", outcome.value),
        Err(diagnostic) => report_and_exit(&diagnostic, &content, path, color),
    }
}
