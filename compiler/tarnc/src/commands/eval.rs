//! The `eval` command: run a program given on the command line.

use tarn_diagnostic::emitter::ColorMode;

use crate::Session;

use super::report_and_exit;

/// Run `source` and print its value followed by its type.
pub fn eval_source(source: &str, color: ColorMode) {
    let session = Session::new();
    match session.run(source) {
        Ok(outcome) => println!("{} : {}", outcome.value, outcome.ty),
        Err(diagnostic) => report_and_exit(&diagnostic, source, "<eval>", color),
    }
}
