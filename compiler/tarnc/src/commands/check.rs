//! The `check` command: type-check a Tarn source file without running it.

use tarn_diagnostic::emitter::ColorMode;

use crate::Session;

use super::{read_file, report_and_exit};

/// Type-check a file and print its principal type.
pub fn check_file(path: &str, color: ColorMode) {
    let content = read_file(path);
    let session = Session::new();
    match session.check(&content) {
        Ok(checked) => println!("{}", checked.ty),
        Err(diagnostic) => report_and_exit(&diagnostic, &content, path, color),
    }
}
