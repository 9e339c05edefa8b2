//! Shared test utilities for phase tests.
//!
//! Every helper runs a fresh `Session`, so tests never share interned names
//! or type variable counters.

use tarn_diagnostic::{Diagnostic, ErrorCode};
use tarnc::Session;

/// Type-check `source` and render its principal type.
pub fn type_of(source: &str) -> String {
    match Session::new().check(source) {
        Ok(checked) => checked.ty.to_string(),
        Err(diagnostic) => panic!("expected `{source}` to type-check, got:\n{diagnostic}"),
    }
}

/// Run `source` and render its value.
pub fn value_of(source: &str) -> String {
    match Session::new().run(source) {
        Ok(outcome) => outcome.value.to_string(),
        Err(diagnostic) => panic!("expected `{source}` to run, got:\n{diagnostic}"),
    }
}

/// Assert both the principal type and the printed value of `source`.
pub fn assert_runs(source: &str, ty: &str, value: &str) {
    pretty_assertions::assert_eq!(type_of(source), ty, "type of {source}");
    pretty_assertions::assert_eq!(value_of(source), value, "value of {source}");
}

/// Run `source`, expecting the pipeline to stop with a diagnostic.
pub fn diagnostic_of(source: &str) -> Diagnostic {
    match Session::new().run(source) {
        Ok(outcome) => panic!(
            "expected `{source}` to fail, got {} : {}",
            outcome.value, outcome.ty
        ),
        Err(diagnostic) => diagnostic,
    }
}

/// Assert that `source` fails with `code`.
pub fn assert_fails(source: &str, code: ErrorCode) {
    let diagnostic = diagnostic_of(source);
    assert_eq!(
        diagnostic.code, code,
        "wrong code for `{source}`:\n{diagnostic}"
    );
}

/// Assert that `source` is rejected before evaluation.
pub fn assert_type_error(source: &str) {
    let diagnostic = diagnostic_of(source);
    assert!(
        diagnostic.code.as_str().starts_with("E2"),
        "expected a type error for `{source}`, got:\n{diagnostic}"
    );
}
