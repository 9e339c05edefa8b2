//! Lexer and parser diagnostics as reported by the driver.

use tarn_diagnostic::ErrorCode;
use tarn_ir::Span;

use crate::common::{assert_fails, diagnostic_of, type_of, value_of};

#[test]
fn unfinished_let_is_unexpected_end_of_input() {
    let diagnostic = diagnostic_of("(let x");
    assert_eq!(diagnostic.code, ErrorCode::E1002);
    assert_eq!(diagnostic.primary_span(), Some(Span::new(6, 6)));
    assert_eq!(diagnostic.message, "expected an expression, found end of input");
}

#[test]
fn stray_close_paren_is_unexpected_token() {
    assert_fails(")", ErrorCode::E1001);
    assert_fails("(lambda x x)", ErrorCode::E1001);
}

#[test]
fn program_is_a_single_expression() {
    let diagnostic = diagnostic_of("1 2");
    assert_eq!(diagnostic.code, ErrorCode::E1003);
    assert_eq!(diagnostic.primary_span(), Some(Span::new(2, 3)));
}

#[test]
fn arrow_type_needs_a_return_type() {
    assert_fails("(lambda (f:(->)) f)", ErrorCode::E1004);
}

#[test]
fn lexer_errors_carry_their_codes() {
    assert_fails("\"never closed", ErrorCode::E0001);
    assert_fails("\u{1}", ErrorCode::E0002);
    assert_fails("99999999999999999999", ErrorCode::E0003);
}

#[test]
fn whitespace_around_annotation_colon_is_allowed() {
    let source = "((lambda (x: bool y :int z : int) (if x y z)) #t 1 2)";
    assert_eq!(type_of(source), "int");
    assert_eq!(value_of(source), "1");
}

#[test]
fn line_comments_are_skipped() {
    let source = "; a comment\n(let x 1 ; trailing\n x)";
    assert_eq!(value_of(source), "1");
}

#[test]
fn negative_literals_and_minus_identifier() {
    assert_eq!(value_of("-1"), "-1");
    assert_eq!(value_of("(- 1 -1)"), "2");
}

#[test]
fn calling_a_literal_parses_but_does_not_type_check() {
    assert_fails("(1 2)", ErrorCode::E2001);
}
