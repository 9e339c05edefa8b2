//! Inference results and static errors.

use tarn_diagnostic::ErrorCode;

use crate::common::{assert_fails, assert_type_error, diagnostic_of, type_of};

const MAP: &str = "
    (let map
      (lambda (f lst)
        (if (empty? lst)
          empty
          (cons (f (car lst)) (map f (cdr lst)))))
      map)";

const FILTER: &str = "
    (let filter
      (lambda (f lst)
        (if (empty? lst)
          empty
          (if (f (car lst))
              (cons (car lst) (filter f (cdr lst)))
              (filter f (cdr lst)))))
      filter)";

const ANY: &str = "
    (let any
      (lambda (f lst)
        (if (empty? lst)
          #f
          (if (f (car lst)) #t (any f (cdr lst)))))
      any)";

#[test]
fn builtins_are_polymorphic_schemes() {
    assert_eq!(type_of("="), "(-> 'a 'a bool)");
    assert_eq!(type_of("car"), "(-> (Listof 'a) 'a)");
    assert_eq!(type_of("(if (= 1 2) (= #t #f) (= \"a\" \"b\"))"), "bool");
}

#[test]
fn let_bound_identity_is_instantiated_per_use() {
    assert_eq!(type_of("(let id (lambda (x) x) (if (id #t) (id 1) (id 2)))"), "int");
    assert_eq!(type_of("(let id (lambda (x) x) (id id))"), "(-> 'a 'a)");
}

#[test]
fn lambda_parameters_stay_monomorphic() {
    assert_type_error("(lambda (f) (if (f #t) (f 1) 2))");
}

#[test]
fn free_variables_print_in_first_occurrence_order() {
    assert_eq!(type_of("(lambda (x) x)"), "(-> 'a 'a)");
    assert_eq!(type_of("(lambda (x y) (if x 0 1))"), "(-> bool 'a int)");
    assert_eq!(type_of("(lambda (x y) (if x y y))"), "(-> bool 'a 'a)");
    assert_eq!(type_of("(lambda (x y z) (if x y z))"), "(-> bool 'a 'a 'a)");
    assert_eq!(type_of("(lambda (x y z) (if x y y))"), "(-> bool 'a 'b 'a)");
    assert_eq!(type_of("(lambda (x y z) (if x z z))"), "(-> bool 'a 'b 'b)");
    assert_eq!(
        type_of(
            "(lambda (x y z1 z2 z3 z4 z5 z6 z7 z8 z9 z10 z11 z12 z13 z14 z15) (if x 0 y))"
        ),
        "(-> bool int 'a 'b 'c 'd 'e 'f 'g 'h 'i 'j 'k 'l 'm 'n 'o int)"
    );
}

#[test]
fn recursive_list_functions_generalize() {
    assert_eq!(type_of(MAP), "(-> (-> 'a 'b) (Listof 'a) (Listof 'b))");
    assert_eq!(type_of(FILTER), "(-> (-> 'a bool) (Listof 'a) (Listof 'a))");
    assert_eq!(type_of(ANY), "(-> (-> 'a bool) (Listof 'a) bool)");
}

#[test]
fn recursive_functions_infer_from_their_bodies() {
    let factorial = "(let factorial
        (lambda (n) (if (= n 0) 1 (* n (factorial (- n 1)))))
        factorial)";
    assert_eq!(type_of(factorial), "(-> int int)");

    let a_n_times = "(let a-n-times
        (lambda (n: int) (if (= n 0) \"\" (string-concat \"a\" (a-n-times (- n 1)))))
        a-n-times)";
    assert_eq!(type_of(a_n_times), "(-> int str)");
}

#[test]
fn list_parameters_infer_element_types() {
    assert_eq!(type_of("(lambda (x) (empty? x))"), "(-> (Listof 'a) bool)");
    assert_eq!(type_of("(lambda (x) (cdr x))"), "(-> (Listof 'a) (Listof 'a))");
    assert_eq!(type_of("(lambda (x) (+ 1 (car x)))"), "(-> (Listof int) int)");
    assert_eq!(
        type_of("(lambda (x:(Listof int)) x)"),
        "(-> (Listof int) (Listof int))"
    );
    assert_eq!(
        type_of("(let x (cons (cons 1 (cons 3 empty)) (cons (cons 2 empty) empty)) x)"),
        "(Listof (Listof int))"
    );
}

#[test]
fn functions_chosen_by_a_conditional() {
    assert_eq!(
        type_of("((lambda (x fn1 fn2) (if x fn1 fn2)) #f + -)"),
        "(-> int int int)"
    );
    assert_eq!(
        type_of("((lambda (x:bool fn1:(-> int int int) fn2:(-> int int int)) (if x fn1 fn2)) #f + -)"),
        "(-> int int int)"
    );
    assert_type_error("((lambda (x fn1 fn2) (if x fn1 fn2)) #f + string-concat)");
}

#[test]
fn unannotated_do_twice_adapts_to_its_argument() {
    let source = "(let doTwice
        (lambda (f x) (f (f x)))
        (let add1
            (lambda (x) (string-concat x \"world\"))
            (doTwice add1 \"hi\")))";
    assert_eq!(type_of(source), "str");

    let annotated = "(let doTwice
        (lambda (f : (-> int int) x: int) (f (f x)))
        (let add1
            (lambda (x:str) (string-concat x \"world\"))
            (doTwice add1 \"hi\")))";
    assert_type_error(annotated);
}

#[test]
fn mismatches_report_expected_and_found() {
    let diagnostic = diagnostic_of("(+ 1 \"hi\")");
    assert_eq!(diagnostic.code, ErrorCode::E2001);
    assert_eq!(
        diagnostic.message,
        "type mismatch: expected `int`, found `str`"
    );

    assert_fails("(cons 1 (cons \"hi\" empty))", ErrorCode::E2001);
    assert_fails("((lambda (x:bool) x) 1)", ErrorCode::E2001);
    assert_fails("(if 1 2 3)", ErrorCode::E2001);
    assert_fails("(if #t #f 3)", ErrorCode::E2001);
    assert_fails(
        "(let x (cons (cons 1 (cons 3 empty)) (cons (cons \"hi\" empty) empty)) x)",
        ErrorCode::E2001,
    );
}

#[test]
fn wrong_argument_counts_are_arity_errors() {
    assert_fails("((lambda (x:bool y:bool) x) #t)", ErrorCode::E2002);
    assert_fails("((lambda (x:bool y:bool) x) #t #f #t)", ErrorCode::E2002);
    assert_fails(
        "(let plus (lambda (x:int y:int) (+ x y)) (plus 3))",
        ErrorCode::E2002,
    );
    assert_fails(
        "(let plus (lambda (x:int y:int) (+ y)) (plus 2 3))",
        ErrorCode::E2002,
    );
}

#[test]
fn self_application_is_circular() {
    let diagnostic = diagnostic_of("(lambda (x) (x x))");
    assert_eq!(diagnostic.code, ErrorCode::E2004);
}

#[test]
fn unknown_names_and_annotations() {
    let diagnostic = diagnostic_of("(let x 1 y)");
    assert_eq!(diagnostic.code, ErrorCode::E2003);
    assert_eq!(diagnostic.message, "unbound variable `y`");

    assert_fails("(lambda (x:float) x)", ErrorCode::E2005);
}

#[test]
fn passing_a_string_function_where_ints_are_used() {
    assert_type_error("(let do-num-op (lambda (op) (op 2 3)) (do-num-op string-concat))");
    assert_type_error(
        "(let doTwice
          (lambda (f:(-> str str str) x:str y:str) (f x (f x y)))
          (doTwice + \"Be\" \" Rhexa\"))",
    );
}

#[test]
fn and_or_type_check_both_operands() {
    assert_eq!(type_of("(and #t #f)"), "bool");
    assert_type_error("(or #t 1)");
}

#[test]
fn polymorphic_values_are_instantiated_once_inside_lists() {
    assert_eq!(
        type_of("(let id (lambda (x) x) (cons id (cons not empty)))"),
        "(Listof (-> bool bool))"
    );
    assert_eq!(
        type_of("(cons car (cons (lambda (l:(Listof int)) 1) empty))"),
        "(Listof (-> (Listof int) int))"
    );
    assert_fails(
        "(let id (lambda (x) x) (let l (cons id (cons not empty)) ((car (cdr l)) 1)))",
        ErrorCode::E2001,
    );
    assert_fails(
        "(let id (lambda (x) x) (let l (cons id (cons not empty)) ((car l) 1)))",
        ErrorCode::E2001,
    );
}

#[test]
fn polymorphic_arguments_stay_monomorphic_inside_the_callee() {
    assert_fails(
        "(let id (lambda (x) x)
           ((lambda (l) ((car (cdr l)) 1)) (cons id (cons not empty))))",
        ErrorCode::E2001,
    );
    assert_type_error("(let id (lambda (x) x) ((lambda (f) (if (f #t) (f 1) 2)) id))");
    assert_eq!(type_of("((lambda (f) f) car)"), "(-> (Listof 'a) 'a)");
}

#[test]
fn conditional_branches_share_one_instance() {
    assert_eq!(type_of("(let id (lambda (x) x) (if #t id not))"), "(-> bool bool)");
    assert_eq!(type_of("(let id (lambda (x) x) (if #t not id))"), "(-> bool bool)");
    assert_eq!(
        type_of("(if #t car (lambda (l) (+ 1 (car l))))"),
        "(-> (Listof int) int)"
    );
    assert_eq!(type_of("(if #t = =)"), "(-> 'a 'a bool)");
}
