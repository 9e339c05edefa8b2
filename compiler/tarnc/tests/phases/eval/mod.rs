//! Evaluated values, runtime errors and the printing round-trip.

use proptest::prelude::*;
use tarn_diagnostic::ErrorCode;
use tarn_eval::Value;
use tarnc::Session;

use crate::common::{assert_fails, assert_runs, value_of};

fn factorial(call: &str) -> String {
    format!(
        "(let factorial
            (lambda (n)
              (if (= n 0)
                  1
                  (* n (factorial (- n 1)))))
            {call})"
    )
}

fn smart_fib(arg: &str) -> String {
    format!(
        "(let smart-fib
            (lambda (n)
                (let helper
                  (lambda (i prev1 prev2)
                          (if (= i n)
                              prev2
                              (helper (+ i 1) (+ prev1 prev2) prev1)))
                  (helper 0 1 0)))
            (smart-fib {arg}))"
    )
}

fn hamming(s1: &str, s2: &str) -> String {
    format!(
        "(let hamming-distance (lambda (s1 s2)
            (if (not (= (string-length s1) (string-length s2)))
                -1
                (let helper
                  (lambda (l1 l2 acc)
                    (if (empty? l1)
                        acc
                        (helper (cdr l1) (cdr l2) (if (= (car l1) (car l2)) acc (+ acc 1)))))
                  (helper (string->list s1) (string->list s2) 0))))
            (hamming-distance \"{s1}\" \"{s2}\"))"
    )
}

fn with_list_functions(call: &str) -> String {
    format!(
        "(let map
            (lambda (f lst)
              (if (empty? lst) empty (cons (f (car lst)) (map f (cdr lst)))))
          (let filter
            (lambda (f lst)
              (if (empty? lst)
                  empty
                  (if (f (car lst))
                      (cons (car lst) (filter f (cdr lst)))
                      (filter f (cdr lst)))))
          (let any
            (lambda (f lst)
              (if (empty? lst) #f (if (f (car lst)) #t (any f (cdr lst)))))
            {call})))"
    )
}

#[test]
fn literals_and_bindings() {
    assert_runs("(let x 1 x)", "int", "1");
    assert_runs("(let x \"hello\" x)", "str", "\"hello\"");
    assert_runs("(let x #f x)", "bool", "#f");
    assert_runs("(let x #t (not x))", "bool", "#f");
    assert_runs(
        "(let x (cons 1 (cons 2 (cons 3 empty))) x)",
        "(Listof int)",
        "(cons 1 (cons 2 (cons 3 empty)))",
    );
}

#[test]
fn and_or_follow_their_desugaring() {
    assert_runs("(let x #t (and (not x) x))", "bool", "#f");
    assert_runs("(let x #f (and (not x) #t))", "bool", "#t");
    assert_runs("(let x #t (or (not x) x))", "bool", "#t");
    assert_runs("(let x #t (or (not x) #f))", "bool", "#f");
}

#[test]
fn equality_compares_atoms_by_value_and_cells_by_identity() {
    assert_runs("(= 2 2)", "bool", "#t");
    assert_runs("(= #f #t)", "bool", "#f");
    assert_runs("(= \"hi\" \"hi\")", "bool", "#t");
    assert_runs("(= empty empty)", "bool", "#t");
    assert_runs("(= (cons 2 empty) (cons 2 empty))", "bool", "#f");
    assert_runs("(let x (cons 2 empty) (= x x))", "bool", "#t");
}

#[test]
fn let_polymorphism_evaluates() {
    assert_runs(
        "(let id (lambda (x) x) (if (id #t) (id 1) (id 2)))",
        "int",
        "1",
    );
    assert_runs(
        "(let id (lambda (x) x) (let l (cons id (cons not empty)) ((car (cdr l)) #t)))",
        "bool",
        "#f",
    );
    assert_runs(
        "(let id (lambda (x) x) ((if #f id not) #t))",
        "bool",
        "#f",
    );
}

#[test]
fn closures_capture_their_definition_environment() {
    let add_n = "(let addN
        (lambda (N) (lambda (x) (+ x N)))
        (let add1 (addN 1) (add1 42)))";
    assert_runs(add_n, "int", "43");

    for shadow in ["2", "\"hi\""] {
        let later_shadow = format!(
            "(let add1
                (let x 1 (lambda (y) (+ x y)))
                (let x {shadow} (add1 42)))"
        );
        assert_runs(&later_shadow, "int", "43");

        let inner_shadow = format!(
            "(let add2
                (let x {shadow} (let x 2 (lambda (y:int) (+ x y))))
                (add2 42))"
        );
        assert_runs(&inner_shadow, "int", "44");
    }
}

#[test]
fn first_class_functions() {
    assert_runs(
        "(let doTwice
            (lambda (f x) (f (f x)))
            (let add1 (lambda (x) (+ x 1)) (doTwice add1 5)))",
        "int",
        "7",
    );
    assert_runs(
        "(let doTwice (lambda (f x y) (f x (f x y))) (doTwice + 5 8))",
        "int",
        "18",
    );
    assert_runs(
        "(let doTwice
            (lambda (f:(-> str str str) x:str y:str) (f x (f x y)))
            (doTwice string-concat \"Be\" \" Rhexa\"))",
        "str",
        "\"BeBe Rhexa\"",
    );
    assert_runs(
        "(let doTwice
            (lambda (f x) (f (f x)))
            (let add1
                (lambda (x) (string-concat x \"world\"))
                (doTwice add1 \"hi\")))",
        "str",
        "\"hiworldworld\"",
    );
}

#[test]
fn recursion_through_let_bound_lambdas() {
    assert_runs(&factorial("(factorial 5)"), "int", "120");
    assert_eq!(value_of(&factorial("(factorial 0)")), "1");
    assert_eq!(value_of(&factorial("(+ (factorial 4) (factorial 3))")), "30");

    let a_n_times = "(let a-n-times
        (lambda (n: int)
          (if (= n 0) \"\" (string-concat \"a\" (a-n-times (- n 1)))))
        (a-n-times 2))";
    assert_runs(
        &format!("(string-concat {a_n_times} \"b\")"),
        "str",
        "\"aab\"",
    );

    let fibonacci = "(let fibonacci
        (lambda (n)
          (if (= n 0) 0 (if (= n 1) 1 (+ (fibonacci (- n 1)) (fibonacci (- n 2))))))
        (+ (fibonacci 5) (fibonacci 6)))";
    assert_runs(fibonacci, "int", "13");
}

#[test]
fn nested_recursive_helper_sees_enclosing_parameters() {
    for (arg, expected) in [("0", "0"), ("1", "1"), ("5", "5"), ("50", "12586269025")] {
        assert_runs(&smart_fib(arg), "int", expected);
    }
    assert_fails(&smart_fib("\"hi\""), ErrorCode::E2001);
}

#[test]
fn hamming_distance() {
    assert_runs(&hamming("", ""), "int", "0");
    for (s1, s2, expected) in [
        ("a", "", "-1"),
        ("a", "a", "0"),
        ("a", "b", "1"),
        ("ACCAGGG", "ACTATGG", "2"),
        ("hellothere", "yellowhair", "5"),
    ] {
        assert_eq!(value_of(&hamming(s1, s2)), expected, "{s1} vs {s2}");
    }
}

#[test]
fn list_functions() {
    assert_runs(
        &with_list_functions("(map (lambda (n) (= n 2)) (cons 1 (cons 2 empty)))"),
        "(Listof bool)",
        "(cons #f (cons #t empty))",
    );
    assert_runs(
        &with_list_functions("(map (lambda (n) (+ n 41)) (cons 1 (cons 2 empty)))"),
        "(Listof int)",
        "(cons 42 (cons 43 empty))",
    );
    assert_runs(
        &with_list_functions("(filter (lambda (n) (= n 2)) (cons 1 (cons 2 empty)))"),
        "(Listof int)",
        "(cons 2 empty)",
    );
    assert_runs(
        &with_list_functions("(any (lambda (n) (= n 3)) (cons 1 (cons 2 empty)))"),
        "bool",
        "#f",
    );
    assert_runs(
        &with_list_functions(
            "(any (lambda (s) (= s \"l\")) (map (lambda (s) s) (string->list \"hello\")))",
        ),
        "bool",
        "#t",
    );
}

#[test]
fn list_contains() {
    let source = |list: &str| {
        format!(
            "(let list-contains
                (lambda (lst val)
                  (if (empty? lst)
                      #f
                      (if (= (car lst) val) #t (list-contains (cdr lst) val))))
                (list-contains {list} 2))"
        )
    };
    assert_runs(&source("(cons 1 empty)"), "bool", "#f");
    assert_runs(&source("(cons 1 (cons 2 empty))"), "bool", "#t");
}

#[test]
fn string_builtins() {
    assert_runs("(string-length \"hello\")", "int", "5");
    assert_runs(
        "(string->list \"hello\")",
        "(Listof str)",
        "(cons \"h\" (cons \"e\" (cons \"l\" (cons \"l\" (cons \"o\" empty)))))",
    );
    assert_runs("(cdr (cdr (cons 1 (cons 2 empty))))", "(Listof int)", "empty");
}

#[test]
fn functions_print_as_opaque_tokens() {
    assert_runs("(lambda (x) x)", "(-> 'a 'a)", "#<procedure>");
    assert_runs("car", "(-> (Listof 'a) 'a)", "#<builtin:car>");
}

#[test]
fn empty_list_access_is_a_runtime_error() {
    let session = Session::new();
    let checked = session.check("(car empty)").unwrap();
    assert_eq!(checked.ty.to_string(), "'a");

    let diagnostic = session.run("(car empty)").unwrap_err();
    assert_eq!(diagnostic.code, ErrorCode::E6001);
    assert!(diagnostic.code.is_runtime());

    assert_fails("(cdr (cdr (cons 1 empty)))", ErrorCode::E6001);
}

#[test]
fn overflow_is_a_runtime_error() {
    assert_fails("(+ 9223372036854775807 1)", ErrorCode::E6002);
    assert_fails("(* -9223372036854775808 -1)", ErrorCode::E6002);
}

#[test]
fn untaken_branch_is_never_evaluated() {
    assert_runs("(if #t 1 (car (cdr (cons 1 empty))))", "int", "1");
}

#[test]
fn session_is_reusable_across_programs() {
    let session = Session::new();
    let first = session.run("(let x 1 x)").unwrap();
    let second = session.run("(let x \"again\" x)").unwrap();
    assert_eq!(first.value.to_string(), "1");
    assert_eq!(second.value.to_string(), "\"again\"");
}

/// A literal expression whose elements all share one type.
#[derive(Clone, Debug)]
enum Literal {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Literal>),
}

impl Literal {
    fn render(&self) -> String {
        match self {
            Literal::Bool(true) => "#t".to_owned(),
            Literal::Bool(false) => "#f".to_owned(),
            Literal::Int(n) => n.to_string(),
            Literal::Str(s) => format!("\"{s}\""),
            Literal::List(items) => items.iter().rev().fold("empty".to_owned(), |tail, item| {
                format!("(cons {} {tail})", item.render())
            }),
        }
    }
}

fn literal_of_depth(depth: u32) -> BoxedStrategy<Literal> {
    let scalar = prop_oneof![
        any::<bool>().prop_map(Literal::Bool),
        any::<i64>().prop_map(Literal::Int),
        "[^\"]{0,8}".prop_map(Literal::Str),
    ];
    if depth == 0 {
        return scalar.boxed();
    }
    // Every element is drawn from one template so the list stays homogeneous.
    let list = literal_of_depth(depth - 1).prop_flat_map(|template| {
        let elements = match template {
            Literal::Bool(_) => any::<bool>().prop_map(Literal::Bool).boxed(),
            Literal::Int(_) => any::<i64>().prop_map(Literal::Int).boxed(),
            Literal::Str(_) => "[^\"]{0,8}".prop_map(Literal::Str).boxed(),
            Literal::List(_) => Just(template).boxed(),
        };
        prop::collection::vec(elements, 0..5).prop_map(Literal::List)
    });
    prop_oneof![scalar, list].boxed()
}

fn run_value(source: &str) -> Value {
    Session::new().run(source).unwrap().value
}

proptest! {
    #[test]
    fn printed_values_reparse_to_equal_values(literal in literal_of_depth(2)) {
        let source = literal.render();
        let value = run_value(&source);
        let printed = value.to_string();
        prop_assert_eq!(&printed, &source);
        prop_assert_eq!(run_value(&printed), value);
    }
}
