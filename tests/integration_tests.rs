//! Integration tests for the PhonemaScript engine pipeline
//!
//! Each test drives the full lex → assemble → execute pipeline through the public driver,
//! with register presets standing in for literal values (the phoneme alphabet has none).

use phonema::diagnostics::ErrorKind;
use phonema::{RegisterStore, Value, run, run_with_store};
use phonema_core::lang::registers::RegisterId;

fn num_list(ns: &[i64]) -> Value {
    Value::List(ns.iter().map(|n| Value::Num(*n)).collect())
}

#[test]
fn test_assignment_round_trip() {
    // With n preset to 5, `d a n` yields d == 5.
    let mut store = RegisterStore::new();
    store.set(RegisterId::Num, Value::Num(5)).unwrap();
    run_with_store("d a n", &mut store).unwrap();
    assert_eq!(store.get(RegisterId::Data), Value::Num(5));
}

#[test]
fn test_cross_type_equality_is_false() {
    // n=5 and s="5" compare unequal: cross-type comparison is always false.
    let mut store = RegisterStore::new();
    store.set(RegisterId::Num, Value::Num(5)).unwrap();
    store.set(RegisterId::Str, Value::Str("5".to_string())).unwrap();
    run_with_store("n e s", &mut store).unwrap();
    assert_eq!(store.get(RegisterId::Bool), Value::Bool(false));
}

#[test]
fn test_boolean_and_or_forms() {
    let mut store = RegisterStore::new();
    store.set(RegisterId::Bool, Value::Bool(true)).unwrap();
    store.set(RegisterId::Data, Value::Bool(false)).unwrap();

    run_with_store("b i d", &mut store).unwrap();
    assert_eq!(store.get(RegisterId::Bool), Value::Bool(false));

    store.set(RegisterId::Bool, Value::Bool(true)).unwrap();
    run_with_store("b o d", &mut store).unwrap();
    assert_eq!(store.get(RegisterId::Bool), Value::Bool(true));
}

#[test]
fn test_conditional_emits_only_when_true() {
    let mut store = RegisterStore::new();
    store.set(RegisterId::Bool, Value::Bool(true)).unwrap();
    store.set(RegisterId::Str, Value::Str("hi".to_string())).unwrap();
    let output = run_with_store("ea b o s", &mut store).unwrap();
    assert_eq!(output, vec![Value::Str("hi".to_string())]);

    store.set(RegisterId::Bool, Value::Bool(false)).unwrap();
    let output = run_with_store("ea b o s", &mut store).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_loop_emits_elements_and_drops_binding() {
    let mut store = RegisterStore::new();
    store.set(RegisterId::List, num_list(&[1, 2, 3])).unwrap();
    let output = run_with_store("oo l o x", &mut store).unwrap();
    assert_eq!(output, vec![Value::Num(1), Value::Num(2), Value::Num(3)]);
    assert_eq!(store.binding('x'), None, "no binding named x survives the statement");
}

#[test]
fn test_loop_binding_feeds_other_operators() {
    // Accumulate the list into n: each iteration combines the element into the register.
    let mut store = RegisterStore::new();
    store.set(RegisterId::List, num_list(&[1, 2, 3])).unwrap();
    store.set(RegisterId::Num, Value::Num(0)).unwrap();
    run_with_store("oo l n oi k", &mut store).unwrap();
    assert_eq!(store.get(RegisterId::Num), Value::Num(6));
}

#[test]
fn test_binding_outside_loop_is_undefined_register() {
    let mut store = RegisterStore::new();
    let err = run_with_store("q a n", &mut store).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UndefinedRegister);
}

#[test]
fn test_error_determinism_for_unclassifiable_input() {
    // A digit is always a lex error at that exact offset, never another kind.
    for _ in 0..3 {
        let err = run("o 5").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lex);
        assert_eq!((err.span.start, err.span.end), (2, 3));
    }
}

#[test]
fn test_multi_line_program_end_to_end() {
    let mut store = RegisterStore::new();
    store.set(RegisterId::Num, Value::Num(5)).unwrap();
    store.set(RegisterId::List, num_list(&[7, 8])).unwrap();
    let source = "d a n\nn e d\nea b oo l o x";
    let output = run_with_store(source, &mut store).unwrap();
    // d a n: d ← 5; n e d: b ← true; loop emits both elements.
    assert_eq!(store.get(RegisterId::Bool), Value::Bool(true));
    assert_eq!(output, vec![Value::Num(7), Value::Num(8)]);
}

#[test]
fn test_process_marker_lifecycle() {
    let outcome = run("aa p").unwrap();
    assert_eq!(
        outcome.store.get(RegisterId::Proc),
        Value::Process(phonema::ProcessState::Executed)
    );
}

#[test]
fn test_fresh_store_per_run() {
    // Runs do not leak state into each other: the driver builds a fresh store each time.
    let first = run("d a n").unwrap();
    let second = run("o d").unwrap();
    assert_eq!(first.store.get(RegisterId::Data), Value::Num(0));
    assert_eq!(second.output, vec![Value::Str(String::new())]);
}

#[test]
fn test_output_values_render_for_the_sink() {
    let mut store = RegisterStore::new();
    store.set(RegisterId::List, num_list(&[1, 2])).unwrap();
    let output = run_with_store("o l", &mut store).unwrap();
    assert_eq!(output[0].to_string(), "[1, 2]");
}
