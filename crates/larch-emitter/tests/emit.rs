//! Golden-output tests for the WebAssembly text emitter.

use larch_checker::check_module;
use larch_emitter::{EmitError, emit_module};
use larch_parser::parse_module;

fn emit(source: &str) -> Result<String, EmitError> {
    let module = parse_module(source).expect("Failed to parse source");
    let typed = check_module(&module).expect("Expected the module to type-check");
    emit_module(&typed)
}

fn emit_ok(source: &str) -> String { emit(source).expect("Expected emission to succeed") }

#[test]
fn test_identity_function() {
    let wat = emit_ok("id :: Int -> Int\nid x = x\n");

    assert_eq!(
        wat,
        "(module\n\
         \x20 (export \"id\" (func $id))\n\
         \x20 (func $id (param $x i32) (result i32)\n\
         \x20   (get_local $x)\n\
         \x20 )\n\
         )\n"
    );
}

#[test]
fn test_arithmetic() {
    let wat = emit_ok("add :: Int -> Int -> Int\nadd a b = a + b\n");

    assert!(wat.contains("(func $add (param $a i32) (param $b i32) (result i32)"));
    assert!(wat.contains("(i32.add (get_local $a) (get_local $b))"));
}

#[test]
fn test_division_is_signed() {
    let wat = emit_ok("halve :: Int -> Int\nhalve n = n / 2\n");

    assert!(wat.contains("(i32.div_s (get_local $n) (i32.const 2))"));
}

#[test]
fn test_float_operands_use_f32_instructions() {
    let wat = emit_ok("half :: Float -> Float\nhalf x = x / 2.0\n");

    assert!(wat.contains("(f32.div (get_local $x) (f32.const 2.0))"));
}

#[test]
fn test_calls() {
    let source = "double :: Int -> Int\ndouble n = n * 2\n\
                  quad :: Int -> Int\nquad n = double (double n)\n";
    let wat = emit_ok(source);

    assert!(wat.contains("(call $double (call $double (get_local $n)))"));
}

#[test]
fn test_case_lowers_to_a_select_chain() {
    let wat = emit_ok("f :: Int -> Int\nf n = case n of 0 -> 1; m -> m\n");

    assert!(wat.contains(
        "(select (i32.const 1) (get_local $n) (i32.eq (get_local $n) (i32.const 0)))"
    ));
}

#[test]
fn test_select_comparators_are_generated_in_reverse_order() {
    let wat = emit_ok("f :: Int -> Int\nf n = case n of 0 -> 10; 1 -> 20; m -> 30\n");

    // The last pattern is the default; the first pattern's comparator ends
    // up outermost
    let expected = "(select (i32.const 10) \
                    (select (i32.const 20) (i32.const 30) \
                    (i32.eq (get_local $n) (i32.const 1))) \
                    (i32.eq (get_local $n) (i32.const 0)))";
    assert!(wat.contains(expected), "unexpected select chain in {wat}");
}

#[test]
fn test_every_declaration_is_exported() {
    let source = "data Maybe a = Just a | Nothing\n\nmain :: Int\nmain = 7\n";
    let wat = emit_ok(source);

    assert!(wat.contains("(export \"Just\" (func $Just))"));
    assert!(wat.contains("(export \"Nothing\" (func $Nothing))"));
    assert!(wat.contains("(export \"main\" (func $main))"));
}

#[test]
fn test_nullary_construction_is_its_tag() {
    let wat = emit_ok("data Maybe a = Just a | Nothing\n\nmain :: Int\nmain = 7\n");

    assert!(wat.contains("(func $Nothing (result i32)\n    (i32.const 1)\n  )"));
}

#[test]
fn test_let_bindings_are_substituted_inline() {
    let source = "f :: Int\nf =\n  let\n    x :: Int\n    x = 2\n  in x * 3\n";
    let wat = emit_ok(source);

    assert!(wat.contains("(i32.mul (i32.const 2) (i32.const 3))"));
}

#[test]
fn test_case_bindings_substitute_the_scrutinee() {
    let wat = emit_ok("f :: Int -> Int\nf n = case n of 0 -> 1; m -> m * 2\n");

    assert!(wat.contains("(i32.mul (get_local $n) (i32.const 2))"));
}

#[test]
fn test_string_literals_are_unsupported() {
    let error = emit("greet :: String\ngreet = \"hi\"\n").expect_err("Expected an error");

    assert_eq!(error, EmitError::unsupported("string literals"));
}

#[test]
fn test_constructor_field_bindings_are_unsupported() {
    let source = "data Maybe a = Just a | Nothing\n\n\
                  f :: Maybe Int -> Int\nf m = case m of Just x -> 0; p -> 1\n";
    let error = emit(source).expect_err("Expected an error");

    assert_eq!(error, EmitError::unsupported("constructor field bindings"));
}
