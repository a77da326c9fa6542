//! Parse → print → parse round-trip tests.
//!
//! Printing a parsed module and reparsing it must give a structurally
//! identical module. Spans differ between the two parses, so equality is
//! checked on the printed fixpoint: the second print must equal the first.

use larch_ast::printer::print_module;
use larch_parser::parse_module;

fn assert_round_trips(source: &str) {
    let parsed = parse_module(source).expect("Failed to parse source");
    let printed = print_module(&parsed);
    let reparsed =
        parse_module(&printed).unwrap_or_else(|error| panic!("Failed to reparse {printed:?}: {error}"));

    assert_eq!(print_module(&reparsed), printed, "printing is not a fixpoint");
    assert_eq!(reparsed.items.len(), parsed.items.len());
}

#[test]
fn test_identity_round_trips() {
    assert_round_trips("id :: a -> a\nid x = x\n");
}

#[test]
fn test_arithmetic_round_trips() {
    assert_round_trips("f :: Int -> Int\nf n = n * 2 + 1\n");
}

#[test]
fn test_floats_round_trip() {
    assert_round_trips("half :: Float\nhalf = 1.0 / 2.0\n");
}

#[test]
fn test_strings_round_trip() {
    assert_round_trips("greet :: String -> String\ngreet name = \"hello \" ++ name\n");
}

#[test]
fn test_data_types_round_trip() {
    assert_round_trips("data Result error value = Err error | Ok value\n");
    assert_round_trips("data Pair = Pair Int Int\n");
    assert_round_trips("data Wrap a = Wrap (Maybe a)\n");
}

#[test]
fn test_case_round_trips() {
    assert_round_trips("f :: Int -> Int\nf n = case n of 0 -> 1; m -> m\n");
}

#[test]
fn test_map_round_trips() {
    let source = "data Result error value = Err error | Ok value\n\n\
                  map :: (a -> b) -> Result e a -> Result e b\n\
                  map f r =\n  case r of\n    Ok v -> Ok (f v)\n    Err e -> Err e\n";
    assert_round_trips(source);
}

#[test]
fn test_let_round_trips() {
    let source = "f :: Int -> Int\nf n =\n  let\n    m :: Int\n    m = n + 1\n  in m * 2\n";
    assert_round_trips(source);
}

#[test]
fn test_nested_case_round_trips() {
    let source = "f :: Int -> Int -> Int\nf a b =\n  case a of\n    0 ->\n      case b of\n        0 -> 0\n        n -> n\n    m -> m\n";
    assert_round_trips(source);
}
