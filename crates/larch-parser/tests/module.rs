//! Tests for module parsing.

use larch_ast::Ident;
use larch_ast::nodes::{Expression, TopLevel};
use larch_parser::{ParseError, parse_module};

#[test]
fn test_empty_module() {
    let module = parse_module("").expect("Failed to parse");
    assert!(module.items.is_empty());
}

#[test]
fn test_mixed_top_levels() {
    let source = "data Maybe a = Just a | Nothing\n\nmain :: Int\nmain = 42\n";
    let module = parse_module(source).expect("Failed to parse");

    assert_eq!(module.items.len(), 2);
    assert!(matches!(module.items[0], TopLevel::DataType(_)));
    assert!(matches!(module.items[1], TopLevel::Function(_)));
}

#[test]
fn test_application_stops_at_the_next_top_level() {
    let source = "f :: a -> a\nf x = x\ng :: a -> a\ng y = y\n";
    let module = parse_module(source).expect("Failed to parse");

    assert_eq!(module.items.len(), 2);

    let TopLevel::Function(f) = &module.items[0] else {
        panic!("Expected a function");
    };
    // The body of `f` must not swallow `g`'s equation as an application
    assert!(matches!(f.body, Expression::Identifier(ref name, _) if *name == Ident::new("x")));
}

#[test]
fn test_indented_continuation_lines_belong_to_the_declaration() {
    let source = "f :: Int -> Int\nf n =\n  n + 1\n";
    let module = parse_module(source).expect("Failed to parse");

    assert_eq!(module.items.len(), 1);
}

#[test]
fn test_misaligned_top_level_is_an_error() {
    let error = parse_module("  f = 1\n").expect_err("Expected a parse error");
    assert!(matches!(error, ParseError::MisalignedTopLevel { .. }));
}

#[test]
fn test_multiple_equations_are_rejected() {
    let source = "f :: Int -> Int\nf n = n\nf m = m\n";
    let error = parse_module(source).expect_err("Expected a parse error");

    assert!(matches!(
        error,
        ParseError::MultipleEquations { name, .. } if name == Ident::new("f")
    ));
}

#[test]
fn test_blank_lines_between_items_are_ignored() {
    let source = "f :: Int\nf = 1\n\n\ng :: Int\ng = 2\n";
    let module = parse_module(source).expect("Failed to parse");

    assert_eq!(module.items.len(), 2);
}

#[test]
fn test_overflowing_number_literal_is_an_error() {
    let error =
        parse_module("f = 99999999999999999999\n").expect_err("Expected a parse error");
    assert!(matches!(error, ParseError::InvalidNumber { .. }));
}
