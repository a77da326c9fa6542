//! Tests for declaration parsing.

use larch_ast::Ident;
use larch_ast::nodes::{AnnotationType, Argument, Expression};
use larch_parser::Parser;

fn parse_declaration(source: &str) -> larch_ast::nodes::Declaration {
    let mut parser = Parser::new(source).expect("Failed to tokenize");
    parser.parse_declaration(1).expect("Failed to parse declaration")
}

#[test]
fn test_annotated_identity() {
    let declaration = parse_declaration("id :: a -> a\nid x = x");

    assert_eq!(declaration.name, Ident::new("id"));
    assert_eq!(declaration.args.len(), 1);

    let annotation = declaration.annotation.expect("Expected an annotation");
    assert_eq!(annotation.name, Ident::new("id"));
    assert_eq!(
        annotation.types,
        vec![
            AnnotationType::Concrete(Ident::new("a")),
            AnnotationType::Concrete(Ident::new("a")),
        ]
    );
}

#[test]
fn test_unannotated_equation() {
    let declaration = parse_declaration("main = 42");

    assert!(declaration.annotation.is_none());
    assert!(declaration.args.is_empty());
    assert!(matches!(declaration.body, Expression::Number(42, _)));
}

#[test]
fn test_annotation_with_parenthesized_function_type() {
    let declaration = parse_declaration("map :: (a -> b) -> Maybe a -> Maybe b\nmap f m = m");

    let annotation = declaration.annotation.expect("Expected an annotation");
    assert_eq!(annotation.types.len(), 3);

    assert!(matches!(
        &annotation.types[0],
        AnnotationType::Parenthesized(segments) if segments.len() == 2
    ));
    assert!(matches!(&annotation.types[1], AnnotationType::Application(_, _)));
    assert!(matches!(&annotation.types[2], AnnotationType::Application(_, _)));
}

#[test]
fn test_nested_type_application_left_associates() {
    let declaration = parse_declaration("f :: Result e a -> Int\nf r = 0");

    let annotation = declaration.annotation.expect("Expected an annotation");
    let AnnotationType::Application(outer, arg) = &annotation.types[0] else {
        panic!("Expected a type application");
    };
    assert!(matches!(**arg, AnnotationType::Concrete(ref name) if *name == Ident::new("a")));
    assert!(matches!(**outer, AnnotationType::Application(_, _)));
}

#[test]
fn test_literal_and_deconstruction_arguments() {
    let declaration = parse_declaration("f 0 (Just x) = x");

    assert_eq!(declaration.args.len(), 2);
    assert!(matches!(declaration.args[0], Argument::NumberLiteral(0, _)));
    assert!(matches!(
        &declaration.args[1],
        Argument::Deconstruction { constructor, args, .. }
            if *constructor == Ident::new("Just") && args.len() == 1
    ));
}

#[test]
fn test_body_may_continue_on_an_indented_line() {
    let declaration = parse_declaration("f x =\n  x + 1");

    assert!(matches!(declaration.body, Expression::Infix { .. }));
}

#[test]
fn test_missing_equals_is_an_error() {
    let mut parser = Parser::new("f x x").expect("Failed to tokenize");
    assert!(parser.parse_declaration(1).is_err());
}
