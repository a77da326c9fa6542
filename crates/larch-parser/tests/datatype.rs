//! Tests for data-type declaration parsing.

use larch_ast::Ident;
use larch_ast::nodes::ConstructorType;
use larch_parser::Parser;

fn parse_data_type(source: &str) -> larch_ast::nodes::DataType {
    let mut parser = Parser::new(source).expect("Failed to tokenize");
    parser.parse_data_type().expect("Failed to parse data type")
}

#[test]
fn test_maybe() {
    let data_type = parse_data_type("data Maybe a = Just a | Nothing");

    assert_eq!(data_type.name, Ident::new("Maybe"));
    assert_eq!(data_type.generics, vec![Ident::new("a")]);
    assert_eq!(data_type.constructors.len(), 2);

    assert_eq!(data_type.constructors[0].name, Ident::new("Just"));
    assert_eq!(
        data_type.constructors[0].payload,
        Some(ConstructorType::Concrete(Ident::new("a")))
    );

    assert_eq!(data_type.constructors[1].name, Ident::new("Nothing"));
    assert_eq!(data_type.constructors[1].payload, None);
}

#[test]
fn test_result_with_two_generics() {
    let data_type = parse_data_type("data Result error value = Err error | Ok value");

    assert_eq!(
        data_type.generics,
        vec![Ident::new("error"), Ident::new("value")]
    );
    assert_eq!(data_type.constructors[0].name, Ident::new("Err"));
    assert_eq!(data_type.constructors[1].name, Ident::new("Ok"));
}

#[test]
fn test_multiple_fields_parse_as_applications() {
    let data_type = parse_data_type("data Pair = Pair Int Int");

    let payload = data_type.constructors[0].payload.as_ref().expect("Expected a payload");
    assert!(matches!(payload, ConstructorType::Applied(_, _)));
}

#[test]
fn test_parenthesized_applied_field() {
    let data_type = parse_data_type("data Wrap a = Wrap (Maybe a)");

    let payload = data_type.constructors[0].payload.as_ref().expect("Expected a payload");
    let ConstructorType::Parenthesized(inner) = payload else {
        panic!("Expected a parenthesized payload");
    };
    assert!(matches!(**inner, ConstructorType::Applied(_, _)));
}

#[test]
fn test_missing_constructor_is_an_error() {
    let mut parser = Parser::new("data Maybe a =").expect("Failed to tokenize");
    assert!(parser.parse_data_type().is_err());
}
