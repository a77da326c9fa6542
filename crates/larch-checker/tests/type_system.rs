//! Tests for the type-system invariants of the constraint solver.

use larch_ast::Ident;
use larch_checker::types::{Type, type_constraints, type_eq};
use proptest::prelude::*;

fn ident(name: &str) -> Ident { Ident::new(name) }

#[test]
fn test_reflexivity_for_ground_types() {
    let samples = vec![
        Type::Num,
        Type::Float,
        Type::Str,
        Type::TypeLambda(ident("Maybe")),
        Type::applied(Type::TypeLambda(ident("Maybe")), Type::Num),
        Type::lambda(Type::Num, Type::lambda(Type::Str, Type::Float)),
        Type::lambda(
            Type::applied(Type::TypeLambda(ident("List")), Type::Num),
            Type::applied(Type::TypeLambda(ident("List")), Type::Str),
        ),
    ];

    for ty in samples {
        let constraints = type_constraints(&ty, &ty)
            .unwrap_or_else(|| panic!("{ty} must unify with itself"));
        assert!(constraints.is_empty(), "{ty} against itself bound constraints");
    }
}

#[test]
fn test_a_generic_formal_binds_every_actual() {
    let samples = vec![
        Type::Num,
        Type::Generic(ident("b")),
        Type::lambda(Type::Num, Type::Num),
        Type::applied(Type::TypeLambda(ident("Maybe")), Type::Generic(ident("c"))),
    ];

    for ty in samples {
        let constraints = type_constraints(&Type::Generic(ident("a")), &ty)
            .expect("A generic formal must bind");
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints.get(&ident("a")), Some(&ty));
    }
}

#[test]
fn test_substitution_grounds_the_result_type() {
    // `f : a -> Maybe a` applied to an Int argument
    let formal = Type::Generic(ident("a"));
    let result = Type::applied(Type::TypeLambda(ident("Maybe")), Type::Generic(ident("a")));

    let constraints =
        type_constraints(&formal, &Type::Num).expect("Expected the argument to bind");
    let substituted = result.substitute(&constraints);

    assert!(substituted.is_ground());
    assert_eq!(substituted, Type::applied(Type::TypeLambda(ident("Maybe")), Type::Num));
}

#[test]
fn test_branch_agreement_is_symmetric_through_the_or() {
    // Each direction alone is one-sided; case branches take the OR of both
    let generic = Type::Generic(ident("a"));

    assert!(type_eq(&generic, &Type::Num));
    assert!(!type_eq(&Type::Num, &generic));
    assert!(type_eq(&generic, &Type::Num) || type_eq(&Type::Num, &generic));
}

fn ground_type() -> BoxedStrategy<Type> {
    let leaf = prop_oneof![
        Just(Type::Num),
        Just(Type::Float),
        Just(Type::Str),
        "[A-Z][a-z]{0,5}".prop_map(|name| Type::TypeLambda(Ident::new(name))),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(param, result)| Type::lambda(param, result)),
            (inner.clone(), inner)
                .prop_map(|(head, argument)| Type::applied(head, argument)),
        ]
    })
    .boxed()
}

proptest! {
    #[test]
    fn prop_ground_types_are_reflexive(ty in ground_type()) {
        let constraints = type_constraints(&ty, &ty);
        prop_assert!(constraints.is_some_and(|bindings| bindings.is_empty()));
    }

    #[test]
    fn prop_a_generic_binds_any_ground_type(ty in ground_type()) {
        let generic = Type::Generic(Ident::new("a"));
        let constraints =
            type_constraints(&generic, &ty).expect("A generic formal must bind");

        prop_assert_eq!(constraints.get(&Ident::new("a")), Some(&ty));
        prop_assert_eq!(generic.substitute(&constraints), ty);
    }

    #[test]
    fn prop_ground_types_never_bind_against_themselves(ty in ground_type()) {
        prop_assert!(type_eq(&ty, &ty));
        prop_assert!(ty.is_ground());
    }
}
