//! Generic-parameter constraint solving.
//!
//! The solver answers one question: given the formal parameter type of a
//! function and the type of an actual argument, which generics of the formal
//! side must be bound, and to what? A successful answer substitutes into the
//! function's result type; `None` means the types do not unify.

use larch_ast::Ident;
use rustc_hash::FxHashMap;

use super::ty::Type;

/// A set of generic bindings produced by solving a formal type against an
/// actual type.
pub type Constraints = FxHashMap<Ident, Type>;

/// Solves `formal` against `actual`.
///
/// Binding is one-sided: generics in the formal type are bound, generics in
/// the actual type are treated structurally. The one exception is the
/// reverse-direction rule for applied type constructors, which lets a
/// polymorphic producer supply a concrete consumer.
#[must_use]
pub fn type_constraints(formal: &Type, actual: &Type) -> Option<Constraints> {
    match (formal, actual) {
        (Type::Generic(name), _) => {
            let mut constraints = Constraints::default();
            constraints.insert(name.clone(), actual.clone());
            Some(constraints)
        }
        (Type::Applied(head, argument), Type::Applied(actual_head, actual_argument)) => {
            if let (Type::TypeLambda(formal_name), Type::TypeLambda(actual_name), Type::Generic(generic)) =
                (head.as_ref(), actual_head.as_ref(), actual_argument.as_ref())
            {
                // A generic on the actual side of an application binds in
                // reverse: `Maybe Int` against `Maybe a` yields `a -> Int`
                if formal_name == actual_name {
                    let mut constraints = Constraints::default();
                    constraints.insert(generic.clone(), argument.as_ref().clone());
                    return Some(constraints);
                }
                return None;
            }

            let head_constraints = type_constraints(head, actual_head)?;
            let argument_constraints = type_constraints(argument, actual_argument)?;
            Some(merge_constraints(head_constraints, argument_constraints))
        }
        (Type::Lambda(param, result), Type::Lambda(actual_param, actual_result)) => {
            let param_constraints = type_constraints(param, actual_param)?;
            let result_constraints = type_constraints(result, actual_result)?;
            Some(merge_constraints(param_constraints, result_constraints))
        }
        _ => {
            if formal == actual {
                Some(Constraints::default())
            } else {
                None
            }
        }
    }
}

/// Unions two constraint sets. Left-biased: a clash keeps the earlier
/// binding, and no clash is reported.
#[must_use]
pub fn merge_constraints(mut left: Constraints, right: Constraints) -> Constraints {
    for (name, ty) in right {
        left.entry(name).or_insert(ty);
    }
    left
}

/// Type equality as the solver sees it: `a` equals `b` when solving `a`
/// against `b` succeeds.
#[must_use]
pub fn type_eq(a: &Type, b: &Type) -> bool { type_constraints(a, b).is_some() }

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Ident { Ident::new(name) }

    #[test]
    fn generic_formal_binds_anything() {
        let constraints =
            type_constraints(&Type::Generic(ident("a")), &Type::Num).expect("Expected bindings");

        assert_eq!(constraints.get(&ident("a")), Some(&Type::Num));
    }

    #[test]
    fn structural_equality_yields_empty_constraints() {
        let ty = Type::lambda(Type::Num, Type::Str);
        let constraints = type_constraints(&ty, &ty).expect("Expected bindings");

        assert!(constraints.is_empty());
    }

    #[test]
    fn mismatched_primitives_do_not_unify() {
        assert_eq!(type_constraints(&Type::Num, &Type::Str), None);
    }

    #[test]
    fn applications_merge_componentwise() {
        let formal = Type::applied(
            Type::applied(Type::TypeLambda(ident("Result")), Type::Generic(ident("e"))),
            Type::Generic(ident("a")),
        );
        let actual = Type::applied(
            Type::applied(Type::TypeLambda(ident("Result")), Type::Str),
            Type::Num,
        );

        let constraints = type_constraints(&formal, &actual).expect("Expected bindings");
        assert_eq!(constraints.get(&ident("e")), Some(&Type::Str));
        assert_eq!(constraints.get(&ident("a")), Some(&Type::Num));
    }

    #[test]
    fn applied_generic_on_the_actual_side_binds_in_reverse() {
        let formal = Type::applied(Type::TypeLambda(ident("Maybe")), Type::Num);
        let actual = Type::applied(Type::TypeLambda(ident("Maybe")), Type::Generic(ident("a")));

        let constraints = type_constraints(&formal, &actual).expect("Expected bindings");
        assert_eq!(constraints.get(&ident("a")), Some(&Type::Num));
    }

    #[test]
    fn reverse_rule_requires_matching_heads() {
        let formal = Type::applied(Type::TypeLambda(ident("Maybe")), Type::Num);
        let actual = Type::applied(Type::TypeLambda(ident("List")), Type::Generic(ident("a")));

        assert_eq!(type_constraints(&formal, &actual), None);
    }

    #[test]
    fn lambdas_merge_param_and_result() {
        let formal = Type::lambda(Type::Generic(ident("a")), Type::Generic(ident("b")));
        let actual = Type::lambda(Type::Num, Type::Str);

        let constraints = type_constraints(&formal, &actual).expect("Expected bindings");
        assert_eq!(constraints.get(&ident("a")), Some(&Type::Num));
        assert_eq!(constraints.get(&ident("b")), Some(&Type::Str));
    }

    #[test]
    fn merge_is_left_biased() {
        let mut left = Constraints::default();
        left.insert(ident("a"), Type::Num);
        let mut right = Constraints::default();
        right.insert(ident("a"), Type::Str);

        let merged = merge_constraints(left, right);
        assert_eq!(merged.get(&ident("a")), Some(&Type::Num));
    }

    #[test]
    fn type_eq_is_one_sided() {
        let generic = Type::Generic(ident("a"));

        assert!(type_eq(&generic, &Type::Num));
        assert!(!type_eq(&Type::Num, &generic));
    }
}
