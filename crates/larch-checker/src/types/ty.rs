//! Type representation for the Larch type system.

use std::fmt;

use larch_ast::Ident;
use rustc_hash::FxHashMap;

/// Represents a type in the Larch type system.
///
/// Equality is structural. A [`Type::Generic`] is equal only to an identical
/// generic; generics are eliminated by the constraint solver, never by
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// The `Int` type.
    Num,
    /// The `Float` type.
    Float,
    /// The `String` type.
    Str,
    /// The head of a declared data type, considered as a type constructor
    /// awaiting its generic arguments.
    TypeLambda(Ident),
    /// Type-level application; left-associative (`Result e a` is
    /// `Applied(Applied(Result, e), a)`).
    Applied(Box<Type>, Box<Type>),
    /// Function type; right-associative in printing and in annotation
    /// reading.
    Lambda(Box<Type>, Box<Type>),
    /// An unbound generic parameter.
    Generic(Ident),
}

impl Type {
    /// Creates a function type.
    #[must_use]
    pub fn lambda(param: Self, result: Self) -> Self {
        Self::Lambda(Box::new(param), Box::new(result))
    }

    /// Creates a type-level application.
    #[must_use]
    pub fn applied(head: Self, argument: Self) -> Self {
        Self::Applied(Box::new(head), Box::new(argument))
    }

    /// Returns true if the type contains no generics.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        match self {
            Self::Num | Self::Float | Self::Str | Self::TypeLambda(_) => true,
            Self::Generic(_) => false,
            Self::Applied(head, argument) => head.is_ground() && argument.is_ground(),
            Self::Lambda(param, result) => param.is_ground() && result.is_ground(),
        }
    }

    /// Rewrites every bound generic to its constraint, recursing
    /// structurally through the type.
    #[must_use]
    pub fn substitute(&self, constraints: &FxHashMap<Ident, Self>) -> Self {
        match self {
            Self::Generic(name) => {
                constraints.get(name).cloned().unwrap_or_else(|| self.clone())
            }
            Self::Applied(head, argument) => Self::Applied(
                Box::new(head.substitute(constraints)),
                Box::new(argument.substitute(constraints)),
            ),
            Self::Lambda(param, result) => Self::Lambda(
                Box::new(param.substitute(constraints)),
                Box::new(result.substitute(constraints)),
            ),
            Self::Num | Self::Float | Self::Str | Self::TypeLambda(_) => self.clone(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num => write!(f, "Int"),
            Self::Float => write!(f, "Float"),
            Self::Str => write!(f, "String"),
            Self::TypeLambda(name) | Self::Generic(name) => write!(f, "{name}"),
            Self::Lambda(param, result) => {
                if matches!(param.as_ref(), Self::Lambda(_, _)) {
                    write!(f, "({param}) -> {result}")
                } else {
                    write!(f, "{param} -> {result}")
                }
            }
            Self::Applied(head, argument) => {
                if matches!(argument.as_ref(), Self::Applied(_, _) | Self::Lambda(_, _)) {
                    write!(f, "{head} ({argument})")
                } else {
                    write!(f, "{head} {argument}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_print_as_keywords() {
        assert_eq!(Type::Num.to_string(), "Int");
        assert_eq!(Type::Float.to_string(), "Float");
        assert_eq!(Type::Str.to_string(), "String");
    }

    #[test]
    fn lambdas_print_right_associated() {
        let ty = Type::lambda(Type::Num, Type::lambda(Type::Num, Type::Num));
        assert_eq!(ty.to_string(), "Int -> Int -> Int");
    }

    #[test]
    fn lambda_parameters_are_parenthesized() {
        let ty = Type::lambda(
            Type::lambda(Type::Generic(Ident::new("a")), Type::Generic(Ident::new("b"))),
            Type::Num,
        );
        assert_eq!(ty.to_string(), "(a -> b) -> Int");
    }

    #[test]
    fn applications_print_left_associated() {
        let ty = Type::applied(
            Type::applied(Type::TypeLambda(Ident::new("Result")), Type::Generic(Ident::new("e"))),
            Type::Generic(Ident::new("a")),
        );
        assert_eq!(ty.to_string(), "Result e a");
    }

    #[test]
    fn applied_argument_is_parenthesized() {
        let ty = Type::applied(
            Type::TypeLambda(Ident::new("Maybe")),
            Type::applied(Type::TypeLambda(Ident::new("Maybe")), Type::Num),
        );
        assert_eq!(ty.to_string(), "Maybe (Maybe Int)");
    }

    #[test]
    fn substitute_rewrites_generics_everywhere() {
        let mut constraints = FxHashMap::default();
        constraints.insert(Ident::new("a"), Type::Num);

        let ty = Type::lambda(
            Type::Generic(Ident::new("a")),
            Type::applied(Type::TypeLambda(Ident::new("Maybe")), Type::Generic(Ident::new("a"))),
        );
        assert_eq!(
            ty.substitute(&constraints),
            Type::lambda(Type::Num, Type::applied(Type::TypeLambda(Ident::new("Maybe")), Type::Num))
        );
    }

    #[test]
    fn substitute_leaves_unbound_generics() {
        let constraints = FxHashMap::default();
        let ty = Type::Generic(Ident::new("a"));

        assert_eq!(ty.substitute(&constraints), ty);
    }
}
