//! Typed patterns.

use larch_ast::Ident;

use crate::types::Type;

/// A typed pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedArgument {
    /// An identifier pattern, carrying the type it binds its name to
    Identifier(Type, Ident),
    /// An integer literal pattern
    NumberLiteral(i64),
    /// A constructor deconstruction with its resolved tag
    Deconstruction {
        /// The constructor name
        constructor: Ident,
        /// The constructor's 0-based tag within its data type
        tag: usize,
        /// The typed field sub-patterns
        args: Vec<TypedArgument>,
    },
}
