//! Data-type (ADT) declaration node types.

use larch_source::Span;

use crate::ident::Ident;

// ============================================================================
// Data-type declarations
// ============================================================================

/// An algebraic data type declaration
/// (e.g. `data Result error value = Err error | Ok value`).
#[derive(Debug, Clone, PartialEq)]
pub struct DataType {
    /// The name of the type (its type lambda)
    pub name: Ident,
    /// The generic parameters, in declaration order
    pub generics: Vec<Ident>,
    /// The constructors, in declaration order (never empty)
    pub constructors: Vec<Constructor>,
    /// The span of this declaration in the source code
    pub span: Span,
}

impl DataType {
    /// Creates a new data-type declaration.
    #[must_use]
    pub const fn new(
        name: Ident,
        generics: Vec<Ident>,
        constructors: Vec<Constructor>,
        span: Span,
    ) -> Self {
        Self { name, generics, constructors, span }
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// A single constructor of a data type (e.g. `Ok value`).
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    /// The constructor name
    pub name: Ident,
    /// The payload type, if any (absent means a nullary constructor)
    pub payload: Option<ConstructorType>,
    /// The span of this constructor in the source code
    pub span: Span,
}

impl Constructor {
    /// Creates a new constructor.
    #[must_use]
    pub const fn new(name: Ident, payload: Option<ConstructorType>, span: Span) -> Self {
        Self { name, payload, span }
    }
}

/// The payload of a constructor, as written in the source.
///
/// A juxtaposed sequence of field types parses as left-associated
/// `Applied` nodes; the data-type checker flattens an `Applied` spine back
/// into the field list.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructorType {
    /// A single named type (e.g. `Int`, `error`, or the type being declared)
    Concrete(Ident),
    /// Juxtaposition of two constructor types (e.g. `Int Int`)
    Applied(Box<ConstructorType>, Box<ConstructorType>),
    /// A parenthesized constructor type (e.g. `(Maybe a)`)
    Parenthesized(Box<ConstructorType>),
}
