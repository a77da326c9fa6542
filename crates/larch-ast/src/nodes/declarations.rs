//! Function declaration node types.

use larch_source::Span;

use super::{Argument, Expression};
use crate::ident::Ident;

// ============================================================================
// Declarations
// ============================================================================

/// A function declaration: an optional annotation plus one equation
/// (e.g. `id :: a -> a` followed by `id x = x`).
///
/// Declarations appear both at the top level and as `let` bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The `::` annotation, if present
    pub annotation: Option<Annotation>,
    /// The function name
    pub name: Ident,
    /// The argument patterns, in order
    pub args: Vec<Argument>,
    /// The body expression
    pub body: Expression,
    /// The span of this declaration in the source code
    pub span: Span,
}

impl Declaration {
    /// Creates a new declaration.
    #[must_use]
    pub const fn new(
        annotation: Option<Annotation>,
        name: Ident,
        args: Vec<Argument>,
        body: Expression,
        span: Span,
    ) -> Self {
        Self { annotation, name, args, body, span }
    }
}

// ============================================================================
// Annotations
// ============================================================================

/// A type annotation: the `name :: t1 -> t2 -> r` line preceding an equation.
///
/// The types are kept as the flat arrow-chain segments; the checker reads
/// them as a right-associated arrow chain whose last element is the return
/// type.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// The annotated name
    pub name: Ident,
    /// The arrow-chain segments, in source order (never empty)
    pub types: Vec<AnnotationType>,
    /// The span of this annotation in the source code
    pub span: Span,
}

impl Annotation {
    /// Creates a new annotation.
    #[must_use]
    pub const fn new(name: Ident, types: Vec<AnnotationType>, span: Span) -> Self {
        Self { name, types, span }
    }
}

/// One segment of an annotation's arrow chain.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationType {
    /// A single named type (e.g. `Int` or the generic `a`)
    Concrete(Ident),
    /// A parenthesized arrow chain (e.g. `(a -> b)`), itself a function type
    Parenthesized(Vec<AnnotationType>),
    /// A type application (e.g. `Maybe a`); nested applications
    /// left-associate
    Application(Box<AnnotationType>, Box<AnnotationType>),
}
