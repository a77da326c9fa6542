//! Typed declarations and modules.

use larch_ast::Ident;

use super::{TypedArgument, TypedExpression};
use crate::types::Type;

// ============================================================================
// Typed modules
// ============================================================================

/// A fully checked module: the accumulated typed declarations, including the
/// declarations synthesized for data constructors.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedModule {
    /// The typed declarations, in order of appearance
    pub declarations: Vec<TypedDeclaration>,
}

impl TypedModule {
    /// Creates a new typed module.
    #[must_use]
    pub const fn new(declarations: Vec<TypedDeclaration>) -> Self { Self { declarations } }
}

// ============================================================================
// Typed declarations
// ============================================================================

/// A checked declaration: name, full function type, typed argument patterns,
/// and typed body.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedDeclaration {
    /// The declared name
    pub name: Ident,
    /// The declaration's full type (arguments and return, right-folded)
    pub ty: Type,
    /// The typed argument patterns
    pub args: Vec<TypedArgument>,
    /// The typed body
    pub body: TypedExpression,
}

impl TypedDeclaration {
    /// Creates a new typed declaration.
    #[must_use]
    pub const fn new(
        name: Ident,
        ty: Type,
        args: Vec<TypedArgument>,
        body: TypedExpression,
    ) -> Self {
        Self { name, ty, args, body }
    }
}

// ============================================================================
// Typed constructors
// ============================================================================

/// A registered data constructor: its name, its 0-based tag within its data
/// type, and its field types.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedConstructor {
    /// The constructor name
    pub name: Ident,
    /// The 0-based position of the constructor within its data type
    pub tag: usize,
    /// The field types, in order
    pub fields: Vec<Type>,
}

impl TypedConstructor {
    /// Creates a new typed constructor.
    #[must_use]
    pub const fn new(name: Ident, tag: usize, fields: Vec<Type>) -> Self {
        Self { name, tag, fields }
    }
}
