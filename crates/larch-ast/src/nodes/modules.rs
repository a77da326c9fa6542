//! Module-level node types.

use larch_source::Span;

use super::{DataType, Declaration};

// ============================================================================
// Modules
// ============================================================================

/// A Larch module: the ordered sequence of top-level items in one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// The top-level items, in source order
    pub items: Vec<TopLevel>,
}

impl Module {
    /// Creates a new module from the given items.
    #[must_use]
    pub const fn new(items: Vec<TopLevel>) -> Self { Self { items } }
}

// ============================================================================
// Top-level items
// ============================================================================

/// A single top-level item.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    /// A `data` declaration introducing an algebraic data type
    DataType(DataType),
    /// A function declaration (annotation plus equation)
    Function(Declaration),
}

impl TopLevel {
    /// Returns the span of this item in the source code.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::DataType(data_type) => data_type.span,
            Self::Function(declaration) => declaration.span,
        }
    }
}
