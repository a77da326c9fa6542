//! Expression node types.

use std::fmt;

use larch_source::Span;

use super::{Argument, Declaration};
use crate::ident::Ident;

// ============================================================================
// Expressions
// ============================================================================

/// A Larch expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A reference to a declaration in scope
    Identifier(Ident, Span),
    /// An integer literal
    Number(i64, Span),
    /// A floating-point literal
    Float(f64, Span),
    /// A string literal (contents without the surrounding quotes)
    String(String, Span),
    /// An infix operation (flat, right-associated)
    Infix {
        /// The operator
        op: OperatorKind,
        /// The left operand
        left: Box<Expression>,
        /// The right operand
        right: Box<Expression>,
        /// The span of this expression in the source code
        span: Span,
    },
    /// Function application by juxtaposition; `f x y` is
    /// `Apply(Apply(f, x), y)`
    Apply {
        /// The function expression
        function: Box<Expression>,
        /// The argument expression
        argument: Box<Expression>,
        /// The span of this expression in the source code
        span: Span,
    },
    /// A `case … of …` expression
    Case {
        /// The scrutinee
        scrutinee: Box<Expression>,
        /// The branches, in source order (never empty)
        branches: Vec<CaseBranch>,
        /// The span of this expression in the source code
        span: Span,
    },
    /// A `let … in …` expression
    Let {
        /// The bindings, in source order (never empty)
        bindings: Vec<Declaration>,
        /// The body expression
        body: Box<Expression>,
        /// The span of this expression in the source code
        span: Span,
    },
    /// A parenthesized expression
    Parenthesized(Box<Expression>, Span),
}

impl Expression {
    /// Returns the span of this expression in the source code.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(_, span)
            | Self::Number(_, span)
            | Self::Float(_, span)
            | Self::String(_, span)
            | Self::Infix { span, .. }
            | Self::Apply { span, .. }
            | Self::Case { span, .. }
            | Self::Let { span, .. }
            | Self::Parenthesized(_, span) => *span,
        }
    }
}

// ============================================================================
// Case branches
// ============================================================================

/// One branch of a `case` expression: a pattern and its result expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseBranch {
    /// The pattern matched against the scrutinee
    pub pattern: Argument,
    /// The branch result expression
    pub body: Expression,
}

impl CaseBranch {
    /// Creates a new case branch.
    #[must_use]
    pub const fn new(pattern: Argument, body: Expression) -> Self { Self { pattern, body } }
}

// ============================================================================
// Operators
// ============================================================================

/// The infix operators of the surface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Numeric addition (`+`)
    Add,
    /// Numeric subtraction (`-`)
    Subtract,
    /// Numeric multiplication (`*`)
    Multiply,
    /// Numeric division (`/`)
    Divide,
    /// String concatenation (`++`)
    StringAdd,
}

impl OperatorKind {
    /// Returns the surface syntax of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::StringAdd => "++",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
