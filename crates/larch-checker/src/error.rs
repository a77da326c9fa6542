//! Compile error types and reporting.
//!
//! Every error carries an optional source span (present whenever the
//! offending AST node recorded one) and classifies itself into one of the
//! three constructs of the error taxonomy: declaration, expression, or
//! data-type errors.

use larch_ast::Ident;
use larch_ast::nodes::OperatorKind;
use larch_source::Span;
use thiserror::Error;

use crate::types::Type;

/// The construct a [`CompileError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// Errors in a function declaration as a whole
    Declaration,
    /// Errors inside an expression
    Expression,
    /// Errors in a data-type declaration
    DataType,
}

/// Errors detected during type checking.
///
/// Within one top-level declaration the first error short-circuits that
/// declaration; the driver accumulates errors across all top-levels.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    /// A top-level function without a `::` annotation
    #[error("For now, annotations are required.")]
    MissingAnnotation {
        /// The location of the declaration
        span: Option<Span>,
    },

    /// An annotation with fewer types than the equation has arguments
    #[error(
        "The annotation for {name} has {types} types, but {name} is declared with {args} arguments"
    )]
    AnnotationArity {
        /// The declared name
        name: Ident,
        /// How many types the annotation lists
        types: usize,
        /// How many argument patterns the equation has
        args: usize,
        /// The location of the declaration
        span: Option<Span>,
    },

    /// A body whose type disagrees with the annotated return type
    #[error("Expected {name} to return type {expected}, but instead got type {found}")]
    ReturnTypeMismatch {
        /// The declared name
        name: Ident,
        /// The annotated return type
        expected: Type,
        /// The inferred body type
        found: Type,
        /// The location of the declaration
        span: Option<Span>,
    },

    /// A reference to a name not in scope
    #[error("It's not clear what \"{name}\" refers to")]
    UnknownIdentifier {
        /// The unresolved name
        name: Ident,
        /// The location of the reference
        span: Option<Span>,
    },

    /// An infix operator applied to operand types it does not exist for
    #[error("No function exists with type {left} {op} {right}")]
    InvalidInfix {
        /// The operator
        op: OperatorKind,
        /// The left operand type
        left: Type,
        /// The right operand type
        right: Type,
        /// The location of the infix expression
        span: Option<Span>,
    },

    /// An argument whose type does not fit the function's parameter type
    #[error("Function expected argument of type {expected}, but instead got argument of type {found}")]
    ArgumentMismatch {
        /// The formal parameter type
        expected: Type,
        /// The actual argument type
        found: Type,
        /// The location of the application
        span: Option<Span>,
    },

    /// An application whose left side is not a function
    #[error("Tried to apply a value of type {function} to a value of type {argument}")]
    NotAFunction {
        /// The type of the applied value
        function: Type,
        /// The type of the argument
        argument: Type,
        /// The location of the application
        span: Option<Span>,
    },

    /// Case branches that disagree on their result type
    #[error("Case expression has multiple return types: {}", format_type_list(.types))]
    BranchTypeMismatch {
        /// The branch result types, in branch order
        types: Vec<Type>,
        /// The location of the case expression
        span: Option<Span>,
    },

    /// A number-literal pattern matched against a non-Int value
    #[error("case branch is type Int when value is type {expected}")]
    PatternLiteralMismatch {
        /// The type of the matched value
        expected: Type,
        /// The location of the pattern
        span: Option<Span>,
    },

    /// A deconstruction naming a constructor the scrutinee's type does not
    /// have
    #[error("no constructor named \"{name}\" for {ty} in scope.")]
    UnknownConstructor {
        /// The constructor name
        name: Ident,
        /// The type being deconstructed
        ty: Type,
        /// The location of the pattern
        span: Option<Span>,
    },

    /// A deconstruction binding the wrong number of fields
    #[error("The constructor \"{name}\" expects {expected} arguments, but the pattern has {found}")]
    DeconstructionArity {
        /// The constructor name
        name: Ident,
        /// The constructor's field count
        expected: usize,
        /// The number of sub-patterns
        found: usize,
        /// The location of the pattern
        span: Option<Span>,
    },

    /// A deconstruction of a value whose type has no data-type head
    #[error("Cannot pattern match against a value of type {ty}")]
    UndeconstructableType {
        /// The type being deconstructed
        ty: Type,
        /// The location of the pattern
        span: Option<Span>,
    },

    /// A type name that is not defined
    #[error("It's not clear what type \"{name}\" refers to")]
    UnknownType {
        /// The unresolved type name
        name: Ident,
        /// The location of the reference
        span: Option<Span>,
    },

    /// A type application whose head is not a declared type lambda
    #[error("Malformed constructor type application")]
    MalformedTypeApplication {
        /// The location of the application
        span: Option<Span>,
    },
}

impl CompileError {
    /// Returns the construct this error belongs to.
    #[must_use]
    pub const fn construct(&self) -> Construct {
        match self {
            Self::MissingAnnotation { .. }
            | Self::AnnotationArity { .. }
            | Self::ReturnTypeMismatch { .. } => Construct::Declaration,
            Self::UnknownIdentifier { .. }
            | Self::InvalidInfix { .. }
            | Self::ArgumentMismatch { .. }
            | Self::NotAFunction { .. }
            | Self::BranchTypeMismatch { .. }
            | Self::PatternLiteralMismatch { .. }
            | Self::UnknownConstructor { .. }
            | Self::DeconstructionArity { .. }
            | Self::UndeconstructableType { .. } => Construct::Expression,
            Self::UnknownType { .. } | Self::MalformedTypeApplication { .. } => {
                Construct::DataType
            }
        }
    }

    /// Returns the source location of the error, if the offending node
    /// recorded one.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::MissingAnnotation { span }
            | Self::AnnotationArity { span, .. }
            | Self::ReturnTypeMismatch { span, .. }
            | Self::UnknownIdentifier { span, .. }
            | Self::InvalidInfix { span, .. }
            | Self::ArgumentMismatch { span, .. }
            | Self::NotAFunction { span, .. }
            | Self::BranchTypeMismatch { span, .. }
            | Self::PatternLiteralMismatch { span, .. }
            | Self::UnknownConstructor { span, .. }
            | Self::DeconstructionArity { span, .. }
            | Self::UndeconstructableType { span, .. }
            | Self::UnknownType { span, .. }
            | Self::MalformedTypeApplication { span } => *span,
        }
    }
}

fn format_type_list(types: &[Type]) -> String {
    types.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
