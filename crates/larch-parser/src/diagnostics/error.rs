//! Error types for the Larch parser.

use larch_ast::Ident;
use larch_source::Span;
use thiserror::Error;

/// Result type used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur during lexing and parsing.
///
/// There is no recovery: the first error aborts the parse of the whole file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A character that does not start any token
    #[error("Unexpected character {character:?}")]
    InvalidToken {
        /// The offending character
        character: char,
        /// The location of the character
        span: Span,
    },

    /// A token that does not fit the grammar at this point
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the parser was looking for
        expected: String,
        /// A description of the token that was found
        found: String,
        /// The location of the offending token
        span: Span,
    },

    /// The file ended in the middle of a construct
    #[error("Unexpected end of file: expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for
        expected: String,
        /// The end-of-file position
        span: Span,
    },

    /// A top-level item that does not begin at column one
    #[error("Top-level declarations must begin at the start of a line")]
    MisalignedTopLevel {
        /// The location of the misaligned token
        span: Span,
    },

    /// A second equation for a name that already has one
    #[error("Multiple equations for \"{name}\" are not supported")]
    MultipleEquations {
        /// The name declared twice
        name: Ident,
        /// The location of the second equation
        span: Span,
    },

    /// A numeric literal that does not fit the value type
    #[error("Invalid number literal {literal:?}")]
    InvalidNumber {
        /// The literal text
        literal: String,
        /// The location of the literal
        span: Span,
    },
}

impl ParseError {
    /// Returns the source location of the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::InvalidToken { span, .. }
            | Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEof { span, .. }
            | Self::MisalignedTopLevel { span, .. }
            | Self::MultipleEquations { span, .. }
            | Self::InvalidNumber { span, .. } => *span,
        }
    }
}
