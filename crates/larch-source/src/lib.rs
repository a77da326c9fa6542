//! Source file handling and position tracking for the Larch compiler.
//!
//! This crate provides the foundation for accurate source tracking, which is
//! essential for quality error messages:
//!
//! - [`Span`]: a byte range within a source file
//! - [`Position`]: a specific location with line, column, and byte offset
//! - [`Source`]: a source file with efficient offset-to-position lookup
//!
//! Every AST node produced by the parser carries a [`Span`]; diagnostics
//! convert spans back to positions through a [`Source`] at rendering time.

pub mod types;

pub use types::{Position, Source, Span};
