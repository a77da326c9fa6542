//! Parser for the Larch programming language.
//!
//! This crate converts source text into the untyped AST defined by
//! `larch-ast`:
//!
//! - The [`lexer`] module tokenizes source text with `logos` and annotates
//!   every token with its span, column, and whether it begins a line.
//! - The [`parser`] module is a hand-written recursive-descent parser over
//!   that token stream. Layout is resolved with a minimal offside rule:
//!   top-level items begin at column one, continuation lines are indented
//!   past the governing column, and `case` branches / `let` bindings align
//!   on the column of their first token (`;` separates them within a line).
//! - The [`diagnostics`] module defines [`ParseError`]. There is no error
//!   recovery: the first syntax error aborts the parse.

pub mod diagnostics;
pub mod lexer;
pub mod parser;

use larch_ast::nodes::Module;

pub use crate::diagnostics::{ParseError, ParseResult};
pub use crate::parser::Parser;

/// Parses a complete module from source text.
///
/// ## Errors
///
/// Returns a [`ParseError`] on the first lexical or syntax error.
pub fn parse_module(source: &str) -> Result<Module, ParseError> {
    Parser::new(source)?.parse_module()
}
