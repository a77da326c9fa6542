//! Abstract Syntax Tree for the Larch programming language.
//!
//! This crate defines the untyped AST produced by the parser and consumed by
//! the type checker:
//!
//! - **Modules** ([`nodes::Module`], [`nodes::TopLevel`]): a module is an
//!   ordered sequence of data-type and function declarations.
//! - **Data types** ([`nodes::DataType`]): algebraic data types with generic
//!   parameters and constructors.
//! - **Declarations** ([`nodes::Declaration`]): function equations with
//!   optional `::` annotations.
//! - **Expressions** ([`nodes::Expression`]): literals, identifiers, infix
//!   operations, juxtaposition application, `case`, and `let`.
//! - **Patterns** ([`nodes::Argument`]): identifier, number-literal, and
//!   constructor-deconstruction patterns.
//!
//! All nodes are plain owned trees (`Box`/`Vec` children, no cycles) and
//! carry a [`larch_source::Span`] for diagnostics. The [`printer`] module
//! prints an AST back to surface syntax.

pub mod ident;
pub mod nodes;
pub mod printer;

pub use ident::Ident;
