//! Diagnostics for the Larch parser.

mod error;

pub use error::{ParseError, ParseResult};
