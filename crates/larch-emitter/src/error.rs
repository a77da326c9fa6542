//! Emitter error types.

use thiserror::Error;

/// Errors raised while lowering a typed module to WebAssembly text.
///
/// The backend's value model is i32/f32 scalars; constructs outside it are
/// reported rather than miscompiled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// A construct the WebAssembly backend has no lowering for
    #[error("The WebAssembly backend cannot emit {construct}")]
    Unsupported {
        /// A description of the construct
        construct: String,
    },
}

impl EmitError {
    /// Creates an [`EmitError::Unsupported`] for the given construct.
    #[must_use]
    pub fn unsupported(construct: impl Into<String>) -> Self {
        Self::Unsupported { construct: construct.into() }
    }
}
