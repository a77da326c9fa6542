//! WebAssembly text emitter for the Larch programming language.
//!
//! Lowers a [`larch_checker::typed::TypedModule`] to WebAssembly text:
//!
//! - every declaration is exported as `(export "name" (func $name))` and
//!   defined as a `(func $name …)` with `(param $x i32)` parameters and an
//!   `(result i32)` result;
//! - integer literals become `(i32.const n)`, float literals
//!   `(f32.const x)`;
//! - infix operations become `i32.add`/`i32.sub`/`i32.mul`/`i32.div_s`
//!   (f32 counterparts for `Float` operands);
//! - identifiers become `(get_local $name)`, applications `(call $name …)`;
//! - `case` expressions become nested `(select …)` chains with `(i32.eq …)`
//!   comparators generated in reverse branch order;
//! - `let` bindings are substituted inline (the language is pure).
//!
//! The value model is i32/f32 scalars. Strings, constructor field
//! bindings, and local functions have no lowering and report an
//! [`EmitError`]; the emitted runtime is an external collaborator.

pub mod error;
pub mod generator;

use larch_checker::typed::TypedModule;

pub use crate::error::EmitError;
pub use crate::generator::WatGenerator;

/// Emits the WebAssembly text for a checked module.
///
/// ## Errors
///
/// Returns an [`EmitError`] for constructs outside the backend's value
/// model.
pub fn emit_module(module: &TypedModule) -> Result<String, EmitError> {
    WatGenerator::new().generate(module)
}
