//! Type checker for the Larch programming language.
//!
//! This crate turns an untyped [`larch_ast::nodes::Module`] into a
//! [`typed::TypedModule`], or a non-empty list of [`error::CompileError`]s:
//!
//! - **Type language** ([`types`]): the [`types::Type`] representation, its
//!   printing, and the generic-parameter constraint solver.
//! - **Typed AST** ([`typed`]): the declarations and expressions the
//!   emitter consumes, every expression carrying its resolved type.
//! - **Compile state** ([`context`]): type lambdas, the type map, the value
//!   scope, and the constructor registry, threaded across top-levels.
//! - **Checking passes** ([`datatype`], [`declaration`], [`expression`],
//!   [`pattern`]): one module per construct category.
//!
//! ## Error policy
//!
//! Within one top-level declaration the first error short-circuits that
//! declaration but not the module: the driver accumulates errors across all
//! top-levels and returns them together. A failed top-level contributes no
//! typed declaration, except that a failed data type still registers its
//! head type lambda.

pub mod context;
pub mod datatype;
pub mod declaration;
pub mod error;
pub mod expression;
pub mod pattern;
pub mod typed;
pub mod types;

use larch_ast::nodes::{Module, TopLevel};

use crate::context::CheckContext;
use crate::datatype::check_data_type;
use crate::declaration::check_declaration;
use crate::error::CompileError;
use crate::typed::TypedModule;

/// Checks a whole module.
///
/// Top-levels are checked left-to-right against the growing compile state;
/// data types must therefore be declared before the functions that use
/// them. Constructor declarations synthesized for data types appear in the
/// returned module alongside the function declarations.
///
/// ## Errors
///
/// Returns every error accumulated across the module's top-levels; the
/// list is non-empty.
pub fn check_module(module: &Module) -> Result<TypedModule, Vec<CompileError>> {
    let mut context = CheckContext::new();
    let mut declarations = Vec::new();

    for item in &module.items {
        match item {
            TopLevel::DataType(data_type) => {
                log::debug!("checking data type {}", data_type.name);
                declarations.extend(check_data_type(&mut context, data_type));
            }
            TopLevel::Function(function) => {
                log::debug!("checking declaration {}", function.name);
                match check_declaration(&mut context, function) {
                    Ok(declaration) => {
                        context.declare(declaration.clone());
                        declarations.push(declaration);
                    }
                    Err(error) => context.push_error(error),
                }
            }
        }
    }

    context.into_result(TypedModule::new(declarations))
}
