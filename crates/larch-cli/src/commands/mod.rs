//! Subcommand implementations and the shared compile pipeline.

pub mod build;
pub mod check;
pub mod fmt;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use larch_ast::nodes::Module;
use larch_checker::check_module;
use larch_checker::typed::TypedModule;
use larch_parser::parse_module;
use larch_source::{Source, Span};

/// Reads a source file, warning when it does not carry the `.tree`
/// extension.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    if path.extension().is_none_or(|extension| extension != "tree") {
        log::warn!("{} does not have the .tree extension", path.display());
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parses a source file, rendering the parse error on failure.
pub(crate) fn parse_source(path: &Path, source: &str) -> Result<Module> {
    match parse_module(source) {
        Ok(module) => Ok(module),
        Err(error) => {
            let rendered = Source::new(source);
            report(path, &rendered, Some(error.span()), &error.to_string());
            bail!("aborting due to 1 previous error");
        }
    }
}

/// Runs parse plus type check, rendering every error on failure.
pub(crate) fn parse_and_check(path: &Path, source: &str) -> Result<TypedModule> {
    let module = parse_source(path, source)?;

    match check_module(&module) {
        Ok(typed) => Ok(typed),
        Err(errors) => {
            let rendered = Source::new(source);
            let count = errors.len();
            for error in &errors {
                report(path, &rendered, error.span(), &error.to_string());
            }
            bail!(
                "aborting due to {count} previous error{}",
                if count == 1 { "" } else { "s" }
            );
        }
    }
}

/// Prints one error as `file:line:column: error: message`.
fn report(path: &Path, source: &Source<'_>, span: Option<Span>, message: &str) {
    match span {
        Some(span) => {
            let position = source.position_from_span_start(span);
            eprintln!("{}:{position}: error: {message}", path.display());
        }
        None => eprintln!("{}: error: {message}", path.display()),
    }
}
