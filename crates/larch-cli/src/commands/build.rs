//! Build command implementation

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use larch_emitter::emit_module;

use super::{parse_and_check, read_source};

/// Compile a source file and print (or write) the WebAssembly text
pub fn execute(file: &Path, output: Option<&Path>) -> Result<()> {
    let source = read_source(file)?;
    let typed = parse_and_check(file, &source)?;

    let wat = emit_module(&typed)
        .with_context(|| format!("Failed to emit WebAssembly for {}", file.display()))?;

    match output {
        Some(path) => {
            fs::write(path, &wat)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{wat}"),
    }

    Ok(())
}
