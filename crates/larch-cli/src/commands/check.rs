//! Check command implementation

use std::path::Path;

use anyhow::Result;

use super::{parse_and_check, read_source};

/// Type check a source file without emitting code
pub fn execute(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    let typed = parse_and_check(file, &source)?;

    log::debug!("checked {} declarations", typed.declarations.len());
    println!("{}: ok", file.display());

    Ok(())
}
