//! Fmt command implementation

use std::path::Path;

use anyhow::Result;
use larch_ast::printer::print_module;

use super::{parse_source, read_source};

/// Parse a source file and print it reformatted
pub fn execute(file: &Path) -> Result<()> {
    let source = read_source(file)?;
    let module = parse_source(file, &source)?;

    print!("{}", print_module(&module));

    Ok(())
}
