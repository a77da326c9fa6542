//! Larch CLI
//!
//! Command-line interface for the Larch compiler.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// The Larch programming language compiler
#[derive(Parser, Debug)]
#[clap(name = "larch", version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type check a source file without emitting code
    Check {
        /// The `.tree` file to check
        file: PathBuf,
    },
    /// Compile a source file to WebAssembly text
    Build {
        /// The `.tree` file to compile
        file: PathBuf,
        /// Where to write the WebAssembly text (stdout if omitted)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse a source file and print it reformatted
    Fmt {
        /// The `.tree` file to format
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check { file } => commands::check::execute(&file),
        Command::Build { file, output } => commands::build::execute(&file, output.as_deref()),
        Command::Fmt { file } => commands::fmt::execute(&file),
    }
}
