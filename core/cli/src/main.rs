#![warn(clippy::pedantic)]

//! # Solidity AST Exporter CLI
//!
//! Command line interface over the `solast` crate.
//!
//! 1. Load the compilation dump given as the positional argument.
//! 2. Export every source unit, or only the one named by `--unit`.
//! 3. Print the JSON to stdout, or write it to the file given with `-o`.
//!
//! Set `SOLAST_LOG` (e.g. `SOLAST_LOG=debug`) to log to stderr.
//!
//! ## Exit codes
//! * 0 – success.
//! * 1 – IO / load / export failure.
//!
//! ## Example
//! ```bash
//! solast compilation.json --legacy -o ast.json
//! ```

mod logging;
mod parser;

use std::{fs, process};

use anyhow::Context;
use clap::Parser;
use parser::Cli;
use serde_json::Value;
use solast::{default_config, export_all, export_named_source_unit, load_compilation_file};
use solast_json::config::{SchemaVariant, SourceIndices};

/// Entry point for the CLI executable.
///
/// On any failure a diagnostic is printed to stderr and the process exits with code `1`.
fn main() {
    logging::init_tracing();
    let args = Cli::parse();
    if !args.path.exists() {
        eprintln!("Error: path not found");
        process::exit(1);
    }
    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let ast = load_compilation_file(&args.path)?;
    let mut config = default_config(&ast);
    if args.legacy {
        config = config.with_schema(SchemaVariant::Legacy);
    }
    if !args.source_indices.is_empty() {
        config = config
            .with_source_indices(args.source_indices.into_iter().collect::<SourceIndices>());
    }

    let output = match &args.unit {
        Some(name) => export_named_source_unit(&ast, name, &config)?,
        None => Value::Object(export_all(&ast, &config)?),
    };
    let mut text = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    text.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Written: {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
