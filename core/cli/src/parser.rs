//! Command line argument parsing for the `solast` exporter.

use std::path::PathBuf;

use clap::Parser;
use solast_json::config::SourceIndexEntry;

/// Command line interface definition for the Solidity AST exporter.
///
/// The input is a compilation dump: the parsed and analyzed syntax trees of all
/// sources of one compilation together with their annotations. Every source unit is
/// exported, keyed by source name, unless `--unit` selects a single one.
///
/// ## Examples
///
/// Export all sources as pretty-printed JSON:
/// ```bash
/// solast build/compilation.json
/// ```
///
/// Export one source in the legacy layout, with explicit source numbering:
/// ```bash
/// solast build/compilation.json --legacy --unit a.sol --source-index a.sol=0 --source-index b.sol=1
/// ```
#[derive(Parser)]
#[command(
    name = "solast",
    author,
    version,
    about = "Solidity AST to JSON exporter (solast)",
    long_about = "The 'solast' command reads a compilation dump (syntax trees plus analysis annotations) \
and writes one JSON document per source unit. Source indices in 'src' attributes follow the sorted source \
names unless assigned with --source-index."
)]
pub(crate) struct Cli {
    /// Path to the compilation dump.
    pub(crate) path: PathBuf,

    /// Emit the legacy layout (`name`, `attributes`, `children`).
    #[clap(long = "legacy", action = clap::ArgAction::SetTrue)]
    pub(crate) legacy: bool,

    /// Assign a source index, as `NAME=INDEX`. May be repeated.
    ///
    /// When given, only the listed sources have an index; locations in other sources
    /// are written with index -1.
    #[clap(long = "source-index", value_name = "NAME=INDEX")]
    pub(crate) source_indices: Vec<SourceIndexEntry>,

    /// Export only the source unit with this name.
    #[clap(long = "unit", value_name = "NAME")]
    pub(crate) unit: Option<String>,

    /// Write compact JSON instead of pretty-printed JSON.
    #[clap(long = "compact", action = clap::ArgAction::SetTrue)]
    pub(crate) compact: bool,

    /// Write the output to a file instead of stdout.
    #[clap(short = 'o', long = "output", value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,
}
