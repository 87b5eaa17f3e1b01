#![warn(clippy::pedantic)]
//! Orchestration Crate for the Solidity AST Exporter
//!
//! Loads an annotated compilation and exports its source units as JSON documents.
//!
//! ```text
//! dump (.json) → CompilationDump → AnnotatedAst → AstJsonConverter → JSON per source
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solast::{default_config, export_all, load_compilation};
//!
//! fn export(dump: &str) -> anyhow::Result<serde_json::Value> {
//!     let ast = load_compilation(dump)?;
//!     let config = default_config(&ast);
//!     Ok(serde_json::Value::Object(export_all(&ast, &config)?))
//! }
//! ```
//!
//! ## Architecture
//!
//! This crate is a thin layer over:
//!
//! - [`solast_ast`] - the syntax tree, its arena and node ids
//! - [`solast_annotations`] - resolved types, declarations and scopes keyed by node id
//! - [`solast_json`] - the node-to-document converter
//!
//! ## Error Handling
//!
//! Public functions return `anyhow::Result`; each failure carries the step that
//! failed as context.

use std::{fs, path::Path};

use anyhow::{Context, bail};
use serde::Deserialize;
use serde_json::{Map, Value};
use solast_annotations::{annotated_ast::AnnotatedAst, annotation::AnnotationExtra};
use solast_ast::nodes::SourceUnit;
use solast_json::{
    config::{ConverterConfig, SchemaVariant, SourceIndices},
    converter::AstJsonConverter,
};
use tracing::{debug, info, instrument};

pub mod dump;

pub use dump::CompilationDump;

/// Parses a compilation dump.
///
/// # Errors
///
/// Fails if `text` is not a well-formed dump or the tree it describes is inconsistent.
#[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn load_compilation(text: &str) -> anyhow::Result<AnnotatedAst> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();
    let dump = CompilationDump::deserialize(serde_stacker::Deserializer::new(&mut json))
        .context("failed to parse compilation dump")?;
    json.end().context("failed to parse compilation dump")?;
    info!(
        sources = dump.sources.len(),
        annotations = dump.annotations.len(),
        "loaded compilation dump"
    );
    dump.into_annotated_ast()
}

/// Reads and parses a compilation dump file.
///
/// # Errors
///
/// Fails if the file cannot be read, or for any reason [`load_compilation`] fails.
pub fn load_compilation_file(path: &Path) -> anyhow::Result<AnnotatedAst> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    load_compilation(&text).with_context(|| format!("in {}", path.display()))
}

/// Name a source unit is known by: its location's source name, else the path analysis
/// recorded for it, else its node id.
#[must_use]
pub fn source_name(ast: &AnnotatedAst, unit: &SourceUnit) -> String {
    if let Some(name) = unit.location.source_name.as_deref() {
        return name.to_string();
    }
    match &ast.annotation(unit.id).extra {
        AnnotationExtra::SourceUnit { path, .. } if !path.is_empty() => path.clone(),
        _ => unit.id.to_string(),
    }
}

/// Source indices numbering the compilation's sources in sorted name order.
#[must_use]
pub fn default_source_indices(ast: &AnnotatedAst) -> SourceIndices {
    SourceIndices::from_sorted_names(
        ast.source_units()
            .iter()
            .map(|unit| source_name(ast, unit)),
    )
}

/// Compact schema with [`default_source_indices`].
#[must_use]
pub fn default_config(ast: &AnnotatedAst) -> ConverterConfig {
    ConverterConfig::new(SchemaVariant::Compact, default_source_indices(ast))
}

/// Exports one source unit.
///
/// # Errors
///
/// Fails if the unit holds a declaration the output schema cannot label.
pub fn export_source_unit(
    ast: &AnnotatedAst,
    unit: &SourceUnit,
    config: &ConverterConfig,
) -> anyhow::Result<Value> {
    let converter = AstJsonConverter::new(ast, config.clone());
    let document = converter
        .source_unit_document(unit)
        .with_context(|| format!("failed to export {}", source_name(ast, unit)))?;
    debug!(
        source = %source_name(ast, unit),
        documents = document.descendants().len(),
        "exported source unit"
    );
    Ok(document.render(config.schema))
}

/// Exports the source unit named `name`.
///
/// # Errors
///
/// Fails if no source unit has that name, or if its export fails.
pub fn export_named_source_unit(
    ast: &AnnotatedAst,
    name: &str,
    config: &ConverterConfig,
) -> anyhow::Result<Value> {
    let unit = ast
        .source_units()
        .iter()
        .find(|unit| source_name(ast, unit) == name)
        .with_context(|| format!("no source unit named {name}"))?;
    export_source_unit(ast, unit, config)
}

/// Exports every source unit, keyed by source name in sorted order.
///
/// # Errors
///
/// Fails if two source units share a name, or on the first source unit whose export
/// fails.
pub fn export_all(
    ast: &AnnotatedAst,
    config: &ConverterConfig,
) -> anyhow::Result<Map<String, Value>> {
    let mut units: Vec<_> = ast
        .source_units()
        .iter()
        .map(|unit| (source_name(ast, unit), unit))
        .collect();
    units.sort_by(|a, b| a.0.cmp(&b.0));
    if let Some(pair) = units.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        bail!(
            "source units {} and {} are both named {}",
            pair[0].1.id,
            pair[1].1.id,
            pair[0].0
        );
    }
    let mut documents = Map::new();
    for (name, unit) in units {
        let document = export_source_unit(ast, unit, config)?;
        documents.insert(name, document);
    }
    Ok(documents)
}
