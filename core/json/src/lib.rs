#![warn(clippy::pedantic)]

//! Conversion of an annotated Solidity syntax tree into JSON documents.
//!
//! Every visited node becomes exactly one [`Document`](document::Document): `id`,
//! `src`, `nodeType`, then the attributes of its kind in a fixed order. Structural
//! children are embedded; semantic links (resolved declarations, scopes) are ids.

use serde_json::Value;
use solast_annotations::annotated_ast::AnnotatedAst;
use solast_ast::nodes::AstNode;

use crate::{config::ConverterConfig, converter::AstJsonConverter, errors::ConversionError};

pub mod config;
pub mod context;
pub mod converter;
pub mod document;
pub mod errors;
pub mod reference;
pub mod src_location;

const RED_ZONE: usize = 100 * 1024;
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first moving to a fresh stack segment if less than [`RED_ZONE`] bytes remain.
/// Wraps every recursive step whose depth follows the nesting of the input tree.
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Converts the subtree rooted at `node` with a one-off converter.
///
/// # Errors
///
/// Returns [`ConversionError`] if the subtree holds a declaration whose visibility or
/// storage location has no output label.
pub fn to_json(
    ast: &AnnotatedAst,
    node: &AstNode,
    config: ConverterConfig,
) -> Result<Value, ConversionError> {
    AstJsonConverter::new(ast, config).to_json(node)
}
