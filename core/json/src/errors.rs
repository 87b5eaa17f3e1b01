//! Error types for JSON conversion.

use std::num::ParseIntError;

use solast_ast::nodes::{StorageLocation, Visibility};
use thiserror::Error;

/// Errors that abort a conversion. No partial document is produced.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum ConversionError {
    /// A declaration carries a visibility the output schema has no label for.
    #[error("internal compiler error: unknown declaration visibility {visibility:?} on node {id}")]
    UnknownVisibility { id: u32, visibility: Visibility },

    /// A variable carries a storage location the output schema has no label for.
    #[error("internal compiler error: unknown declaration location {location:?} on node {id}")]
    UnknownStorageLocation { id: u32, location: StorageLocation },

    #[error("failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConversionError {
    /// Whether the error reports an inconsistent input tree rather than an I/O problem.
    #[must_use]
    pub fn is_internal_compiler_error(&self) -> bool {
        matches!(
            self,
            ConversionError::UnknownVisibility { .. }
                | ConversionError::UnknownStorageLocation { .. }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SrcLocationError {
    #[error("expected `start:length:sourceIndex`, got `{0}`")]
    Malformed(String),

    #[error("invalid {field} in `{text}`")]
    InvalidNumber {
        field: &'static str,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceIndexError {
    #[error("expected NAME=INDEX, got `{0}`")]
    MissingSeparator(String),

    #[error("source name is empty in `{0}`")]
    EmptyName(String),

    #[error("invalid source index in `{pair}`")]
    InvalidIndex {
        pair: String,
        #[source]
        source: ParseIntError,
    },
}
