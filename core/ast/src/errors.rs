//! Error types for the AST crate.
//!
//! This module defines structured errors raised while indexing a syntax tree.

use thiserror::Error;

use crate::nodes::Location;

/// Errors that can occur while registering nodes in an [`Arena`](crate::arena::Arena).
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// Two nodes of the same compilation share an id.
    #[error("node id {id} is used twice (at {first} and at {second})")]
    DuplicateNodeId {
        id: u32,
        first: Location,
        second: Location,
    },
}
