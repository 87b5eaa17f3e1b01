#![warn(clippy::pedantic)]
//! Syntax tree of a Solidity compilation.
//!
//! Nodes form a closed set of kinds grouped into [`nodes::AstNode`]; each carries a
//! process-unique `id` and its [`nodes::Location`]. Children are owned through `Arc`,
//! cross references between nodes are ids resolved through an [`arena::Arena`].

pub mod arena;
pub mod builder;
pub(crate) mod enums_impl;
pub mod errors;
pub mod nodes;
pub(crate) mod nodes_impl;
