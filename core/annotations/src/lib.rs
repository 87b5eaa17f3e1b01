#![warn(clippy::pedantic)]

//! Read-only results of Solidity name and type resolution, keyed by node id.

pub mod annotated_ast;
pub mod annotation;
pub mod errors;
pub mod type_info;
