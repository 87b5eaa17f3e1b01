//! Assembles finished source units into an indexed [`Arena`].
//!
//! Parsing is done elsewhere; producers of a tree use [`Builder::next_node_id`] to
//! stamp every node they create and hand the finished [`SourceUnit`]s to the builder.
//!
//! # Node ID Assignment
//!
//! Node IDs come from one process-wide atomic counter:
//!
//! - **Unique**: an ID is handed out once and never reused within the process
//! - **Thread-safe**: Uses `AtomicU32` with relaxed ordering
//! - **Zero is reserved**: ID 0 represents "no node" and is rejected by the arena
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use solast_ast::builder::Builder;
//! use solast_ast::nodes::{Location, SourceUnit};
//!
//! let unit = SourceUnit::new(Builder::next_node_id(), Location::default());
//! let mut builder = Builder::new();
//! builder.add_source_unit(Arc::new(unit));
//! let arena = builder.build_ast().unwrap();
//! assert_eq!(arena.len(), 1);
//! ```

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use crate::{arena::Arena, errors::AstError, nodes::SourceUnit};

#[derive(Default)]
pub struct Builder {
    source_units: Vec<Arc<SourceUnit>>,
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            source_units: Vec::new(),
        }
    }

    /// Generate a unique node ID using an atomic counter.
    ///
    /// Starting from 1 (0 is reserved as invalid/uninitialized).
    #[must_use]
    pub fn next_node_id() -> u32 {
        static COUNTER: AtomicU32 = AtomicU32::new(1);
        COUNTER.fetch_add(1, Ordering::Relaxed)
    }

    pub fn add_source_unit(&mut self, unit: Arc<SourceUnit>) {
        self.source_units.push(unit);
    }

    /// Indexes every added source unit.
    ///
    /// # Errors
    ///
    /// This function will return an error if two nodes share an id.
    pub fn build_ast(&mut self) -> Result<Arena, AstError> {
        let mut arena = Arena::default();
        for unit in self.source_units.drain(..) {
            arena.add_source_unit(unit)?;
        }
        Ok(arena)
    }
}
