//! Annotated AST - Analysis Results Keyed by Node ID
//!
//! [`AnnotatedAst`] pairs the syntax tree of a whole compilation with the side table
//! analysis filled in. Exporters only ever read it.
//!
//! ```text
//! AnnotatedAst
//! ├─ Arena
//! │  ├─ source units (owned tree)
//! │  └─ id → node index
//! └─ annotations: FxHashMap<NodeID, Annotation>
//! ```
//!
//! Nodes that analysis did not annotate read as [`Annotation::default`], so callers
//! never have to distinguish "absent" from "empty".

use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashMap;
use solast_ast::{
    arena::Arena,
    nodes::{AstNode, SourceUnit},
};

use crate::{annotation::Annotation, errors::AnnotationError, type_info::TypeInfo};

static EMPTY: LazyLock<Annotation> = LazyLock::new(Annotation::default);

#[derive(Default, Debug, Clone)]
pub struct AnnotatedAst {
    arena: Arena,
    annotations: FxHashMap<u32, Annotation>,
}

impl AnnotatedAst {
    #[must_use]
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            annotations: FxHashMap::default(),
        }
    }

    /// Attaches `annotation` to node `id`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::UnknownNode`] if `id` is not in the arena.
    pub fn annotate(&mut self, id: u32, annotation: Annotation) -> Result<(), AnnotationError> {
        if !self.arena.contains(id) {
            return Err(AnnotationError::UnknownNode { id });
        }
        self.annotations.insert(id, annotation);
        Ok(())
    }

    /// Annotation of node `id`, or the empty annotation.
    #[must_use]
    pub fn annotation(&self, id: u32) -> &Annotation {
        self.annotations.get(&id).unwrap_or(&EMPTY)
    }

    #[must_use]
    pub fn is_annotated(&self, id: u32) -> bool {
        self.annotations.contains_key(&id)
    }

    #[must_use = "returns type information without side effects"]
    pub fn get_node_typeinfo(&self, id: u32) -> Option<&TypeInfo> {
        self.annotation(id).type_info.as_ref()
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[must_use]
    pub fn source_units(&self) -> &[Arc<SourceUnit>] {
        self.arena.source_units()
    }

    #[must_use]
    pub fn find_node(&self, id: u32) -> Option<&AstNode> {
        self.arena.find_node(id)
    }

    /// Source unit whose location names `source_name`.
    #[must_use]
    pub fn find_source_unit(&self, source_name: &str) -> Option<&Arc<SourceUnit>> {
        self.source_units().iter().find(|unit| {
            unit.location
                .source_name
                .as_deref()
                .is_some_and(|name| name == source_name)
        })
    }

    /// Ids of annotated nodes, sorted.
    #[must_use]
    pub fn annotated_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.annotations.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
