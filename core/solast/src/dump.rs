//! Compilation dump: the serialized input of the exporter.
//!
//! ```json
//! {"sources": [<SourceUnit>, ...], "annotations": {"<node id>": <Annotation>, ...}}
//! ```
//!
//! Both fields may be omitted. Annotation keys are node ids written as strings.

use std::{collections::BTreeMap, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use solast_annotations::{annotated_ast::AnnotatedAst, annotation::Annotation};
use solast_ast::{builder::Builder, nodes::SourceUnit};
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilationDump {
    pub sources: Vec<SourceUnit>,
    pub annotations: BTreeMap<u32, Annotation>,
}

impl CompilationDump {
    /// Captures an annotated compilation so it can be written out and loaded again.
    #[must_use]
    pub fn from_ast(ast: &AnnotatedAst) -> Self {
        let annotations = ast
            .annotated_ids()
            .into_iter()
            .map(|id| (id, ast.annotation(id).clone()))
            .collect();
        Self {
            sources: ast
                .source_units()
                .iter()
                .map(|unit| unit.as_ref().clone())
                .collect(),
            annotations,
        }
    }

    /// Indexes the sources and attaches the annotations.
    ///
    /// # Errors
    ///
    /// Fails if two nodes share an id, a node has id 0, or an annotation names a node
    /// that none of the sources contains.
    pub fn into_annotated_ast(self) -> anyhow::Result<AnnotatedAst> {
        let mut builder = Builder::new();
        for unit in self.sources {
            builder.add_source_unit(Arc::new(unit));
        }
        let arena = builder.build_ast().context("invalid syntax tree")?;
        debug!(nodes = arena.len(), "indexed compilation");
        let mut ast = AnnotatedAst::new(arena);
        for (id, annotation) in self.annotations {
            ast.annotate(id, annotation)
                .context("invalid annotation table")?;
        }
        Ok(ast)
    }
}
