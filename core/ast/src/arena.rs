use crate::{
    errors::AstError,
    nodes::{Ast, AstNode, SourceUnit},
};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Id → node index over one compilation.
///
/// The tree itself only stores owned children; every weak link between nodes is an
/// id that is resolved through this table.
#[derive(Default, Clone, Debug)]
pub struct Arena {
    pub(crate) nodes: FxHashMap<u32, AstNode>,
    pub(crate) parents: FxHashMap<u32, u32>,
    source_units: Vec<Arc<SourceUnit>>,
}

impl Arena {
    #[must_use]
    pub fn source_units(&self) -> &[Arc<SourceUnit>] {
        &self.source_units
    }

    /// Registers a source unit and every node reachable from it.
    ///
    /// # Errors
    ///
    /// Returns an error if a node carries an id already present in the arena.
    /// Nodes visited before the offending one stay registered.
    pub fn add_source_unit(&mut self, unit: Arc<SourceUnit>) -> Result<(), AstError> {
        let root = AstNode::Ast(Ast::SourceUnit(unit.clone()));
        let mut stack: Vec<(AstNode, Option<u32>)> = vec![(root, None)];
        while let Some((node, parent_id)) = stack.pop() {
            let id = node.id();
            stack.extend(
                node.children()
                    .into_iter()
                    .rev()
                    .map(|child| (child, Some(id))),
            );
            self.add_node(node, parent_id)?;
        }
        self.source_units.push(unit);
        Ok(())
    }

    /// Adds a single node to the arena and records its parent.
    ///
    /// # Errors
    ///
    /// Returns an error if a node with the same ID already exists.
    pub fn add_node(&mut self, node: AstNode, parent_id: Option<u32>) -> Result<(), AstError> {
        let id = node.id();
        if let Some(existing) = self.nodes.get(&id) {
            return Err(AstError::DuplicateNodeId {
                id,
                first: existing.location().clone(),
                second: node.location().clone(),
            });
        }
        self.nodes.insert(id, node);
        if let Some(parent_id) = parent_id {
            self.parents.insert(id, parent_id);
        }
        Ok(())
    }

    #[must_use]
    pub fn find_node(&self, id: u32) -> Option<&AstNode> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.nodes.contains_key(&id)
    }

    #[must_use]
    pub fn find_parent_node(&self, id: u32) -> Option<u32> {
        self.parents.get(&id).copied()
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the subtree rooted at `id`, the root included.
    #[must_use]
    pub fn subtree_len(&self, id: u32) -> usize {
        let Some(root) = self.find_node(id) else {
            return 0;
        };
        let mut count = 0;
        let mut stack = vec![root.clone()];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}
