/// Facts about the ancestors of the node being visited.
///
/// Passed by value: a descendant sees the context its parent handed down, and nothing
/// it does can change what its siblings or ancestors see.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisitContext {
    in_event: bool,
}

impl VisitContext {
    /// Context for the children of an event definition.
    #[must_use]
    pub fn entering_event(self) -> Self {
        Self { in_event: true }
    }

    /// Whether an event definition encloses the current node.
    #[must_use]
    pub fn in_event(self) -> bool {
        self.in_event
    }
}
