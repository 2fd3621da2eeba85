use rigpath_core::NodeHandle;

/// A minimal scene node: a name plus its place in the hierarchy.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: handle of the parent node (`None` for scene roots)
/// - `children`: ordered child handles; the order is the node's child index
///   order and is what snapshot traversal follows
///
/// Mutation goes through [`Scene`](crate::Scene) so that both sides of a
/// link stay in sync and subscribers are notified.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,
    /// The node carries an animator, making it an animated root.
    pub(crate) animated: bool,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            animated: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }
}
