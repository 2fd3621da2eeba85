use crate::NodeHandle;

/// Read-only view of a host scene graph.
///
/// This is the only surface snapshot capture needs: node liveness, names,
/// and ordered children. Implementations must return children in the host's
/// native child order so traversal is reproducible.
pub trait Hierarchy {
    /// Returns `true` if `node` refers to a live node.
    fn contains(&self, node: NodeHandle) -> bool;

    /// Returns the node's current name, or `None` for a dead handle.
    fn name(&self, node: NodeHandle) -> Option<&str>;

    /// Returns the node's children in child-index order.
    ///
    /// Dead handles yield an empty slice.
    fn children(&self, node: NodeHandle) -> &[NodeHandle];
}
