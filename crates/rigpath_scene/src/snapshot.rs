//! Hierarchy Snapshots
//!
//! A [`HierarchySnapshot`] is an immutable, point-in-time capture of one
//! animated root's subtree: for every descendant it stores the node's name
//! and its binding path relative to the root.
//!
//! Snapshots are keyed by [`NodeHandle`], never by name or path, because
//! names and paths are exactly what changes between two captures.
//!
//! # Traversal
//!
//! Capture walks the subtree depth-first, pre-order, in child-index order,
//! using an explicit stack so deep rigs cannot overflow the call stack. The
//! traversal order is kept alongside the entries so iteration (and therefore
//! diff output) is reproducible.

use rustc_hash::FxHashMap;

use rigpath_core::{Hierarchy, NodeHandle, Result, RigPathError, path};

/// Name and binding path of one node at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub name: String,
    pub path: String,
}

/// Immutable capture of an animated root's descendants.
#[derive(Debug, Clone)]
pub struct HierarchySnapshot {
    root: NodeHandle,
    entries: FxHashMap<NodeHandle, NodeInfo>,
    order: Vec<NodeHandle>,
}

impl HierarchySnapshot {
    /// Captures the subtree below `root`.
    ///
    /// A root without descendants yields an empty snapshot. Children listed
    /// by the host that are not live, and nodes reached a second time, are
    /// skipped with a warning.
    pub fn capture<H: Hierarchy + ?Sized>(hierarchy: &H, root: NodeHandle) -> Result<Self> {
        if !hierarchy.contains(root) {
            return Err(RigPathError::InvalidRoot(root));
        }

        let mut entries: FxHashMap<NodeHandle, NodeInfo> = FxHashMap::default();
        let mut order = Vec::new();

        // (node, parent) where `None` marks a direct child of the root.
        let mut stack: Vec<(NodeHandle, Option<NodeHandle>)> = hierarchy
            .children(root)
            .iter()
            .rev()
            .map(|&child| (child, None))
            .collect();

        while let Some((node, parent)) = stack.pop() {
            let Some(name) = hierarchy.name(node) else {
                log::warn!("Skipping dangling child {node:?} below root {root:?}");
                continue;
            };
            if node == root || entries.contains_key(&node) {
                log::warn!("Node {node:?} reached twice below root {root:?}, hierarchy has a cycle");
                continue;
            }

            let parent_path = parent
                .and_then(|p| entries.get(&p))
                .map(|info| info.path.as_str());
            let node_path = path::join(parent_path, name);

            entries.insert(
                node,
                NodeInfo {
                    name: name.to_owned(),
                    path: node_path,
                },
            );
            order.push(node);

            stack.extend(
                hierarchy
                    .children(node)
                    .iter()
                    .rev()
                    .map(|&child| (child, Some(node))),
            );
        }

        Ok(Self {
            root,
            entries,
            order,
        })
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, node: NodeHandle) -> Option<&NodeInfo> {
        self.entries.get(&node)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, node: NodeHandle) -> bool {
        self.entries.contains_key(&node)
    }

    #[inline]
    #[must_use]
    pub fn path_of(&self, node: NodeHandle) -> Option<&str> {
        self.entries.get(&node).map(|info| info.path.as_str())
    }

    /// Iterates entries in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &NodeInfo)> {
        self.order
            .iter()
            .filter_map(|&node| self.entries.get(&node).map(|info| (node, info)))
    }

    /// First node (in traversal order) whose path equals `binding_path`.
    #[must_use]
    pub fn find_by_path(&self, binding_path: &str) -> Option<NodeHandle> {
        self.iter()
            .find(|(_, info)| info.path == binding_path)
            .map(|(node, _)| node)
    }

    /// Nodes present here but not in `older`.
    #[must_use]
    pub fn added_since(&self, older: &HierarchySnapshot) -> Vec<NodeHandle> {
        self.order
            .iter()
            .copied()
            .filter(|node| !older.contains(*node))
            .collect()
    }

    /// Nodes present in `older` but not here.
    #[must_use]
    pub fn removed_since(&self, older: &HierarchySnapshot) -> Vec<NodeHandle> {
        older.added_since(self)
    }
}

impl PartialEq for HierarchySnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.entries == other.entries
    }
}

impl Eq for HierarchySnapshot {}
