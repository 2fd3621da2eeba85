use slotmap::SlotMap;

use rigpath_core::{
    Hierarchy, HierarchyListener, HierarchyNotifier, NodeHandle, Result, RigPathError, path,
};

use crate::node::Node;

/// In-memory scene graph.
///
/// Nodes live in a generational arena, so a [`NodeHandle`] stays valid across
/// renames and reparenting and is never reused after removal. Every
/// structural mutation (create, attach, detach, reorder, rename, remove,
/// animator toggle) notifies subscribers obtained from [`Scene::subscribe`].
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeHandle, Node>,
    root_nodes: Vec<NodeHandle>,
    notifier: HierarchyNotifier,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            notifier: HierarchyNotifier::new(),
        }
    }

    /// Registers a hierarchy change listener.
    pub fn subscribe(&mut self) -> HierarchyListener {
        self.notifier.subscribe()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a node at the top level of the scene.
    pub fn create_node(&mut self, name: &str) -> NodeHandle {
        let handle = self.nodes.insert(Node::new(name));
        self.root_nodes.push(handle);
        self.notifier.notify();
        handle
    }

    /// Creates a node as the last child of `parent`.
    pub fn create_child(&mut self, parent: NodeHandle, name: &str) -> Result<NodeHandle> {
        if !self.nodes.contains_key(parent) {
            return Err(RigPathError::NodeNotFound(parent));
        }

        let mut node = Node::new(name);
        node.parent = Some(parent);
        let handle = self.nodes.insert(node);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }

        self.notifier.notify();
        Ok(handle)
    }

    /// Creates an animated root (a top-level node carrying an animator).
    pub fn create_animated_root(&mut self, name: &str) -> NodeHandle {
        let handle = self.nodes.insert(Node {
            animated: true,
            ..Node::new(name)
        });
        self.root_nodes.push(handle);
        self.notifier.notify();
        handle
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Moves `child` (with its subtree) to the end of `parent`'s children.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) -> Result<()> {
        self.ensure_live(child)?;
        self.ensure_live(parent)?;

        if self.is_ancestor_or_self(child, parent) {
            log::warn!("Cannot attach {child:?} beneath its own subtree");
            return Err(RigPathError::InvalidReparent { child, parent });
        }

        self.unlink(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }

        self.notifier.notify();
        Ok(())
    }

    /// Moves `child` to the top level of the scene.
    pub fn detach(&mut self, child: NodeHandle) -> Result<()> {
        let node = self
            .nodes
            .get(child)
            .ok_or(RigPathError::NodeNotFound(child))?;
        if node.parent.is_none() {
            return Ok(());
        }

        self.unlink(child);
        self.root_nodes.push(child);
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = None;
        }

        self.notifier.notify();
        Ok(())
    }

    /// Removes a node and its whole subtree.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Result<()> {
        self.ensure_live(handle)?;
        self.unlink(handle);

        let mut stack = vec![handle];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
            }
        }

        self.notifier.notify();
        Ok(())
    }

    /// Renames a node. Setting the current name again is a no-op and raises
    /// no notification.
    pub fn set_name(&mut self, handle: NodeHandle, name: &str) -> Result<()> {
        let node = self
            .nodes
            .get_mut(handle)
            .ok_or(RigPathError::NodeNotFound(handle))?;
        if node.name == name {
            return Ok(());
        }

        node.name = name.to_owned();
        self.notifier.notify();
        Ok(())
    }

    /// Adds or removes the animator on a node.
    pub fn set_animated(&mut self, handle: NodeHandle, animated: bool) -> Result<()> {
        let node = self
            .nodes
            .get_mut(handle)
            .ok_or(RigPathError::NodeNotFound(handle))?;
        if node.animated == animated {
            return Ok(());
        }

        node.animated = animated;
        self.notifier.notify();
        Ok(())
    }

    /// Moves a node within its sibling list. `index` is clamped.
    ///
    /// Subscribers are only notified when the node actually moves.
    pub fn set_sibling_index(&mut self, handle: NodeHandle, index: usize) -> Result<()> {
        let parent = self
            .nodes
            .get(handle)
            .ok_or(RigPathError::NodeNotFound(handle))?
            .parent;

        let siblings = match parent {
            Some(p) => match self.nodes.get_mut(p) {
                Some(node) => &mut node.children,
                None => return Err(RigPathError::NodeNotFound(p)),
            },
            None => &mut self.root_nodes,
        };

        let Some(pos) = siblings.iter().position(|&x| x == handle) else {
            return Ok(());
        };
        let index = index.min(siblings.len() - 1);
        if index == pos {
            return Ok(());
        }

        siblings.remove(pos);
        siblings.insert(index, handle);
        self.notifier.notify();
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(Node::name)
    }

    #[inline]
    #[must_use]
    pub fn root_nodes(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes carrying an animator, in scene pre-order.
    #[must_use]
    pub fn animated_roots(&self) -> Vec<NodeHandle> {
        let mut roots = Vec::new();
        let mut stack: Vec<NodeHandle> = self.root_nodes.iter().rev().copied().collect();

        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            if node.animated {
                roots.push(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }

        roots
    }

    /// Binding path of `node` relative to `root`.
    ///
    /// Returns `None` if `node` is `root` itself or is not below `root`.
    #[must_use]
    pub fn path_of(&self, root: NodeHandle, node: NodeHandle) -> Option<String> {
        let mut names = Vec::new();
        let mut current = node;

        while current != root {
            let n = self.nodes.get(current)?;
            names.push(n.name.as_str());
            current = n.parent?;
        }

        let mut path: Option<String> = None;
        for name in names.iter().rev() {
            path = Some(path::join(path.as_deref(), name));
        }
        path
    }

    /// Resolves a binding path below `root`, taking the first child whose
    /// name matches at each level.
    #[must_use]
    pub fn find_by_path(&self, root: NodeHandle, binding_path: &str) -> Option<NodeHandle> {
        if binding_path.is_empty() || !self.nodes.contains_key(root) {
            return None;
        }

        let mut current = root;
        for segment in path::segments(binding_path) {
            current = self
                .children(current)
                .iter()
                .copied()
                .find(|&child| self.get_name(child) == Some(segment))?;
        }
        Some(current)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn ensure_live(&self, handle: NodeHandle) -> Result<()> {
        if self.nodes.contains_key(handle) {
            Ok(())
        } else {
            Err(RigPathError::NodeNotFound(handle))
        }
    }

    /// Removes `child` from its parent's child list (or the scene roots).
    /// Leaves `child.parent` untouched.
    fn unlink(&mut self, child: NodeHandle) {
        let parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = parent {
            if let Some(node) = self.nodes.get_mut(p)
                && let Some(i) = node.children.iter().position(|&x| x == child)
            {
                node.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = Some(node);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(|n| n.parent);
        }
        false
    }
}

impl Hierarchy for Scene {
    #[inline]
    fn contains(&self, node: NodeHandle) -> bool {
        self.nodes.contains_key(node)
    }

    #[inline]
    fn name(&self, node: NodeHandle) -> Option<&str> {
        self.get_name(node)
    }

    #[inline]
    fn children(&self, node: NodeHandle) -> &[NodeHandle] {
        self.nodes
            .get(node)
            .map_or(&[][..], |n| n.children.as_slice())
    }
}
