use rigpath_animation::{AnimationClip, ClipLibrary};
use rigpath_core::{Hierarchy, HierarchyListener, NodeHandle, Result};
use rigpath_scene::Scene;

/// Everything the watcher needs from the host environment.
pub trait AnimationHost {
    type Graph: Hierarchy + ?Sized;

    /// Read-only view of the live scene graph.
    fn hierarchy(&self) -> &Self::Graph;

    /// Every node currently carrying animation capability.
    fn animated_roots(&self) -> Vec<NodeHandle>;

    /// Registers for edge-triggered hierarchy change notifications.
    fn subscribe(&mut self) -> HierarchyListener;

    /// Clips associated with an animated root.
    fn clips_for(&mut self, root: NodeHandle) -> Vec<&mut AnimationClip>;

    /// Persists a root's clips after they were rewritten.
    fn persist(&mut self, root: NodeHandle) -> Result<()>;

    /// Repaints anything displaying clip bindings.
    fn refresh_views(&mut self) {}
}

/// Host adapter over the in-memory [`Scene`] and [`ClipLibrary`].
#[derive(Debug, Default)]
pub struct SceneHost {
    pub scene: Scene,
    pub library: ClipLibrary,
    saves: usize,
    view_refreshes: usize,
}

impl SceneHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `persist` calls that saved at least one clip.
    #[inline]
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }

    #[inline]
    #[must_use]
    pub fn view_refreshes(&self) -> usize {
        self.view_refreshes
    }
}

impl AnimationHost for SceneHost {
    type Graph = Scene;

    fn hierarchy(&self) -> &Scene {
        &self.scene
    }

    fn animated_roots(&self) -> Vec<NodeHandle> {
        self.scene.animated_roots()
    }

    fn subscribe(&mut self) -> HierarchyListener {
        self.scene.subscribe()
    }

    fn clips_for(&mut self, root: NodeHandle) -> Vec<&mut AnimationClip> {
        self.library.clips_for_mut(root)
    }

    fn persist(&mut self, root: NodeHandle) -> Result<()> {
        let dirty = self.library.dirty_keys_for(root);
        if dirty.is_empty() {
            return Ok(());
        }

        for key in &dirty {
            self.library.mark_saved(*key)?;
        }
        self.saves += 1;
        log::info!("Saved {} clip(s) for root {root:?}", dirty.len());
        Ok(())
    }

    fn refresh_views(&mut self) {
        self.view_refreshes += 1;
    }
}
