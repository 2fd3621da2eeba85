//! Watcher Settings
//!
//! ```rust,ignore
//! use rigpath::watcher::{HierarchyWatcher, WatcherSettings};
//!
//! // Default: persist rewritten clips and refresh views after every rebind
//! let watcher = HierarchyWatcher::new(WatcherSettings::default());
//!
//! // Headless batch tool: keep rewrites in memory, no view refresh
//! let watcher = HierarchyWatcher::new(WatcherSettings {
//!     persist_on_rewrite: false,
//!     refresh_views: false,
//!     ..Default::default()
//! });
//! ```

/// Behaviour switches for [`HierarchyWatcher`](crate::HierarchyWatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatcherSettings {
    /// Ask the host to persist a root's clips after bindings were rewritten.
    pub persist_on_rewrite: bool,
    /// Ask the host to refresh its views once per cycle that rewrote bindings.
    pub refresh_views: bool,
    /// Capture baselines for every animated root as part of `start`.
    ///
    /// Without it, roots are discovered on the first notification, so edits
    /// made between `start` and that notification are not rebound.
    pub bootstrap_on_start: bool,
}

impl Default for WatcherSettings {
    #[inline]
    fn default() -> Self {
        Self {
            persist_on_rewrite: true,
            refresh_views: true,
            bootstrap_on_start: true,
        }
    }
}
