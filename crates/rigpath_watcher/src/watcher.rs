//! Hierarchy Watcher
//!
//! Orchestrates the rebinding pipeline for every animated root in a host:
//!
//! ```text
//! notification ─► enumerate roots ─► capture ─► diff ─► remap ─► persist
//!                        │                                          │
//!                        └── new roots: baseline only               └── once per root
//! ```
//!
//! # Root lifecycle
//!
//! `Unknown → Tracked → (Tracked | Removed)`. The first cycle that sees a
//! root only records a baseline snapshot. Later cycles diff against it and
//! replace it. A root missing from an enumeration is dropped with its
//! baseline; if the same handle shows up again it starts over as a new root.
//!
//! # Failure containment
//!
//! Nothing in a cycle is fatal. A root that cannot be captured is skipped for
//! that cycle and keeps its baseline, persistence errors are logged, and the
//! remaining roots are processed normally.
//!
//! # Re-entrancy
//!
//! Notifications arrive through a single-consumer queue. A cycle borrows the
//! watcher mutably, so it cannot be entered again while running; anything the
//! host raises during a cycle (including from `persist`) stays queued and is
//! handled by the next [`poll`](HierarchyWatcher::poll).

use std::collections::hash_map::Entry;

use rustc_hash::{FxHashMap, FxHashSet};

use rigpath_animation::BindingRemapper;
use rigpath_core::{HierarchyListener, NodeHandle};
use rigpath_scene::{HierarchySnapshot, SnapshotDiff};

use crate::host::AnimationHost;
use crate::settings::WatcherSettings;

/// Watcher state for one animated root.
#[derive(Debug, Clone)]
pub struct TrackedRoot {
    pub root: NodeHandle,
    pub last_snapshot: HierarchySnapshot,
}

/// What one cycle did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub roots_discovered: usize,
    pub roots_dropped: usize,
    /// Roots enumerated but not capturable this cycle.
    pub roots_skipped: usize,
    pub changes_detected: usize,
    pub bindings_rewritten: usize,
    pub collisions: usize,
    pub roots_persisted: usize,
    pub views_refreshed: bool,
}

impl CycleReport {
    #[inline]
    #[must_use]
    pub fn has_rewrites(&self) -> bool {
        self.bindings_rewritten > 0
    }
}

/// Keeps animation bindings valid while animated hierarchies are edited.
#[derive(Debug, Default)]
pub struct HierarchyWatcher {
    settings: WatcherSettings,
    tracked: FxHashMap<NodeHandle, TrackedRoot>,
    listener: Option<HierarchyListener>,
}

impl HierarchyWatcher {
    #[must_use]
    pub fn new(settings: WatcherSettings) -> Self {
        Self {
            settings,
            tracked: FxHashMap::default(),
            listener: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &WatcherSettings {
        &self.settings
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Subscribes to the host's hierarchy notifications.
    ///
    /// With [`WatcherSettings::bootstrap_on_start`] this also runs a first
    /// cycle so every existing root has a baseline; its report is returned.
    pub fn start<H: AnimationHost + ?Sized>(&mut self, host: &mut H) -> Option<CycleReport> {
        if self.listener.is_some() {
            log::warn!("HierarchyWatcher already started");
            return None;
        }

        self.listener = Some(host.subscribe());
        log::debug!("HierarchyWatcher started");

        if self.settings.bootstrap_on_start {
            Some(self.process_cycle(host))
        } else {
            None
        }
    }

    /// Unsubscribes and forgets every tracked root.
    pub fn stop(&mut self) {
        if self.listener.take().is_some() {
            log::debug!("HierarchyWatcher stopped, dropping {} tracked root(s)", self.tracked.len());
        }
        self.tracked.clear();
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.listener.is_some()
    }

    // ========================================================================
    // Cycles
    // ========================================================================

    /// Runs one cycle if any notification is queued.
    ///
    /// All queued notifications are consumed together, so a burst of edits
    /// costs a single cycle.
    pub fn poll<H: AnimationHost + ?Sized>(&mut self, host: &mut H) -> Option<CycleReport> {
        let pending = self.listener.as_ref()?.drain();
        if pending == 0 {
            return None;
        }

        log::debug!("Processing {pending} coalesced hierarchy notification(s)");
        Some(self.process_cycle(host))
    }

    /// Runs one full cycle over every animated root in `host`.
    pub fn process_cycle<H: AnimationHost + ?Sized>(&mut self, host: &mut H) -> CycleReport {
        let mut report = CycleReport::default();
        let mut seen: FxHashSet<NodeHandle> = FxHashSet::default();

        for root in host.animated_roots() {
            if seen.insert(root) {
                self.process_root(host, root, &mut report);
            }
        }

        let removed: Vec<NodeHandle> = self
            .tracked
            .keys()
            .copied()
            .filter(|root| !seen.contains(root))
            .collect();
        for root in removed {
            self.tracked.remove(&root);
            log::info!("Animated root {root:?} disappeared, no longer tracked");
            report.roots_dropped += 1;
        }

        if report.has_rewrites() && self.settings.refresh_views {
            host.refresh_views();
            report.views_refreshed = true;
        }

        if let Some(listener) = &self.listener {
            let deferred = listener.pending();
            if deferred > 0 {
                log::debug!("{deferred} notification(s) raised during the cycle, deferred to next poll");
            }
        }

        log::debug!("Cycle finished: {report:?}");
        report
    }

    fn process_root<H: AnimationHost + ?Sized>(
        &mut self,
        host: &mut H,
        root: NodeHandle,
        report: &mut CycleReport,
    ) {
        let snapshot = match HierarchySnapshot::capture(host.hierarchy(), root) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("Skipping root for this cycle: {err}");
                report.roots_skipped += 1;
                return;
            }
        };

        let tracked = match self.tracked.entry(root) {
            Entry::Vacant(slot) => {
                log::info!("Tracking animated root {root:?} ({} nodes)", snapshot.len());
                slot.insert(TrackedRoot {
                    root,
                    last_snapshot: snapshot,
                });
                report.roots_discovered += 1;
                return;
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };

        let summary = SnapshotDiff::summarize(&tracked.last_snapshot, &snapshot);
        if summary.added > 0 || summary.removed > 0 {
            log::debug!(
                "Root {root:?}: {} node(s) added, {} removed",
                summary.added,
                summary.removed
            );
        }

        if !summary.changes.is_empty() {
            report.changes_detected += summary.changes.len();
            for change in &summary.changes {
                log::debug!("Root {root:?}: {change}");
            }

            let remap = BindingRemapper::apply_changes(&summary.changes, host.clips_for(root));
            report.bindings_rewritten += remap.bindings_rewritten;
            report.collisions += remap.collisions;

            if remap.bindings_rewritten > 0 && self.settings.persist_on_rewrite {
                match host.persist(root) {
                    Ok(()) => report.roots_persisted += 1,
                    Err(err) => log::error!("Root {root:?}: {err}"),
                }
            }
        }

        tracked.last_snapshot = snapshot;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Handles of every tracked root, in unspecified order.
    pub fn tracked_roots(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.tracked.keys().copied()
    }

    #[inline]
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    #[inline]
    #[must_use]
    pub fn is_tracked(&self, root: NodeHandle) -> bool {
        self.tracked.contains_key(&root)
    }

    /// Baseline snapshot of a tracked root.
    #[must_use]
    pub fn snapshot_of(&self, root: NodeHandle) -> Option<&HierarchySnapshot> {
        self.tracked.get(&root).map(|tracked| &tracked.last_snapshot)
    }
}
