//! Snapshot diffing.
//!
//! Compares two snapshots of the same animated root and reports every node
//! whose binding path moved. A rename is just a path change of the renamed
//! node plus each of its descendants, so there is one code path for both.

use rigpath_core::ChangeRecord;

use crate::snapshot::HierarchySnapshot;

/// Outcome of a diff together with structural bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub changes: Vec<ChangeRecord>,
    /// Nodes that only exist in the newer snapshot.
    pub added: usize,
    /// Nodes that only exist in the older snapshot.
    pub removed: usize,
}

impl DiffSummary {
    #[inline]
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty() && self.added == 0 && self.removed == 0
    }
}

pub struct SnapshotDiff;

impl SnapshotDiff {
    /// Returns a record for every node present in both snapshots whose path
    /// differs, in `new`'s traversal order.
    ///
    /// Created and deleted nodes produce no record: new nodes have no
    /// bindings to migrate and bindings of deleted nodes are left alone.
    #[must_use]
    pub fn diff(old: &HierarchySnapshot, new: &HierarchySnapshot) -> Vec<ChangeRecord> {
        if old.root() != new.root() {
            log::warn!(
                "Refusing to diff snapshots of different roots ({:?} vs {:?})",
                old.root(),
                new.root()
            );
            return Vec::new();
        }

        new.iter()
            .filter_map(|(node, current)| {
                let previous = old.get(node)?;
                (previous.path != current.path).then(|| {
                    ChangeRecord::new(
                        node,
                        previous.path.clone(),
                        current.path.clone(),
                        previous.name != current.name,
                    )
                })
            })
            .collect()
    }

    #[must_use]
    pub fn summarize(old: &HierarchySnapshot, new: &HierarchySnapshot) -> DiffSummary {
        DiffSummary {
            changes: Self::diff(old, new),
            added: new.added_since(old).len(),
            removed: new.removed_since(old).len(),
        }
    }
}
