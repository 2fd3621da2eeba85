//! # rigpath_core
//!
//! Foundational types shared by every rigpath crate:
//!
//! - [`NodeHandle`] / [`ClipKey`]: generational keys for scene nodes and clips
//! - [`RigPathError`]: the workspace-wide error type
//! - [`ChangeRecord`]: one detected path migration for a stable node
//! - [`Hierarchy`]: read-only view of a host scene graph
//! - [`events`]: the single-consumer hierarchy change queue
//! - [`path`]: helpers for slash-separated binding paths

pub mod change;
pub mod errors;
pub mod events;
pub mod hierarchy;
pub mod path;

pub use change::ChangeRecord;
pub use errors::{Result, RigPathError};
pub use events::{HierarchyChanged, HierarchyListener, HierarchyNotifier};
pub use hierarchy::Hierarchy;

use slotmap::new_key_type;

new_key_type! {
    /// Stable identity of a hierarchy node.
    ///
    /// Survives renames and reparenting. A handle is never derived from a
    /// node's name or path, and a removed node's handle is never handed out
    /// again for a different node.
    pub struct NodeHandle;

    /// Key of an animation clip inside a clip store.
    pub struct ClipKey;
}
