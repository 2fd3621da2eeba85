//! Scene graph and hierarchy tracking.
//!
//! - [`Scene`]: in-memory scene graph with stable node handles
//! - [`Node`]: a named node with ordered children
//! - [`HierarchySnapshot`]: immutable capture of an animated root's subtree
//! - [`SnapshotDiff`]: detects nodes whose binding path moved between captures

pub mod diff;
pub mod node;
pub mod scene;
pub mod snapshot;

pub use diff::{DiffSummary, SnapshotDiff};
pub use node::Node;
pub use scene::Scene;
pub use snapshot::{HierarchySnapshot, NodeInfo};
