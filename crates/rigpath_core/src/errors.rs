//! Error Types
//!
//! This module defines the error type used throughout rigpath.
//!
//! # Overview
//!
//! [`RigPathError`] covers every failure mode of the rebinding pipeline:
//! - Snapshot capture against a root that is no longer live
//! - Binding path collisions detected while remapping
//! - Scene graph misuse (unknown nodes, cyclic reparenting)
//! - Host persistence failures
//!
//! Most of these never reach the caller of a watcher cycle. The orchestrator
//! contains them per root and logs them, because a missed rebind is picked up
//! again on the next cycle.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rigpath_core::{Result, RigPathError};
//!
//! fn capture_root() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::{ClipKey, NodeHandle};

/// The main error type for rigpath.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RigPathError {
    // ========================================================================
    // Hierarchy Errors
    // ========================================================================
    /// The animated root is not a live node (it was removed before capture).
    #[error("Invalid animated root: {0:?}")]
    InvalidRoot(NodeHandle),

    /// A node handle does not refer to a live node.
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeHandle),

    /// Reparenting would place a node beneath itself.
    #[error("Cannot attach {child:?} beneath {parent:?}: parent is the node itself or one of its descendants")]
    InvalidReparent {
        /// The node being moved
        child: NodeHandle,
        /// The requested new parent
        parent: NodeHandle,
    },

    // ========================================================================
    // Clip Errors
    // ========================================================================
    /// Two bindings were about to land on the same path and property.
    ///
    /// Reported for diagnostics only; the remapper resolves it last-write-wins.
    #[error("Binding path collision in clip '{clip}': '{path}' ({property})")]
    BindingPathCollision {
        /// Name of the clip containing the collision
        clip: String,
        /// The contested binding path
        path: String,
        /// Display form of the contested property
        property: String,
    },

    /// The clip key does not refer to a clip in the store.
    #[error("Clip not found: {0:?}")]
    ClipNotFound(ClipKey),

    // ========================================================================
    // Host Errors
    // ========================================================================
    /// The host failed to persist rewritten clips.
    #[error("Failed to persist clips: {0}")]
    PersistFailed(String),
}

/// Alias for `Result<T, RigPathError>`.
pub type Result<T> = std::result::Result<T, RigPathError>;
