//! # rigpath
//!
//! Keeps animation clip bindings valid while a scene hierarchy is edited.
//!
//! Animation clips address the nodes they animate by slash-separated paths
//! relative to an animated root (`"Hips/Spine/Chest"`). Renaming or moving a
//! node silently breaks every binding that names it. rigpath watches animated
//! hierarchies, detects which nodes moved by diffing structural snapshots
//! keyed on stable node handles, and rewrites the affected bindings while
//! keeping their keyframes intact.
//!
//! ```rust,ignore
//! use rigpath::prelude::*;
//!
//! let mut host = SceneHost::new();
//! let root = host.scene.create_animated_root("Character");
//! let hips = host.scene.create_child(root, "Hips")?;
//! host.library.add_for(root, walk_clip);
//!
//! let mut watcher = HierarchyWatcher::new(WatcherSettings::default());
//! watcher.start(&mut host);
//!
//! host.scene.set_name(hips, "Pelvis")?;
//! watcher.poll(&mut host); // "Hips/..." bindings now read "Pelvis/..."
//! ```

pub use rigpath_animation as animation;
pub use rigpath_scene as scene;
pub use rigpath_watcher as watcher;

pub use rigpath_animation::{
    AnimationClip, Binding, BindingKey, BindingPayload, BindingRemapper, ClipLibrary, CurveData,
    RemapReport, TargetProperty,
};
pub use rigpath_core::{
    ChangeRecord, ClipKey, Hierarchy, HierarchyListener, NodeHandle, Result, RigPathError,
};
pub use rigpath_scene::{HierarchySnapshot, Scene, SnapshotDiff};
pub use rigpath_watcher::{AnimationHost, CycleReport, HierarchyWatcher, SceneHost, WatcherSettings};

pub mod prelude {
    pub use rigpath_animation::{
        AnimationClip, Binding, BindingKey, BindingPayload, BindingRemapper, ClipLibrary,
        CurveData, InterpolationMode, KeyframeTrack, ObjectKeyframe, ObjectRef,
        ObjectReferenceKeyframes, TargetProperty,
    };
    pub use rigpath_core::{ChangeRecord, Hierarchy, HierarchyListener, NodeHandle, RigPathError};
    pub use rigpath_scene::{HierarchySnapshot, Scene, SnapshotDiff};
    pub use rigpath_watcher::{
        AnimationHost, CycleReport, HierarchyWatcher, SceneHost, WatcherSettings,
    };
}
