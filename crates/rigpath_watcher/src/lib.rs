//! Hierarchy watching and automatic binding repair.
//!
//! - [`HierarchyWatcher`]: reacts to hierarchy notifications and rebinds clips
//! - [`AnimationHost`]: the adapter a host environment implements
//! - [`SceneHost`]: adapter over the in-memory scene and clip library
//! - [`WatcherSettings`]: side-effect switches

pub mod host;
pub mod settings;
pub mod watcher;

pub use host::{AnimationHost, SceneHost};
pub use settings::WatcherSettings;
pub use watcher::{CycleReport, HierarchyWatcher, TrackedRoot};
