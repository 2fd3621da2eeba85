//! Animation clip data and path rebinding.
//!
//! Clips address the nodes they animate by slash-separated paths relative to
//! an animated root. This crate holds the clip model, the clip store, and the
//! [`BindingRemapper`] that moves bindings when those paths change.

pub mod binding;
pub mod clip;
pub mod library;
pub mod remap;
pub mod tracks;

pub use binding::{
    Binding, BindingKey, BindingPayload, ObjectKeyframe, ObjectRef, ObjectReferenceKeyframes,
    TargetProperty,
};
pub use clip::AnimationClip;
pub use library::ClipLibrary;
pub use remap::{BindingRemapper, RemapReport};
pub use tracks::{CurveData, InterpolationMode, KeyframeTrack};
