use std::fmt;

use uuid::Uuid;

use crate::tracks::CurveData;

/// Property animated by a binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetProperty {
    Translation, // transform.position
    Rotation,    // transform.rotation
    Scale,       // transform.scale
    Weights,     // morph target weights
    Active,      // node enabled flag
    Sprite,      // sprite renderer image (object reference)
    /// Any other component property, e.g. `"Light.intensity"`.
    Custom(String),
}

impl fmt::Display for TargetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetProperty::Translation => f.write_str("translation"),
            TargetProperty::Rotation => f.write_str("rotation"),
            TargetProperty::Scale => f.write_str("scale"),
            TargetProperty::Weights => f.write_str("weights"),
            TargetProperty::Active => f.write_str("active"),
            TargetProperty::Sprite => f.write_str("sprite"),
            TargetProperty::Custom(name) => f.write_str(name),
        }
    }
}

/// Identifies a binding inside a clip: the node path relative to the
/// animated root plus the animated property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingKey {
    pub path: String,
    pub property: TargetProperty,
}

impl BindingKey {
    #[must_use]
    pub fn new(path: impl Into<String>, property: TargetProperty) -> Self {
        Self {
            path: path.into(),
            property,
        }
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.property)
    }
}

/// Reference to an asset (sprite, material, ...) keyed by an object track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef(pub Uuid);

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectKeyframe {
    pub time: f32,
    /// `None` clears the slot at this key.
    pub value: Option<ObjectRef>,
}

/// Keyed object slots, e.g. a sprite swap sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectReferenceKeyframes {
    pub keys: Vec<ObjectKeyframe>,
}

impl ObjectReferenceKeyframes {
    #[must_use]
    pub fn new(keys: Vec<ObjectKeyframe>) -> Self {
        Self { keys }
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.keys.last().map_or(0.0, |key| key.time)
    }
}

/// What a binding animates with. Opaque to the remapper, which only ever
/// moves it between keys.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingPayload {
    Curve(CurveData),
    ObjectReference(ObjectReferenceKeyframes),
}

impl BindingPayload {
    #[must_use]
    pub fn duration(&self) -> f32 {
        match self {
            BindingPayload::Curve(curve) => curve.duration(),
            BindingPayload::ObjectReference(keys) => keys.duration(),
        }
    }
}

impl From<CurveData> for BindingPayload {
    fn from(curve: CurveData) -> Self {
        BindingPayload::Curve(curve)
    }
}

impl From<ObjectReferenceKeyframes> for BindingPayload {
    fn from(keys: ObjectReferenceKeyframes) -> Self {
        BindingPayload::ObjectReference(keys)
    }
}

/// A complete binding: key plus payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub key: BindingKey,
    pub payload: BindingPayload,
}

impl Binding {
    #[must_use]
    pub fn new(path: impl Into<String>, property: TargetProperty, payload: impl Into<BindingPayload>) -> Self {
        Self {
            key: BindingKey::new(path, property),
            payload: payload.into(),
        }
    }
}
