use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::binding::{Binding, BindingKey, BindingPayload, TargetProperty};

/// An animation clip: a set of bindings keyed by path and property.
///
/// Bindings are additionally indexed by path so the remapper can find every
/// property bound to a node in one lookup. Because of that index a binding's
/// path is never edited in place: moving a binding is always
/// [`remove_binding`](Self::remove_binding) followed by
/// [`add_binding`](Self::add_binding).
#[derive(Debug, Clone, Default)]
pub struct AnimationClip {
    name: String,
    bindings: FxHashMap<BindingKey, BindingPayload>,
    by_path: FxHashMap<String, SmallVec<[TargetProperty; 4]>>,
    revision: u64,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_bindings(name: impl Into<String>, bindings: impl IntoIterator<Item = Binding>) -> Self {
        let mut clip = Self::new(name);
        for binding in bindings {
            clip.add_binding(binding.key, binding.payload);
        }
        clip
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monotonic counter bumped by every binding edit.
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Longest payload duration.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.bindings
            .values()
            .map(BindingPayload::duration)
            .fold(0.0_f32, f32::max)
    }

    /// Inserts a binding, returning the payload it replaced, if any.
    pub fn add_binding(&mut self, key: BindingKey, payload: BindingPayload) -> Option<BindingPayload> {
        self.revision += 1;

        let properties = self.by_path.entry(key.path.clone()).or_default();
        if !properties.contains(&key.property) {
            properties.push(key.property.clone());
        }

        self.bindings.insert(key, payload)
    }

    /// Removes a binding entirely, returning its payload.
    pub fn remove_binding(&mut self, key: &BindingKey) -> Option<BindingPayload> {
        let payload = self.bindings.remove(key)?;
        self.revision += 1;

        if let Some(properties) = self.by_path.get_mut(&key.path) {
            properties.retain(|p| *p != key.property);
            if properties.is_empty() {
                self.by_path.remove(&key.path);
            }
        }

        Some(payload)
    }

    #[inline]
    #[must_use]
    pub fn binding(&self, key: &BindingKey) -> Option<&BindingPayload> {
        self.bindings.get(key)
    }

    /// Iterates all bindings in unspecified order.
    pub fn bindings(&self) -> impl Iterator<Item = (&BindingKey, &BindingPayload)> {
        self.bindings.iter()
    }

    /// All binding keys, sorted by path then property.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&BindingKey> {
        let mut keys: Vec<_> = self.bindings.keys().collect();
        keys.sort();
        keys
    }

    /// Properties bound at `path`.
    #[must_use]
    pub fn properties_at(&self, path: &str) -> &[TargetProperty] {
        self.by_path.get(path).map_or(&[][..], SmallVec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Every distinct bound path.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.by_path.keys().map(String::as_str)
    }
}

impl PartialEq for AnimationClip {
    /// Compares name and bindings; the edit revision is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.bindings == other.bindings
    }
}
