use rustc_hash::FxHashMap;
use slotmap::{SecondaryMap, SlotMap};

use rigpath_core::{ClipKey, NodeHandle, Result, RigPathError};

use crate::clip::AnimationClip;

/// Clip store: owns clips and records which animated roots use them.
///
/// A clip may be assigned to several roots. The library also remembers the
/// clip revision at the last save so hosts can tell which clips a rebind
/// touched.
#[derive(Debug, Default)]
pub struct ClipLibrary {
    clips: SlotMap<ClipKey, AnimationClip>,
    assignments: FxHashMap<NodeHandle, Vec<ClipKey>>,
    saved: SecondaryMap<ClipKey, u64>,
}

impl ClipLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clips: SlotMap::with_key(),
            assignments: FxHashMap::default(),
            saved: SecondaryMap::new(),
        }
    }

    /// Adds a clip. Its current state counts as saved.
    pub fn add(&mut self, clip: AnimationClip) -> ClipKey {
        let revision = clip.revision();
        let key = self.clips.insert(clip);
        self.saved.insert(key, revision);
        key
    }

    /// Adds a clip and assigns it to `root` in one step.
    pub fn add_for(&mut self, root: NodeHandle, clip: AnimationClip) -> ClipKey {
        let key = self.add(clip);
        self.assignments.entry(root).or_default().push(key);
        key
    }

    /// Assigns an existing clip to `root`. Assigning twice is a no-op.
    pub fn assign(&mut self, root: NodeHandle, key: ClipKey) -> Result<()> {
        if !self.clips.contains_key(key) {
            return Err(RigPathError::ClipNotFound(key));
        }

        let keys = self.assignments.entry(root).or_default();
        if !keys.contains(&key) {
            keys.push(key);
        }
        Ok(())
    }

    /// Removes a clip and every assignment of it.
    pub fn remove(&mut self, key: ClipKey) -> Option<AnimationClip> {
        let clip = self.clips.remove(key)?;
        self.saved.remove(key);
        self.assignments.retain(|_, keys| {
            keys.retain(|&k| k != key);
            !keys.is_empty()
        });
        Some(clip)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: ClipKey) -> Option<&AnimationClip> {
        self.clips.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: ClipKey) -> Option<&mut AnimationClip> {
        self.clips.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Clip keys assigned to `root`, in assignment order.
    #[must_use]
    pub fn keys_for(&self, root: NodeHandle) -> &[ClipKey] {
        self.assignments.get(&root).map_or(&[][..], Vec::as_slice)
    }

    /// Mutable access to every clip assigned to `root`.
    pub fn clips_for_mut(&mut self, root: NodeHandle) -> Vec<&mut AnimationClip> {
        let Some(keys) = self.assignments.get(&root) else {
            return Vec::new();
        };

        self.clips
            .iter_mut()
            .filter(|(key, _)| keys.contains(key))
            .map(|(_, clip)| clip)
            .collect()
    }

    /// `true` if the clip changed since it was added or last saved.
    #[must_use]
    pub fn is_dirty(&self, key: ClipKey) -> bool {
        match (self.clips.get(key), self.saved.get(key)) {
            (Some(clip), Some(&saved)) => clip.revision() != saved,
            (Some(_), None) => true,
            _ => false,
        }
    }

    /// Keys of every unsaved clip assigned to `root`.
    #[must_use]
    pub fn dirty_keys_for(&self, root: NodeHandle) -> Vec<ClipKey> {
        self.keys_for(root)
            .iter()
            .copied()
            .filter(|&key| self.is_dirty(key))
            .collect()
    }

    /// Records the current revision of `key` as saved.
    pub fn mark_saved(&mut self, key: ClipKey) -> Result<()> {
        let clip = self.clips.get(key).ok_or(RigPathError::ClipNotFound(key))?;
        self.saved.insert(key, clip.revision());
        Ok(())
    }
}
