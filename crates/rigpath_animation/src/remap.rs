//! Binding Remapper
//!
//! Applies [`ChangeRecord`]s to animation clips: every binding whose path
//! equals a record's old path is moved to the record's new path with its
//! property and payload untouched.
//!
//! # Atomicity
//!
//! Each clip is rewritten in two phases. First every matching binding is
//! removed and its payload held aside, then all of them are reinserted at
//! their new paths. Records are therefore independent of each other: with
//! `A → B` and `B → C` in the same batch, the binding that was at `A` ends up
//! at `B` and the one that was at `B` ends up at `C`, never both at `C`.
//!
//! # Collisions
//!
//! Two records sharing an old path, or a reinsert landing on a key that is
//! already occupied, violate hierarchy invariants the remapper cannot fix.
//! They are logged as [`RigPathError::BindingPathCollision`], counted, and
//! resolved last-write-wins.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use rigpath_core::{ChangeRecord, RigPathError};

use crate::binding::{BindingKey, BindingPayload, TargetProperty};
use crate::clip::AnimationClip;

/// Totals for one remap call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemapReport {
    pub bindings_rewritten: usize,
    pub clips_touched: usize,
    pub collisions: usize,
}

impl RemapReport {
    pub fn merge(&mut self, other: RemapReport) {
        self.bindings_rewritten += other.bindings_rewritten;
        self.clips_touched += other.clips_touched;
        self.collisions += other.collisions;
    }
}

/// Old path → new path, deduplicated by old path (last record wins).
struct PathMoves<'a> {
    moves: Vec<(&'a str, &'a str)>,
    collisions: usize,
}

impl<'a> PathMoves<'a> {
    fn from_records(records: &'a [ChangeRecord]) -> Self {
        let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();
        let mut moves: Vec<(&'a str, &'a str)> = Vec::with_capacity(records.len());
        let mut collisions = 0;

        for record in records {
            if record.old_path == record.new_path {
                continue;
            }

            if let Some(&slot) = index.get(record.old_path.as_str()) {
                log::warn!(
                    "Two change records share old path '{}' ('{}' and '{}'), keeping the latter",
                    record.old_path,
                    moves[slot].1,
                    record.new_path
                );
                moves[slot].1 = record.new_path.as_str();
                collisions += 1;
            } else {
                index.insert(record.old_path.as_str(), moves.len());
                moves.push((record.old_path.as_str(), record.new_path.as_str()));
            }
        }

        Self { moves, collisions }
    }
}

pub struct BindingRemapper;

impl BindingRemapper {
    /// Rewrites every binding affected by `records` in every clip.
    ///
    /// Clips without matching bindings are left untouched (not even their
    /// revision changes).
    pub fn apply_changes<'c, I>(records: &[ChangeRecord], clips: I) -> RemapReport
    where
        I: IntoIterator<Item = &'c mut AnimationClip>,
    {
        let mut report = RemapReport::default();
        if records.is_empty() {
            return report;
        }

        let moves = PathMoves::from_records(records);
        report.collisions += moves.collisions;

        for clip in clips {
            report.merge(Self::apply_to_clip(&moves.moves, clip));
        }

        report
    }

    fn apply_to_clip(moves: &[(&str, &str)], clip: &mut AnimationClip) -> RemapReport {
        let mut report = RemapReport::default();

        // Phase 1: detach everything that moves.
        let mut detached: Vec<(&str, TargetProperty, BindingPayload)> = Vec::new();
        for &(old_path, new_path) in moves {
            let properties: SmallVec<[TargetProperty; 4]> =
                clip.properties_at(old_path).iter().cloned().collect();

            for property in properties {
                let key = BindingKey::new(old_path, property);
                if let Some(payload) = clip.remove_binding(&key) {
                    detached.push((new_path, key.property, payload));
                }
            }
        }

        if detached.is_empty() {
            return report;
        }

        // Phase 2: reattach at the new paths.
        for (new_path, property, payload) in detached {
            let key = BindingKey::new(new_path, property);
            log::debug!("Clip '{}': rebinding -> {}", clip.name(), key);

            let collision = clip.binding(&key).is_some().then(|| RigPathError::BindingPathCollision {
                clip: clip.name().to_owned(),
                path: key.path.clone(),
                property: key.property.to_string(),
            });
            if let Some(err) = collision {
                log::warn!("{err}, overwriting");
                report.collisions += 1;
            }

            clip.add_binding(key, payload);
            report.bindings_rewritten += 1;
        }

        report.clips_touched = 1;
        log::info!(
            "Rebound {} binding(s) in clip '{}'",
            report.bindings_rewritten,
            clip.name()
        );
        report
    }
}
