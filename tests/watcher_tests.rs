//! Hierarchy Watcher Integration Tests
//!
//! Tests for:
//! - Rename propagation through descendants into clip bindings
//! - Unaffected bindings, deletion, reorder and addition being inert
//! - New-root bootstrap and root removal / reappearance
//! - Notification coalescing and side-effect bookkeeping
//! - Edits raised by the host during a cycle being deferred to the next poll
//! - Multiple roots and clips shared between roots

use glam::{Quat, Vec3};
use uuid::Uuid;

use rigpath::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn translation(seed: f32) -> BindingPayload {
    BindingPayload::Curve(CurveData::Vector3(KeyframeTrack::new(
        vec![0.0, 0.5, 1.0],
        vec![Vec3::splat(seed), Vec3::new(seed, 1.0, 0.0), Vec3::ZERO],
        InterpolationMode::Linear,
    )))
}

fn rotation() -> BindingPayload {
    BindingPayload::Curve(CurveData::Quaternion(KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Quat::IDENTITY, Quat::from_rotation_y(1.0)],
        InterpolationMode::Linear,
    )))
}

fn sprite_swap() -> BindingPayload {
    BindingPayload::ObjectReference(ObjectReferenceKeyframes::new(vec![
        ObjectKeyframe {
            time: 0.0,
            value: Some(ObjectRef(Uuid::from_u128(0xA))),
        },
        ObjectKeyframe {
            time: 0.5,
            value: Some(ObjectRef(Uuid::from_u128(0xB))),
        },
    ]))
}

/// `Root/A/{B, C}` with one clip bound to `A/B` and `A/C`.
struct Rig {
    host: SceneHost,
    watcher: HierarchyWatcher,
    root: NodeHandle,
    a: NodeHandle,
    b: NodeHandle,
    c: NodeHandle,
    clip: rigpath::ClipKey,
}

impl Rig {
    fn new() -> Self {
        init_logger();
        let mut host = SceneHost::new();
        let root = host.scene.create_animated_root("Root");
        let a = host.scene.create_child(root, "A").unwrap();
        let b = host.scene.create_child(a, "B").unwrap();
        let c = host.scene.create_child(a, "C").unwrap();

        let clip = host.library.add_for(
            root,
            AnimationClip::with_bindings(
                "Wave",
                [
                    Binding::new("A/B", TargetProperty::Translation, translation(1.0)),
                    Binding::new("A/B", TargetProperty::Sprite, sprite_swap()),
                    Binding::new("A/C", TargetProperty::Rotation, rotation()),
                ],
            ),
        );

        let mut watcher = HierarchyWatcher::new(WatcherSettings::default());
        watcher.start(&mut host);

        Self {
            host,
            watcher,
            root,
            a,
            b,
            c,
            clip,
        }
    }

    fn clip(&self) -> &AnimationClip {
        self.host.library.get(self.clip).unwrap()
    }

    fn poll(&mut self) -> CycleReport {
        self.watcher
            .poll(&mut self.host)
            .expect("a hierarchy edit should queue a cycle")
    }

    fn bound_paths(&self) -> Vec<String> {
        self.clip()
            .sorted_keys()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }
}

// ============================================================================
// Rename Propagation
// ============================================================================

#[test]
fn rename_parent_rebinds_descendants() {
    let mut rig = Rig::new();
    rig.host.scene.set_name(rig.a, "A2").unwrap();

    let report = rig.poll();

    assert_eq!(report.changes_detected, 3); // A, A/B, A/C
    assert_eq!(report.bindings_rewritten, 3);
    assert_eq!(report.collisions, 0);
    assert_eq!(
        rig.bound_paths(),
        vec!["A2/B:translation", "A2/B:sprite", "A2/C:rotation"]
    );
    assert_eq!(
        rig.clip().binding(&BindingKey::new("A2/B", TargetProperty::Translation)),
        Some(&translation(1.0))
    );
    assert_eq!(
        rig.clip().binding(&BindingKey::new("A2/B", TargetProperty::Sprite)),
        Some(&sprite_swap())
    );
}

#[test]
fn rename_leaf_leaves_sibling_untouched() {
    let mut rig = Rig::new();
    rig.host.scene.set_name(rig.b, "B2").unwrap();

    let report = rig.poll();

    assert_eq!(report.changes_detected, 1);
    assert_eq!(report.bindings_rewritten, 2);
    assert_eq!(
        rig.clip().binding(&BindingKey::new("A/C", TargetProperty::Rotation)),
        Some(&rotation())
    );
    assert!(!rig.clip().contains_path("A/B"));
    assert!(rig.clip().contains_path("A/B2"));
}

#[test]
fn reparent_rebinds_moved_subtree() {
    let mut rig = Rig::new();
    let holder = rig.host.scene.create_child(rig.root, "Holder").unwrap();
    rig.host.scene.attach(rig.a, holder).unwrap();

    rig.poll();

    assert_eq!(
        rig.bound_paths(),
        vec![
            "Holder/A/B:translation",
            "Holder/A/B:sprite",
            "Holder/A/C:rotation"
        ]
    );
}

#[test]
fn rename_and_revert_in_two_cycles_round_trips() {
    let mut rig = Rig::new();
    let before = rig.clip().clone();

    rig.host.scene.set_name(rig.a, "Temp").unwrap();
    rig.poll();
    rig.host.scene.set_name(rig.a, "A").unwrap();
    rig.poll();

    assert_eq!(rig.clip(), &before);
}

#[test]
fn swapping_names_rebinds_each_binding_once() {
    let mut rig = Rig::new();
    rig.host.scene.set_name(rig.b, "Tmp").unwrap();
    rig.host.scene.set_name(rig.c, "B").unwrap();
    rig.host.scene.set_name(rig.b, "C").unwrap();

    let report = rig.poll();

    assert_eq!(report.changes_detected, 2);
    assert_eq!(report.collisions, 0);
    assert_eq!(
        rig.clip().binding(&BindingKey::new("A/C", TargetProperty::Translation)),
        Some(&translation(1.0))
    );
    assert_eq!(
        rig.clip().binding(&BindingKey::new("A/B", TargetProperty::Rotation)),
        Some(&rotation())
    );
}

// ============================================================================
// Inert Edits
// ============================================================================

#[test]
fn deleting_node_leaves_stale_binding() {
    let mut rig = Rig::new();
    let revision = rig.clip().revision();
    rig.host.scene.remove_node(rig.b).unwrap();

    let report = rig.poll();

    assert_eq!(report.changes_detected, 0);
    assert_eq!(report.bindings_rewritten, 0);
    assert!(!report.views_refreshed);
    assert_eq!(rig.clip().revision(), revision);
    assert_eq!(
        rig.clip().binding(&BindingKey::new("A/B", TargetProperty::Translation)),
        Some(&translation(1.0))
    );
}

#[test]
fn reorder_and_additions_rewrite_nothing() {
    let mut rig = Rig::new();
    rig.host.scene.set_sibling_index(rig.c, 0).unwrap();
    rig.host.scene.create_child(rig.b, "Fingers").unwrap();

    let report = rig.poll();

    assert_eq!(report.changes_detected, 0);
    assert_eq!(rig.host.saves(), 0);
    assert_eq!(rig.watcher.snapshot_of(rig.root).map(HierarchySnapshot::len), Some(4));
}

#[test]
fn rename_outside_animated_roots_is_ignored() {
    let mut rig = Rig::new();
    let prop = rig.host.scene.create_node("Prop");
    rig.poll();

    rig.host.scene.set_name(prop, "Crate").unwrap();
    let report = rig.poll();

    assert_eq!(report, CycleReport::default());
}

// ============================================================================
// Root Lifecycle
// ============================================================================

#[test]
fn new_root_bootstraps_without_rewrites() {
    let mut rig = Rig::new();

    let other = rig.host.scene.create_animated_root("Other");
    let hand = rig.host.scene.create_child(other, "Hand").unwrap();
    let key = rig.host.library.add_for(
        other,
        AnimationClip::with_bindings(
            "Grab",
            [Binding::new("OldHand", TargetProperty::Rotation, rotation())],
        ),
    );
    rig.host.scene.set_name(hand, "OldHand").unwrap();

    let report = rig.poll();

    assert_eq!(report.roots_discovered, 1);
    assert_eq!(report.bindings_rewritten, 0);
    assert!(rig.watcher.is_tracked(other));
    assert!(rig.host.library.get(key).unwrap().contains_path("OldHand"));
}

#[test]
fn removed_root_is_dropped_and_reappears_fresh() {
    let mut rig = Rig::new();

    rig.host.scene.set_animated(rig.root, false).unwrap();
    let report = rig.poll();
    assert_eq!(report.roots_dropped, 1);
    assert!(!rig.watcher.is_tracked(rig.root));

    // Edited while untracked: no baseline to diff against.
    rig.host.scene.set_name(rig.a, "A2").unwrap();
    rig.poll();

    rig.host.scene.set_animated(rig.root, true).unwrap();
    let report = rig.poll();

    assert_eq!(report.roots_discovered, 1);
    assert_eq!(report.bindings_rewritten, 0);
    assert!(rig.clip().contains_path("A/B"));
    assert_eq!(
        rig.watcher
            .snapshot_of(rig.root)
            .and_then(|s| s.path_of(rig.b)),
        Some("A2/B")
    );
}

#[test]
fn removing_root_node_drops_tracking() {
    let mut rig = Rig::new();
    rig.host.scene.remove_node(rig.root).unwrap();

    let report = rig.poll();

    assert_eq!(report.roots_dropped, 1);
    assert_eq!(rig.watcher.tracked_count(), 0);
}

#[test]
fn renaming_root_itself_changes_no_paths() {
    let mut rig = Rig::new();
    rig.host.scene.set_name(rig.root, "Hero").unwrap();

    let report = rig.poll();

    assert_eq!(report.changes_detected, 0);
    assert!(rig.clip().contains_path("A/B"));
}

// ============================================================================
// Notifications & Side Effects
// ============================================================================

#[test]
fn burst_of_edits_is_one_cycle() {
    let mut rig = Rig::new();
    rig.host.scene.set_name(rig.a, "Arm").unwrap();
    rig.host.scene.set_name(rig.b, "Hand").unwrap();
    rig.host.scene.set_name(rig.c, "Thumb").unwrap();

    let report = rig.poll();

    assert_eq!(report.bindings_rewritten, 3);
    assert_eq!(
        rig.bound_paths(),
        vec!["Arm/Hand:translation", "Arm/Hand:sprite", "Arm/Thumb:rotation"]
    );
    assert!(rig.watcher.poll(&mut rig.host).is_none());
}

#[test]
fn rewrite_persists_and_refreshes_once() {
    let mut rig = Rig::new();
    rig.host.scene.set_name(rig.a, "A2").unwrap();

    let report = rig.poll();

    assert_eq!(report.roots_persisted, 1);
    assert!(report.views_refreshed);
    assert_eq!(rig.host.saves(), 1);
    assert_eq!(rig.host.view_refreshes(), 1);
    assert!(!rig.host.library.is_dirty(rig.clip));
}

#[test]
fn shared_clip_is_rebound_through_each_root() {
    let mut rig = Rig::new();
    let twin = rig.host.scene.create_animated_root("Twin");
    let twin_a = rig.host.scene.create_child(twin, "A").unwrap();
    rig.host.scene.create_child(twin_a, "B").unwrap();
    rig.host.library.assign(twin, rig.clip).unwrap();
    rig.poll();

    rig.host.scene.set_name(twin_a, "Left").unwrap();
    let report = rig.poll();

    assert_eq!(report.bindings_rewritten, 2);
    assert!(rig.clip().contains_path("Left/B"));
    assert!(rig.clip().contains_path("A/C"));
}

#[test]
fn independent_roots_only_touch_their_clips() {
    let mut rig = Rig::new();
    let other = rig.host.scene.create_animated_root("Other");
    let other_a = rig.host.scene.create_child(other, "A").unwrap();
    rig.host.scene.create_child(other_a, "B").unwrap();
    let other_clip = rig.host.library.add_for(
        other,
        AnimationClip::with_bindings(
            "OtherWave",
            [Binding::new("A/B", TargetProperty::Scale, translation(5.0))],
        ),
    );
    rig.poll();

    rig.host.scene.set_name(rig.a, "Mine").unwrap();
    rig.poll();

    assert!(rig.clip().contains_path("Mine/B"));
    assert!(rig.host.library.get(other_clip).unwrap().contains_path("A/B"));
}

// ============================================================================
// Edits Raised During a Cycle
// ============================================================================

/// Scene host whose `persist` renames a node, like an editor that tidies
/// names while saving.
struct RenamingHost {
    inner: SceneHost,
    rename_on_persist: Option<(NodeHandle, &'static str)>,
}

impl AnimationHost for RenamingHost {
    type Graph = Scene;

    fn hierarchy(&self) -> &Scene {
        &self.inner.scene
    }

    fn animated_roots(&self) -> Vec<NodeHandle> {
        self.inner.animated_roots()
    }

    fn subscribe(&mut self) -> HierarchyListener {
        self.inner.subscribe()
    }

    fn clips_for(&mut self, root: NodeHandle) -> Vec<&mut AnimationClip> {
        self.inner.clips_for(root)
    }

    fn persist(&mut self, root: NodeHandle) -> rigpath::Result<()> {
        if let Some((node, name)) = self.rename_on_persist.take() {
            self.inner.scene.set_name(node, name)?;
        }
        self.inner.persist(root)
    }
}

#[test]
fn rename_during_persist_is_handled_by_next_poll() {
    init_logger();
    let mut host = RenamingHost {
        inner: SceneHost::new(),
        rename_on_persist: None,
    };
    let root = host.inner.scene.create_animated_root("Root");
    let a = host.inner.scene.create_child(root, "A").unwrap();
    let b = host.inner.scene.create_child(a, "B").unwrap();
    let clip = host.inner.library.add_for(
        root,
        AnimationClip::with_bindings(
            "Pulse",
            [Binding::new("A/B", TargetProperty::Scale, translation(2.0))],
        ),
    );

    let mut watcher = HierarchyWatcher::new(WatcherSettings::default());
    watcher.start(&mut host);

    host.rename_on_persist = Some((b, "B2"));
    host.inner.scene.set_name(a, "A1").unwrap();
    let first = watcher.poll(&mut host).unwrap();

    assert_eq!(first.changes_detected, 2);
    assert_eq!(first.bindings_rewritten, 1);
    assert!(host.rename_on_persist.is_none());
    assert!(host.inner.library.get(clip).unwrap().contains_path("A1/B"));
    assert_eq!(
        watcher.snapshot_of(root).and_then(|s| s.path_of(b)),
        Some("A1/B")
    );

    let second = watcher.poll(&mut host).unwrap();

    assert_eq!(second.changes_detected, 1);
    assert_eq!(second.bindings_rewritten, 1);
    let keys: Vec<String> = host
        .inner
        .library
        .get(clip)
        .unwrap()
        .sorted_keys()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(keys, vec!["A1/B2:scale"]);

    assert!(watcher.poll(&mut host).is_none());
}
