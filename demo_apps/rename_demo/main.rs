use glam::{Quat, Vec3};
use rigpath::prelude::*;

fn print_bindings(host: &SceneHost, clip: rigpath::ClipKey) {
    if let Some(clip) = host.library.get(clip) {
        println!("  clip '{}':", clip.name());
        for key in clip.sorted_keys() {
            println!("    {key}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut host = SceneHost::new();
    let root = host.scene.create_animated_root("Character");
    let hips = host.scene.create_child(root, "Hips")?;
    let spine = host.scene.create_child(hips, "Spine")?;
    let arm = host.scene.create_child(spine, "Arm")?;
    let hand = host.scene.create_child(arm, "Hand")?;

    let wave = host.library.add_for(
        root,
        AnimationClip::with_bindings(
            "Wave",
            [
                Binding::new(
                    "Hips/Spine/Arm",
                    TargetProperty::Rotation,
                    CurveData::Quaternion(KeyframeTrack::new(
                        vec![0.0, 0.5, 1.0],
                        vec![
                            Quat::IDENTITY,
                            Quat::from_rotation_z(1.2),
                            Quat::IDENTITY,
                        ],
                        InterpolationMode::Linear,
                    )),
                ),
                Binding::new(
                    "Hips/Spine/Arm/Hand",
                    TargetProperty::Translation,
                    CurveData::Vector3(KeyframeTrack::new(
                        vec![0.0, 1.0],
                        vec![Vec3::ZERO, Vec3::new(0.0, 0.1, 0.0)],
                        InterpolationMode::Linear,
                    )),
                ),
            ],
        ),
    );

    let mut watcher = HierarchyWatcher::new(WatcherSettings::default());
    watcher.start(&mut host);
    println!("Initial bindings:");
    print_bindings(&host, wave);

    host.scene.set_name(arm, "RightArm")?;
    if let Some(report) = watcher.poll(&mut host) {
        println!("After renaming Arm -> RightArm ({} binding(s) rewritten):", report.bindings_rewritten);
        print_bindings(&host, wave);
    }

    let chest = host.scene.create_child(spine, "Chest")?;
    host.scene.attach(arm, chest)?;
    if let Some(report) = watcher.poll(&mut host) {
        println!("After moving RightArm under Chest ({} binding(s) rewritten):", report.bindings_rewritten);
        print_bindings(&host, wave);
    }

    host.scene.remove_node(hand)?;
    if let Some(report) = watcher.poll(&mut host) {
        println!("After deleting Hand ({} binding(s) rewritten, stale binding kept):", report.bindings_rewritten);
        print_bindings(&host, wave);
    }

    log::info!("Saved {} time(s), refreshed views {} time(s)", host.saves(), host.view_refreshes());
    watcher.stop();
    Ok(())
}
