// Host-side tests for camera sequences: playback, completion and replacement.

use glam::Vec3;
use island_core::{CameraPose, CameraRig, SequenceKind, DEFAULT_CAMERA_POSITION, DEFAULT_CAMERA_TARGET};

const FRAME: f32 = 1.0 / 60.0;

fn run_until_complete(rig: &mut CameraRig, max_frames: usize) -> usize {
    let mut completions = 0;
    for _ in 0..max_frames {
        if rig.update(FRAME).is_some() {
            completions += 1;
        }
    }
    completions
}

#[test]
fn fly_in_lands_near_the_island_and_completes_once() {
    let mut rig = CameraRig::default();
    let id = rig.fly_to_island("Aziz");
    assert!(rig.is_animating());
    assert_eq!(rig.active_sequence(), Some((id, SequenceKind::FlyToIsland)));

    // 5.5 s of frames plus plenty of slack
    let completions = run_until_complete(&mut rig, 60 * 8);
    assert_eq!(completions, 1, "fly-in must report completion exactly once");
    assert!(!rig.is_animating());

    let landed = CameraPose::new(Vec3::new(-8.0, 5.0, 12.0), Vec3::ZERO);
    assert!(rig.pose().approx_eq(&landed, 1e-3), "final pose {:?}", rig.pose());
}

#[test]
fn fly_in_starts_far_out_at_sea() {
    let mut rig = CameraRig::default();
    rig.fly_to_island("Aziz");
    rig.update(0.0);
    assert!(rig.pose().position.abs_diff_eq(Vec3::new(-50.0, 30.0, 50.0), 1e-4));
    assert!(rig.pose().target.abs_diff_eq(Vec3::ZERO, 1e-4));
}

#[test]
fn fly_in_target_moves_alongside_the_first_leg() {
    let mut rig = CameraRig::default();
    rig.fly_to_island("Aziz");
    for _ in 0..60 {
        rig.update(FRAME);
    }
    // one second in: both channels are mid-flight
    let pose = *rig.pose();
    assert!(pose.target.y > 0.1 && pose.target.y < 2.0, "target {:?}", pose.target);
    assert!(pose.position.x > -50.0 && pose.position.x < -20.0, "position {:?}", pose.position);
}

#[test]
fn reset_during_fly_in_ends_exactly_at_reset_pose() {
    let mut rig = CameraRig::default();
    let fly = rig.fly_to_island("Aziz");
    for _ in 0..90 {
        assert!(rig.update(FRAME).is_none());
    }
    let reset = rig.reset_camera();
    assert_ne!(fly, reset);

    let mut seen = Vec::new();
    for _ in 0..60 * 4 {
        if let Some(done) = rig.update(FRAME) {
            seen.push(done);
        }
    }
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id, reset, "the replaced fly-in must never complete");
    assert_eq!(seen[0].kind, SequenceKind::Reset);

    let home = CameraPose::new(Vec3::from(DEFAULT_CAMERA_POSITION), Vec3::from(DEFAULT_CAMERA_TARGET));
    assert!(rig.pose().approx_eq(&home, 1e-4), "pose {:?}", rig.pose());
}

#[test]
fn every_trigger_gets_a_fresh_id() {
    let mut rig = CameraRig::default();
    let a = rig.animate_to_section(Vec3::ONE, Vec3::ZERO, 1.0);
    let b = rig.modal_entrance(Vec3::ONE, Vec3::ZERO);
    let c = rig.dramatic_reveal();
    assert!(a < b && b < c);
    assert_eq!(c.get() - a.get(), 2, "ids are consecutive");
    assert_eq!(rig.sequences_started(), 3);
    assert_eq!(rig.active_sequence().map(|(id, _)| id), Some(c));
}

#[test]
fn zero_duration_focus_snaps_on_first_update() {
    let mut rig = CameraRig::default();
    rig.animate_to_section(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 0.0);
    let done = rig.update(FRAME).expect("instant sequence completes on first frame");
    assert_eq!(done.kind, SequenceKind::SectionFocus);
    assert_eq!(rig.pose().position, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn dramatic_reveal_rises_from_underwater() {
    let mut rig = CameraRig::default();
    rig.dramatic_reveal();
    rig.update(0.0);
    assert!(rig.pose().position.y < -9.0);
    assert_eq!(run_until_complete(&mut rig, 60 * 6), 1);
    let end = CameraPose::new(Vec3::new(-8.0, 12.0, 15.0), Vec3::new(0.0, 2.0, 0.0));
    assert!(rig.pose().approx_eq(&end, 1e-3), "pose {:?}", rig.pose());
}

#[test]
fn orbit_never_completes_and_stays_on_radius() {
    let mut rig = CameraRig::default();
    rig.orbit(Vec3::ZERO, 5.0, 3.0, 4.0);
    assert_eq!(run_until_complete(&mut rig, 600), 0);
    let p = rig.pose().position;
    assert!((Vec3::new(p.x, 0.0, p.z).length() - 5.0).abs() < 1e-3);
    assert_eq!(p.y, 3.0);
    assert!(rig.pose().target.abs_diff_eq(Vec3::ZERO, 1e-5));

    assert!(rig.cancel().is_some());
    assert!(!rig.is_animating());
}

#[test]
fn non_finite_dt_is_ignored() {
    let mut rig = CameraRig::default();
    rig.animate_to_section(Vec3::ONE, Vec3::ZERO, 1.0);
    let before = *rig.pose();
    assert!(rig.update(f32::NAN).is_none());
    assert_eq!(*rig.pose(), before);
    assert!(rig.is_animating());
}
