// Host-side tests for keyboard panning, orbit controls and picking.

use glam::Vec3;
use island_core::controls::{horizontal_forward, horizontal_right, pan_step, KeyState, KeyboardPan, OrbitControls, PanTiming};
use island_core::picking::{cursor_change, nearest_hit, ray_sphere, section_targets};
use island_core::{default_sections, CameraPose, SceneController};

fn initial_forward() -> Vec3 {
    Vec3::new(2.0, 0.0, -10.0).normalize()
}

#[test]
fn holding_w_moves_n_steps_forward_and_release_halts() {
    let mut ctl = SceneController::default();
    let start = *ctl.pose();
    ctl.key_down("KeyW");
    let n = 30;
    for _ in 0..n {
        ctl.tick(1.0 / 60.0);
    }
    let expected = start.position + initial_forward() * 0.1 * n as f32;
    assert!(ctl.pose().position.abs_diff_eq(expected, 1e-4), "{:?} vs {:?}", ctl.pose().position, expected);
    // target moves with the camera
    assert!((ctl.pose().target - ctl.pose().position).abs_diff_eq(start.target - start.position, 1e-4));

    ctl.key_up("KeyW");
    let stopped = *ctl.pose();
    ctl.tick(1.0 / 60.0);
    assert_eq!(*ctl.pose(), stopped, "released key must stop on the next frame");
}

#[test]
fn pan_ignores_frame_time_by_default() {
    let mut keys = KeyState::new();
    keys.set("KeyW", true);
    let pan = KeyboardPan::default();
    let mut slow = CameraPose::new(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO);
    let mut fast = slow;
    pan_step(&mut slow, &keys, &pan, 1.0 / 30.0);
    pan_step(&mut fast, &keys, &pan, 1.0 / 144.0);
    assert_eq!(slow, fast);
}

#[test]
fn delta_scaled_pan_matches_per_frame_at_60hz() {
    let mut keys = KeyState::new();
    keys.set("KeyS", true);
    let per_frame = KeyboardPan::default();
    let scaled = KeyboardPan {
        timing: PanTiming::DeltaScaled,
        ..KeyboardPan::default()
    };
    let mut a = CameraPose::new(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO);
    let mut b = a;
    let da = pan_step(&mut a, &keys, &per_frame, 1.0 / 60.0);
    let db = pan_step(&mut b, &keys, &scaled, 1.0 / 60.0);
    assert!(da.abs_diff_eq(db, 1e-6));

    let mut c = CameraPose::new(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO);
    let dc = pan_step(&mut c, &keys, &scaled, 1.0 / 30.0);
    assert!((dc.length() - 2.0 * da.length()).abs() < 1e-5);
}

#[test]
fn strafe_keys_follow_the_right_vector() {
    let pose = CameraPose::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(0.0, 5.0, 0.0));
    assert!(horizontal_forward(&pose).abs_diff_eq(Vec3::NEG_Z, 1e-6));
    assert!(horizontal_right(&pose).abs_diff_eq(Vec3::X, 1e-6));

    let pan = KeyboardPan::default();
    let mut keys = KeyState::new();
    keys.set("KeyD", true);
    let mut p = pose;
    let d = pan_step(&mut p, &keys, &pan, 0.016);
    assert!(d.abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), 1e-6));

    keys.set("KeyD", false);
    keys.set("KeyA", true);
    let d = pan_step(&mut p, &keys, &pan, 0.016);
    assert!(d.abs_diff_eq(Vec3::new(-0.1, 0.0, 0.0), 1e-6));
}

#[test]
fn pan_never_changes_height() {
    let pose = CameraPose::new(Vec3::new(-2.0, -15.0, 10.0), Vec3::ZERO);
    let mut keys = KeyState::new();
    for code in ["KeyW", "KeyD"] {
        keys.set(code, true);
    }
    let mut p = pose;
    pan_step(&mut p, &keys, &KeyboardPan::default(), 0.016);
    assert_eq!(p.position.y, pose.position.y);
    assert_eq!(p.target.y, pose.target.y);
}

#[test]
fn keys_are_ignored_while_a_sequence_runs() {
    let mut ctl = SceneController::default();
    ctl.reset_camera();
    ctl.key_down("KeyW");
    ctl.tick(1.0 / 60.0);
    let after_one = *ctl.pose();
    // movement comes only from the reset timeline, which keeps its own path
    let mut rig_only = SceneController::default();
    rig_only.reset_camera();
    rig_only.tick(1.0 / 60.0);
    assert_eq!(after_one, *rig_only.pose());
}

#[test]
fn blur_clears_held_keys() {
    let mut ctl = SceneController::default();
    ctl.key_down("KeyW");
    ctl.clear_keys();
    let before = *ctl.pose();
    ctl.tick(1.0 / 60.0);
    assert_eq!(*ctl.pose(), before);
}

#[test]
fn orbit_is_inert_without_input() {
    let mut orbit = OrbitControls::default();
    // below the water and far outside the distance limits
    let mut pose = CameraPose::new(Vec3::new(-2.0, -15.0, 10.0), Vec3::ZERO);
    let before = pose;
    assert!(!orbit.update(&mut pose));
    assert_eq!(pose, before);
}

#[test]
fn orbit_drag_respects_polar_and_distance_limits() {
    let mut orbit = OrbitControls::default();
    let mut pose = CameraPose::new(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO);
    // drag hard downwards and zoom far out
    for _ in 0..200 {
        orbit.rotate(0.0, -400.0, 800.0);
        for _ in 0..20 {
            orbit.zoom(120.0);
        }
        orbit.update(&mut pose);
    }
    let offset = pose.position - pose.target;
    let r = offset.length();
    assert!(r <= 30.0 + 1e-3, "distance {r}");
    let polar = (offset.y / r).acos();
    assert!(polar <= std::f32::consts::PI / 2.2 + 1e-3, "polar {polar}");
    assert!(pose.position.y >= 0.0);
}

#[test]
fn orbit_zoom_in_stops_at_min_distance() {
    let mut orbit = OrbitControls::default();
    let mut pose = CameraPose::new(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO);
    for _ in 0..500 {
        orbit.zoom(-100.0);
        orbit.update(&mut pose);
    }
    assert!((pose.distance() - 3.0).abs() < 1e-3);
}

#[test]
fn ray_sphere_hits_and_misses() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(matches!(hit, Some(t) if (t - 3.0).abs() < 1e-5));
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    // sphere behind the origin
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn click_through_two_props_picks_the_nearest() {
    let targets = section_targets(default_sections(), 0.0);
    // terminal (2, 0.5, 4) sits in front of postbox (2.4, 0.5, 0.75) along -Z
    let hit = nearest_hit(Vec3::new(2.2, 0.5, 20.0), Vec3::NEG_Z, &targets);
    assert_eq!(hit, Some("terminal"));
    assert_eq!(nearest_hit(Vec3::new(0.0, 50.0, 0.0), Vec3::Y, &targets), None);
}

#[test]
fn cursor_changes_only_on_hover_transitions() {
    assert_eq!(cursor_change(None, Some("avatar")), Some("pointer"));
    assert_eq!(cursor_change(Some("avatar"), Some("terminal")), None);
    assert_eq!(cursor_change(Some("avatar"), None), Some("auto"));
    assert_eq!(cursor_change(None, None), None);
}
