// Host-side tests for the welcome flow and section navigation driven through
// the scene controller.

use glam::Vec3;
use island_core::{
    default_sections, CameraCue, Effect, ModalMode, SceneConfig, SceneController, SceneEvent, SequenceKind, Theme,
};

const FRAME: f32 = 1.0 / 60.0;

fn embedded() -> SceneController {
    let cfg = SceneConfig {
        modal_mode: ModalMode::Embedded3d,
        ..SceneConfig::default()
    };
    SceneController::new(cfg).expect("valid config")
}

fn settle(ctl: &mut SceneController) -> Vec<SceneEvent> {
    let mut events = Vec::new();
    for _ in 0..60 * 10 {
        events.extend(ctl.tick(FRAME));
    }
    events
}

#[test]
fn empty_names_are_ignored() {
    let mut ctl = SceneController::default();
    for name in ["", "   ", "\t\n"] {
        assert_eq!(ctl.submit_name(name), Effect::Ignored);
    }
    assert!(!ctl.nav().welcome_complete());
    assert_eq!(ctl.nav().user_name(), None);
    assert_eq!(ctl.rig().sequences_started(), 0);
    assert!(!ctl.rig().is_animating());
}

#[test]
fn submit_name_starts_one_fly_in_then_hides_the_shark_welcome() {
    let mut ctl = SceneController::default();
    let effect = ctl.submit_name("  Aziz ");
    assert_eq!(effect, Effect::Camera(CameraCue::FlyToIsland { name: "Aziz".into() }));
    assert!(ctl.nav().welcome_complete());
    assert_eq!(ctl.nav().user_name(), Some("Aziz"));
    assert!(ctl.nav().shark_welcome_visible());
    assert_eq!(ctl.rig().sequences_started(), 1);
    assert_eq!(ctl.rig().active_sequence().map(|(_, k)| k), Some(SequenceKind::FlyToIsland));

    let events = settle(&mut ctl);
    let completions: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, SceneEvent::SequenceComplete(c) if c.kind == SequenceKind::FlyToIsland))
        .collect();
    assert_eq!(completions.len(), 1);
    let hidden: Vec<_> = events.iter().filter(|e| **e == SceneEvent::SharkWelcomeHidden).collect();
    assert_eq!(hidden.len(), 1);

    let done_at = events.iter().position(|e| matches!(e, SceneEvent::SequenceComplete(_)));
    let hidden_at = events.iter().position(|e| *e == SceneEvent::SharkWelcomeHidden);
    assert!(done_at < hidden_at, "hide must follow completion");
    assert!(!ctl.nav().shark_welcome_visible());
}

#[test]
fn second_submit_is_a_no_op() {
    let mut ctl = SceneController::default();
    ctl.submit_name("Aziz");
    assert_eq!(ctl.submit_name("Someone else"), Effect::Ignored);
    assert_eq!(ctl.nav().user_name(), Some("Aziz"));
    assert_eq!(ctl.rig().sequences_started(), 1);
}

#[test]
fn reset_during_fly_in_still_hides_the_welcome() {
    let mut ctl = SceneController::default();
    ctl.submit_name("Aziz");
    for _ in 0..30 {
        ctl.tick(FRAME);
    }
    ctl.reset_camera();
    let events = ctl.tick(FRAME);
    assert!(events.contains(&SceneEvent::SharkWelcomeHidden));
    let later = settle(&mut ctl);
    assert!(!later.contains(&SceneEvent::SharkWelcomeHidden));
    assert!(!later
        .iter()
        .any(|e| matches!(e, SceneEvent::SequenceComplete(c) if c.kind == SequenceKind::FlyToIsland)));
}

#[test]
fn overlay_selection_sets_active_without_moving_the_camera() {
    let mut ctl = SceneController::default();
    for section in default_sections() {
        assert_eq!(ctl.select_section(section.id), Effect::Updated);
        assert_eq!(ctl.nav().active_section_id(), Some(section.id));
    }
    assert_eq!(ctl.rig().sequences_started(), 0);
}

#[test]
fn embedded_selection_focuses_each_section_once() {
    for section in default_sections() {
        let mut ctl = embedded();
        let effect = ctl.select_section(section.id);
        assert!(matches!(effect, Effect::Camera(CameraCue::FocusSection { section_id, .. }) if section_id == section.id));
        assert_eq!(ctl.nav().active_section_id(), Some(section.id));
        assert_eq!(ctl.rig().sequences_started(), 1);
        assert_eq!(ctl.rig().active_sequence().map(|(_, k)| k), Some(SequenceKind::ModalEntrance));

        settle(&mut ctl);
        assert!(ctl.pose().target.abs_diff_eq(section.position, 1e-4), "{}: {:?}", section.id, ctl.pose());
        let eye = section.position + Vec3::new(0.0, 2.0, 4.0);
        assert!(ctl.pose().position.abs_diff_eq(eye, 1e-4));
    }
}

#[test]
fn reselecting_the_active_section_starts_nothing() {
    let mut ctl = embedded();
    ctl.select_section("lighthouse");
    assert_eq!(ctl.select_section("lighthouse"), Effect::Ignored);
    assert_eq!(ctl.rig().sequences_started(), 1);
}

#[test]
fn unknown_section_is_ignored() {
    let mut ctl = embedded();
    ctl.select_section("avatar");
    assert_eq!(ctl.select_section("basement"), Effect::Ignored);
    assert_eq!(ctl.nav().active_section_id(), Some("avatar"));
    assert_eq!(ctl.rig().sequences_started(), 1);
}

#[test]
fn close_is_idempotent() {
    let mut ctl = SceneController::default();
    assert_eq!(ctl.close_section(), Effect::Ignored);
    ctl.select_section("terminal");
    assert_eq!(ctl.close_section(), Effect::Updated);
    assert_eq!(ctl.nav().active_section_id(), None);
    assert_eq!(ctl.close_section(), Effect::Ignored);
    assert_eq!(ctl.nav().active_section_id(), None);
}

#[test]
fn embedded_close_returns_to_the_pose_before_the_first_entrance() {
    let mut ctl = embedded();
    let before = *ctl.pose();
    ctl.select_section("workshop");
    settle(&mut ctl);
    // switching sections keeps the original return pose
    ctl.select_section("postbox");
    settle(&mut ctl);

    assert_eq!(ctl.close_section(), Effect::Camera(CameraCue::LeaveSection));
    assert_eq!(ctl.rig().active_sequence().map(|(_, k)| k), Some(SequenceKind::SectionFocus));
    settle(&mut ctl);
    assert!(ctl.pose().approx_eq(&before, 1e-4), "{:?}", ctl.pose());
}

#[test]
fn overlay_close_forgets_the_embedded_return_pose() {
    let mut ctl = embedded();
    ctl.select_section("workshop");
    settle(&mut ctl);
    let focused = *ctl.pose();

    ctl.toggle_modal_mode();
    assert_eq!(ctl.close_section(), Effect::Updated);
    ctl.key_down("KeyD");
    for _ in 0..50 {
        ctl.tick(FRAME);
    }
    ctl.key_up("KeyD");
    let here = *ctl.pose();
    assert!(!here.approx_eq(&focused, 1e-3), "panning should move the camera");

    ctl.toggle_modal_mode();
    ctl.select_section("postbox");
    settle(&mut ctl);
    ctl.close_section();
    settle(&mut ctl);
    assert!(ctl.pose().approx_eq(&here, 1e-4), "{:?} vs {:?}", ctl.pose(), here);
}

#[test]
fn reveal_discards_a_pending_return_pose() {
    let mut ctl = embedded();
    ctl.select_section("workshop");
    settle(&mut ctl);
    ctl.dramatic_reveal();
    settle(&mut ctl);
    let revealed = *ctl.pose();

    // the open section has nothing to go back to now
    assert_eq!(ctl.close_section(), Effect::Camera(CameraCue::LeaveSection));
    assert!(!ctl.rig().is_animating());
    assert!(ctl.pose().approx_eq(&revealed, 1e-6));
}

#[test]
fn embedded_return_uses_the_configured_focus_duration() {
    let cfg = SceneConfig {
        modal_mode: ModalMode::Embedded3d,
        section_focus_duration: 0.0,
        ..SceneConfig::default()
    };
    let mut ctl = SceneController::new(cfg).expect("valid config");
    let before = *ctl.pose();
    ctl.select_section("workshop");
    settle(&mut ctl);

    ctl.close_section();
    let events = ctl.tick(FRAME);
    assert!(events
        .iter()
        .any(|e| matches!(e, SceneEvent::SequenceComplete(c) if c.kind == SequenceKind::SectionFocus)));
    assert!(ctl.pose().approx_eq(&before, 1e-4), "{:?}", ctl.pose());
}

#[test]
fn escape_closes_the_active_section() {
    let mut ctl = SceneController::default();
    ctl.select_section("avatar");
    ctl.key_down("Escape");
    assert_eq!(ctl.nav().active_section_id(), None);
    assert!(!ctl.keys().is_pressed("Escape"));
}

#[test]
fn clicking_every_prop_with_closes_never_has_two_active() {
    let mut ctl = SceneController::default();
    for section in default_sections() {
        // straight down onto the prop
        let effect = ctl.click_ray(section.position + Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        assert_eq!(effect, Effect::Updated, "{}", section.id);
        assert_eq!(ctl.nav().active_section_id(), Some(section.id));
        ctl.close_section();
        assert_eq!(ctl.nav().active_section_id(), None);
    }
}

#[test]
fn background_click_does_nothing() {
    let mut ctl = SceneController::default();
    ctl.select_section("avatar");
    assert_eq!(ctl.click_ray(Vec3::new(0.0, 50.0, 0.0), Vec3::Y), Effect::Ignored);
    assert_eq!(ctl.nav().active_section_id(), Some("avatar"));
}

#[test]
fn mode_toggle_keeps_the_active_section() {
    let mut ctl = SceneController::default();
    ctl.select_section("postbox");
    ctl.toggle_modal_mode();
    assert_eq!(ctl.modal_mode(), ModalMode::Embedded3d);
    assert_eq!(ctl.nav().active_section_id(), Some("postbox"));
    assert_eq!(ctl.rig().sequences_started(), 0);
}

#[test]
fn theme_toggles_and_repeat_set_is_ignored() {
    let mut ctl = SceneController::default();
    assert_eq!(ctl.nav().theme(), Theme::Light);
    ctl.toggle_theme();
    assert_eq!(ctl.nav().theme(), Theme::Dark);
    assert_eq!(ctl.set_theme(Theme::Dark), Effect::Ignored);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = SceneConfig {
        fov_degrees: -5.0,
        ..SceneConfig::default()
    };
    assert!(SceneController::new(cfg).is_err());
}
