// Host-side tests for section content and the composed render frame.

use island_core::ambient::Atmosphere;
use island_core::content::{render, Block, Shape};
use island_core::{
    compose, default_sections, find_section, AssetError, AssetKind, ContentView, LabelKind, ModalMode, SceneConfig,
    SceneController, SectionKind,
};

#[test]
fn nothing_active_renders_nothing() {
    assert_eq!(render(None, ModalMode::Overlay, Some("Aziz")), None);
    assert_eq!(render(None, ModalMode::Embedded3d, None), None);
}

#[test]
fn overlay_gives_a_closable_panel_per_section() {
    for section in default_sections() {
        let Some(ContentView::Panel(panel)) = render(Some(section), ModalMode::Overlay, None) else {
            panic!("{} should render a panel", section.id);
        };
        assert_eq!(panel.kind, section.kind);
        assert_eq!(panel.title, section.title);
        assert!(panel.closable);
        assert!(!panel.blocks.is_empty());
    }
}

#[test]
fn embedded_gives_a_titled_sub_scene_per_section() {
    for section in default_sections() {
        let Some(ContentView::SubScene(sub)) = render(Some(section), ModalMode::Embedded3d, None) else {
            panic!("{} should render a sub-scene", section.id);
        };
        assert_eq!(sub.title, format!("{} - 3D Experience", section.title));
        assert!(sub.closable);
        assert!(!sub.props.is_empty());
    }
}

#[test]
fn about_greets_the_visitor_or_falls_back() {
    let about = find_section(default_sections(), "avatar").unwrap();
    let greets = |name: Option<&str>, expect: &str| {
        let Some(ContentView::Panel(panel)) = render(Some(about), ModalMode::Overlay, name) else {
            panic!("expected panel");
        };
        assert!(panel
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Paragraph(p) if p.contains(expect))));
    };
    greets(Some("Sam"), "Sam");
    greets(None, "Aziz");
    greets(Some("   "), "Aziz");

    let Some(ContentView::SubScene(sub)) = render(Some(about), ModalMode::Embedded3d, Some("Sam")) else {
        panic!("expected sub-scene");
    };
    assert!(sub.labels.iter().any(|l| l.text.starts_with("Hi, I'm Sam")));
}

#[test]
fn skills_sub_scene_has_five_columns_scaled_by_level() {
    let skills = find_section(default_sections(), "workshop").unwrap();
    assert_eq!(skills.kind, SectionKind::Skills);
    let Some(ContentView::SubScene(sub)) = render(Some(skills), ModalMode::Embedded3d, None) else {
        panic!("expected sub-scene");
    };
    let columns: Vec<_> = sub.props.iter().filter(|p| p.shape == Shape::Cylinder).collect();
    assert_eq!(columns.len(), 5);
    assert!((columns[0].size - 0.9 * 3.0).abs() < 1e-5);
}

#[test]
fn projects_panel_lists_three_projects() {
    let projects = find_section(default_sections(), "lighthouse").unwrap();
    let Some(ContentView::Panel(panel)) = render(Some(projects), ModalMode::Overlay, None) else {
        panic!("expected panel");
    };
    let cards = panel.blocks.iter().filter(|b| matches!(b, Block::Card(_))).count();
    assert_eq!(cards, 3);
}

#[test]
fn section_kind_parses_and_rejects() {
    assert_eq!("skills".parse::<SectionKind>().unwrap(), SectionKind::Skills);
    assert!("kitchen".parse::<SectionKind>().is_err());
}

#[test]
fn frame_labels_every_section_and_shows_the_welcome_bubble() {
    let mut ctl = SceneController::default();
    ctl.submit_name("Sam");
    ctl.tick(1.0 / 60.0);
    let atmosphere = Atmosphere::new(ctl.config().atmosphere_seed);
    let frame = compose(&ctl, &atmosphere, 16.0 / 9.0);

    assert!(frame
        .labels
        .iter()
        .any(|l| l.kind == LabelKind::SharkBubble && l.text == "Welcome, Sam!"));
    // 2 island + 5 props + shark + clouds + particles
    let expected = 2 + 5 + 1 + atmosphere.clouds().len() + atmosphere.particles().len();
    assert_eq!(frame.instances.len(), expected);
}

#[test]
fn frame_instances_are_sorted_back_to_front() {
    let ctl = SceneController::default();
    let atmosphere = Atmosphere::new(3);
    let frame = compose(&ctl, &atmosphere, 1.0);
    let eye = frame.camera.eye;
    let dists: Vec<f32> = frame
        .instances
        .iter()
        .map(|i| glam::Vec3::from(i.pos).distance_squared(eye))
        .collect();
    assert!(dists.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn embedded_section_adds_sub_scene_props() {
    let cfg = SceneConfig {
        modal_mode: ModalMode::Embedded3d,
        ..SceneConfig::default()
    };
    let mut ctl = SceneController::new(cfg).unwrap();
    let atmosphere = Atmosphere::new(1);
    let base = compose(&ctl, &atmosphere, 1.0).instances.len();
    ctl.select_section("lighthouse");
    let with_sub = compose(&ctl, &atmosphere, 1.0).instances.len();
    // four project boxes plus the centre glow
    assert_eq!(with_sub, base + 5);
}

#[test]
fn failed_assets_fall_back_without_stopping_the_scene() {
    let mut ctl = SceneController::default();
    let err = AssetError::Http {
        path: "shark-transformed.glb".into(),
        status: 404,
    };
    ctl.assets_mut().mark_failed("shark-transformed.glb", err).unwrap();
    for path in ["island.glb", "waternormals.jpg", "venice_sunset_1k.hdr", "night_sky.jpg"] {
        ctl.assets_mut().mark_ready(path, 1024).unwrap();
    }
    assert!(ctl.assets().all_settled());
    assert_eq!(ctl.assets().failures().count(), 1);
    assert!(ctl.assets().is_ready(AssetKind::IslandModel));
    assert!(!ctl.assets().is_ready(AssetKind::SharkModel), "a failed load is not ready");
    assert!(ctl.assets_mut().mark_ready("missing.bin", 1).is_err());

    let frame = compose(&ctl, &Atmosphere::new(1), 1.0);
    assert!(!frame.instances.is_empty());
    ctl.tick(1.0 / 60.0);
}
