//! Per-frame scene description handed to the renderer.
//!
//! The web renderer draws exactly what [`compose`] returns: one uniform block,
//! a back-to-front sorted list of billboard instances and a list of screen
//! labels for the DOM layer.

use crate::ambient::{island_bob_y, shark_pose, Atmosphere, SkyPalette};
use crate::assets::AssetKind;
use crate::camera::Camera;
use crate::constants::{LABEL_Z_OFFSET, OCEAN_LEVEL, SUBSCENE_ANCHOR_OFFSET, SUBSCENE_SCALE};
use crate::content::{display_name, ContentView, Shape, SubScene};
use crate::controller::SceneController;
use crate::sections::SectionKind;
use glam::{Quat, Vec2, Vec3};

/// Billboard primitive kinds understood by `scene.wgsl` (`params.x`).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Sphere = 0,
    Block = 1,
    Column = 2,
    Card = 3,
    Puff = 4,
}

impl From<Shape> for Primitive {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Sphere => Primitive::Sphere,
            Shape::Box => Primitive::Block,
            Shape::Cylinder => Primitive::Column,
            Shape::Plane => Primitive::Card,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    /// x: primitive, y: highlight 0..1, z: height/width stretch, w: unused.
    pub params: [f32; 4],
}

impl Instance {
    fn new(kind: Primitive, pos: Vec3, scale: f32, color: [f32; 4]) -> Self {
        Self {
            pos: pos.to_array(),
            scale,
            color,
            params: [kind as u32 as f32, 0.0, 1.0, 0.0],
        }
    }

    fn stretched(mut self, stretch: f32) -> Self {
        self.params[2] = stretch;
        self
    }

    fn highlighted(mut self, amount: f32) -> Self {
        self.params[1] = amount;
        self
    }
}

/// Uniform block shared by the sky/ocean pass and the billboard pass.
/// Every member is a vec4 so the Rust and WGSL layouts agree without padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub inv_view_proj: [[f32; 4]; 4],
    /// xyz eye, w elapsed seconds.
    pub camera_pos: [f32; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    /// xyz sun direction, w ambient intensity.
    pub sun: [f32; 4],
    /// rgb directional colour, w directional intensity.
    pub light: [f32; 4],
    pub zenith: [f32; 4],
    /// rgb horizon, w ocean level.
    pub horizon: [f32; 4],
    pub deep_water: [f32; 4],
    pub shallow_water: [f32; 4],
    pub fog: [f32; 4],
}

#[derive(Clone, Debug, PartialEq)]
pub enum LabelKind {
    Section { id: &'static str, hovered: bool },
    SubScene,
    SharkBubble,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub uv: Vec2,
    /// Distance from the camera; nearer labels are drawn on top.
    pub depth: f32,
    pub kind: LabelKind,
}

#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub camera: Camera,
    pub uniforms: SceneUniforms,
    pub instances: Vec<Instance>,
    pub labels: Vec<Label>,
    pub clear_color: [f64; 4],
}

const FALLBACK_COLOR: [f32; 4] = [0.55, 0.55, 0.58, 1.0];
const SAND: [f32; 4] = [0.86, 0.76, 0.52, 1.0];
const GRASS: [f32; 4] = [0.36, 0.62, 0.32, 1.0];
const SHARK: [f32; 4] = [0.42, 0.5, 0.58, 1.0];
const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
const PARTICLE: [f32; 4] = [0.53, 0.81, 0.92, 0.4];

fn prop_color(kind: SectionKind) -> [f32; 4] {
    match kind {
        SectionKind::About => [0.96, 0.8, 0.62, 1.0],
        SectionKind::Projects => [0.25, 0.55, 0.95, 1.0],
        SectionKind::Resume | SectionKind::Contact => [0.93, 0.45, 0.7, 1.0],
        SectionKind::Skills => [0.3, 0.8, 0.45, 1.0],
    }
}

fn camera_basis(camera: &Camera) -> (Vec3, Vec3) {
    let forward = (camera.target - camera.eye).try_normalize().unwrap_or(Vec3::NEG_Z);
    let right = forward.cross(camera.up).try_normalize().unwrap_or(Vec3::X);
    let up = right.cross(forward);
    (right, up)
}

pub fn scene_uniforms(camera: &Camera, palette: &SkyPalette, time: f32) -> SceneUniforms {
    let view_proj = camera.view_proj();
    let (right, up) = camera_basis(camera);
    let sun = Vec3::new(0.35, palette.sun_height, 0.25).normalize_or_zero();
    let rgba = |c: [f32; 3], w: f32| [c[0], c[1], c[2], w];
    SceneUniforms {
        view_proj: view_proj.to_cols_array_2d(),
        inv_view_proj: view_proj.inverse().to_cols_array_2d(),
        camera_pos: camera.eye.extend(time).to_array(),
        camera_right: right.extend(0.0).to_array(),
        camera_up: up.extend(0.0).to_array(),
        sun: sun.extend(palette.ambient_intensity).to_array(),
        light: rgba(palette.directional_color, palette.directional_intensity),
        zenith: rgba(palette.zenith, 1.0),
        horizon: rgba(palette.horizon, OCEAN_LEVEL),
        deep_water: rgba(palette.deep_water, 1.0),
        shallow_water: rgba(palette.shallow_water, 1.0),
        fog: rgba(palette.fog, 0.02),
    }
}

pub fn compose(ctl: &SceneController, atmosphere: &Atmosphere, aspect: f32) -> RenderFrame {
    let t = ctl.clock().elapsed();
    let nav = ctl.nav();
    let camera = ctl.camera(aspect);
    let palette = SkyPalette::for_theme(nav.theme());
    let bob = Vec3::new(0.0, island_bob_y(t), 0.0);
    let assets = ctl.assets();

    let mut instances = Vec::with_capacity(32 + atmosphere.clouds().len() + atmosphere.particles().len());
    let mut labels = Vec::new();

    let (sand, grass) = if assets.is_failed(AssetKind::IslandModel) {
        (FALLBACK_COLOR, FALLBACK_COLOR)
    } else {
        (SAND, GRASS)
    };
    instances.push(Instance::new(Primitive::Sphere, Vec3::new(0.0, -1.4, 1.5) + bob, 7.0, sand).stretched(0.35));
    instances.push(Instance::new(Primitive::Sphere, Vec3::new(0.0, -0.6, 1.5) + bob, 5.0, grass).stretched(0.3));

    for section in nav.sections() {
        let pos = section.position + bob;
        let hovered = ctl.hovered() == Some(section.id);
        let active = nav.active_section_id() == Some(section.id);
        let color = if assets.is_failed(AssetKind::IslandModel) {
            FALLBACK_COLOR
        } else {
            prop_color(section.kind)
        };
        let glow = if active { 1.0 } else if hovered { 0.6 } else { 0.0 };
        let kind = if section.kind == SectionKind::About {
            Primitive::Column
        } else {
            Primitive::Sphere
        };
        instances.push(Instance::new(kind, pos, 0.6, color).highlighted(glow));

        let anchor = pos + Vec3::new(0.0, 0.0, LABEL_Z_OFFSET);
        push_label(&mut labels, &camera, section.title, anchor, LabelKind::Section { id: section.id, hovered });
    }

    let shark = shark_pose(t);
    let shark_color = if assets.is_failed(AssetKind::SharkModel) {
        FALLBACK_COLOR
    } else {
        SHARK
    };
    instances.push(Instance::new(Primitive::Sphere, shark.position, 1.2, shark_color).stretched(0.4));
    if nav.shark_welcome_visible() {
        let text = format!("Welcome, {}!", display_name(nav.user_name()));
        push_label(&mut labels, &camera, text, shark.position + Vec3::new(0.0, 1.6, 0.0), LabelKind::SharkBubble);
    }

    instances.extend(atmosphere.clouds().iter().map(|c| Instance::new(Primitive::Puff, *c, 3.0, CLOUD)));
    instances.extend(atmosphere.particles().iter().map(|p| Instance::new(Primitive::Puff, *p, 0.5, PARTICLE)));

    if let (Some(ContentView::SubScene(sub)), Some(section)) = (ctl.content_view(), nav.active_section()) {
        let origin = section.position + bob + Vec3::from(SUBSCENE_ANCHOR_OFFSET);
        push_sub_scene(&mut instances, &mut labels, &camera, &sub, origin, t);
    }

    sort_back_to_front(&mut instances, camera.eye);
    labels.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let clear = palette.horizon;
    RenderFrame {
        uniforms: scene_uniforms(&camera, &palette, t),
        camera,
        instances,
        labels,
        clear_color: [clear[0] as f64, clear[1] as f64, clear[2] as f64, 1.0],
    }
}

fn push_label(labels: &mut Vec<Label>, camera: &Camera, text: impl Into<String>, world: Vec3, kind: LabelKind) {
    if let Some(uv) = camera.project_uv(world) {
        labels.push(Label {
            text: text.into(),
            uv,
            depth: camera.eye.distance(world),
            kind,
        });
    }
}

fn push_sub_scene(
    instances: &mut Vec<Instance>,
    labels: &mut Vec<Label>,
    camera: &Camera,
    sub: &SubScene,
    origin: Vec3,
    t: f32,
) {
    let spin = Quat::from_rotation_y(sub.spin * t);
    let place = |offset: Vec3, lift: f32| origin + spin * (offset + Vec3::new(0.0, lift, 0.0)) * SUBSCENE_SCALE;
    for prop in &sub.props {
        let lift = prop.float.map_or(0.0, |f| f.offset_y(t));
        let mut inst = Instance::new(prop.shape.into(), place(prop.offset, lift), prop.size * SUBSCENE_SCALE, prop.color);
        if prop.shape == Shape::Cylinder {
            // size is the column height; keep a fixed radius
            inst.scale = 0.5 * SUBSCENE_SCALE;
            inst = inst.stretched(prop.size / 0.5);
        }
        instances.push(inst);
    }
    for label in &sub.labels {
        push_label(labels, camera, label.text.clone(), place(label.offset, 0.0), LabelKind::SubScene);
    }
}

/// Painter's order: the renderer has no depth buffer.
pub fn sort_back_to_front(instances: &mut [Instance], eye: Vec3) {
    instances.sort_by(|a, b| {
        let da = Vec3::from(a.pos).distance_squared(eye);
        let db = Vec3::from(b.pos).distance_squared(eye);
        db.total_cmp(&da)
    });
}
