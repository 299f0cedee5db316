//! Pointer picking against the island props.

use crate::camera::{pixel_to_ndc, Camera};
use crate::constants::PROP_PICK_RADIUS;
use crate::sections::Section;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickTarget {
    pub section_id: &'static str,
    pub center: Vec3,
    pub radius: f32,
}

pub type PickTargets = SmallVec<[PickTarget; 8]>;

/// Bounding spheres of the section props with the island lifted by `bob_y`.
pub fn section_targets(sections: &'static [Section], bob_y: f32) -> PickTargets {
    sections
        .iter()
        .map(|s| PickTarget {
            section_id: s.id,
            center: s.position + Vec3::new(0.0, bob_y, 0.0),
            radius: PROP_PICK_RADIUS,
        })
        .collect()
}

/// Closest prop hit by the ray, if any. Only one prop is ever returned, so a
/// click behind another prop never reaches it.
pub fn nearest_hit(ray_origin: Vec3, ray_dir: Vec3, targets: &[PickTarget]) -> Option<&'static str> {
    targets
        .iter()
        .filter_map(|t| ray_sphere(ray_origin, ray_dir, t.center, t.radius).map(|d| (d, t.section_id)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}

pub fn hover_target(camera: &Camera, px: Vec2, width: f32, height: f32, targets: &[PickTarget]) -> Option<&'static str> {
    let (ro, rd) = camera.ndc_ray(pixel_to_ndc(px, width, height));
    nearest_hit(ro, rd, targets)
}

/// Cursor change implied by moving from hover `prev` to `next`. `None` when
/// the cursor should stay as it is.
pub fn cursor_change(prev: Option<&str>, next: Option<&str>) -> Option<&'static str> {
    match (prev.is_some(), next.is_some()) {
        (false, true) => Some("pointer"),
        (true, false) => Some("auto"),
        _ => None,
    }
}
