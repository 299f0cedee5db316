//! Camera description shared with the web frontend.
//!
//! `CameraPose` is the live state mutated by the rig and the controls;
//! `Camera` adds projection parameters and builds the matrices and rays
//! the renderer and the pointer picking need.

use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Unit view direction; falls back to -Z for a degenerate pose.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    pub fn approx_eq(&self, other: &CameraPose, eps: f32) -> bool {
        self.position.abs_diff_eq(other.position, eps) && self.target.abs_diff_eq(other.target, eps)
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_pose(pose: &CameraPose, fov_degrees: f32, aspect: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: fov_degrees.to_radians(),
            znear: crate::constants::CAMERA_ZNEAR,
            zfar: crate::constants::CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let up = if (self.target - self.eye).normalize_or_zero().cross(self.up).length_squared() < 1e-8 {
            // looking straight up or down; any horizontal up vector works
            Vec3::Z
        } else {
            self.up
        };
        Mat4::look_at_rh(self.eye, self.target, up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through normalized device coordinates (x right, y up).
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn ndc_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize_or_zero();
        (self.eye, rd)
    }

    /// Project a world point to viewport UV (0,0 top-left). `None` when the
    /// point is behind the camera.
    pub fn project_uv(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 1e-5 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(ndc.x * 0.5 + 0.5, 0.5 - ndc.y * 0.5))
    }
}

#[inline]
pub fn pixel_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_points_at_target() {
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let cam = Camera::from_pose(&pose, 60.0, 1.5);
        let (ro, rd) = cam.ndc_ray(Vec2::ZERO);
        assert!(ro.abs_diff_eq(pose.position, 1e-5));
        assert!(rd.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn target_projects_to_viewport_center() {
        let pose = CameraPose::new(Vec3::new(-8.0, 5.0, 12.0), Vec3::ZERO);
        let cam = Camera::from_pose(&pose, 60.0, 16.0 / 9.0);
        let uv = cam.project_uv(Vec3::ZERO).unwrap();
        assert!(uv.abs_diff_eq(Vec2::splat(0.5), 1e-4));
        assert!(cam.project_uv(Vec3::new(-16.0, 10.0, 24.0)).is_none());
    }

    #[test]
    fn pixel_corners_map_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(Vec2::ZERO, 200.0, 100.0), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(Vec2::new(200.0, 100.0), 200.0, 100.0), Vec2::new(1.0, -1.0));
    }
}
