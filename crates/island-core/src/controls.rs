//! User camera controls: held-key panning and pointer orbit/zoom.

use crate::camera::CameraPose;
use crate::constants::{
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED, PAN_REFERENCE_FPS, PAN_SPEED_PER_FRAME,
};
use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [MoveKey::Forward, MoveKey::Back, MoveKey::Left, MoveKey::Right];

    pub fn code(self) -> &'static str {
        match self {
            MoveKey::Forward => "KeyW",
            MoveKey::Back => "KeyS",
            MoveKey::Left => "KeyA",
            MoveKey::Right => "KeyD",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<MoveKey> {
        match code {
            "KeyW" => Some(MoveKey::Forward),
            "KeyS" => Some(MoveKey::Back),
            "KeyA" => Some(MoveKey::Left),
            "KeyD" => Some(MoveKey::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct KeyState {
    pressed: FnvHashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, code: &str, down: bool) {
        if let Some(v) = self.pressed.get_mut(code) {
            *v = down;
        } else {
            self.pressed.insert(code.to_owned(), down);
        }
    }

    pub fn is_pressed(&self, code: &str) -> bool {
        self.pressed.get(code).copied().unwrap_or(false)
    }

    pub fn is_move_pressed(&self, key: MoveKey) -> bool {
        self.is_pressed(key.code())
    }

    pub fn any_move_pressed(&self) -> bool {
        MoveKey::ALL.iter().any(|k| self.is_move_pressed(*k))
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

/// How the pan speed relates to frame time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PanTiming {
    /// Fixed step per rendered frame, so speed follows the display refresh rate.
    #[default]
    PerFrame,
    /// Step scaled by `dt` relative to a 60 Hz frame.
    DeltaScaled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyboardPan {
    pub speed: f32,
    pub timing: PanTiming,
}

impl Default for KeyboardPan {
    fn default() -> Self {
        Self {
            speed: PAN_SPEED_PER_FRAME,
            timing: PanTiming::PerFrame,
        }
    }
}

impl KeyboardPan {
    fn step_len(&self, dt: f32) -> f32 {
        match self.timing {
            PanTiming::PerFrame => self.speed,
            PanTiming::DeltaScaled => self.speed * dt.max(0.0) * PAN_REFERENCE_FPS,
        }
    }
}

pub fn horizontal_forward(pose: &CameraPose) -> Vec3 {
    let mut f = pose.forward();
    f.y = 0.0;
    f.try_normalize().unwrap_or(Vec3::NEG_Z)
}

pub fn horizontal_right(pose: &CameraPose) -> Vec3 {
    let mut r = pose.forward().cross(Vec3::Y);
    r.y = 0.0;
    r.try_normalize().unwrap_or(Vec3::X)
}

/// Move position and target together for every held movement key.
/// Returns the displacement that was applied.
pub fn pan_step(pose: &mut CameraPose, keys: &KeyState, pan: &KeyboardPan, dt: f32) -> Vec3 {
    if !keys.any_move_pressed() {
        return Vec3::ZERO;
    }
    let step = pan.step_len(dt);
    let forward = horizontal_forward(pose);
    let right = horizontal_right(pose);
    let mut delta = Vec3::ZERO;
    if keys.is_move_pressed(MoveKey::Forward) {
        delta += forward * step;
    }
    if keys.is_move_pressed(MoveKey::Back) {
        delta -= forward * step;
    }
    if keys.is_move_pressed(MoveKey::Right) {
        delta += right * step;
    }
    if keys.is_move_pressed(MoveKey::Left) {
        delta -= right * step;
    }
    pose.translate(delta);
    delta
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
        }
    }
}

/// Damped orbit around the pose target driven by pointer drags and wheel.
///
/// Pending rotation decays by the damping factor each frame; with no pending
/// input `update` leaves the pose untouched.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub limits: OrbitLimits,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(OrbitLimits::default())
    }
}

const SETTLED: f32 = 1e-5;

impl OrbitControls {
    pub fn new(limits: OrbitLimits) -> Self {
        Self {
            limits,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }

    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.rotate_speed;
    }

    pub fn zoom(&mut self, delta_y: f32) {
        let step = 0.95_f32.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.scale *= step;
        } else if delta_y > 0.0 {
            self.scale /= step;
        }
    }

    pub fn has_pending(&self) -> bool {
        self.delta_theta.abs() > SETTLED || self.delta_phi.abs() > SETTLED || (self.scale - 1.0).abs() > SETTLED
    }

    /// Drop queued input; used while a camera sequence owns the pose.
    pub fn discard_input(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
    }

    /// Apply one damped step to `pose`. Returns whether the pose moved.
    pub fn update(&mut self, pose: &mut CameraPose) -> bool {
        if !self.has_pending() {
            self.discard_input();
            return false;
        }
        let offset = pose.position - pose.target;
        let radius = offset.length().max(1e-4);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.delta_theta * self.damping;
        phi += self.delta_phi * self.damping;
        let lo = self.limits.min_polar.max(1e-4);
        let hi = self.limits.max_polar.min(std::f32::consts::PI - 1e-4).max(lo);
        phi = phi.clamp(lo, hi);
        let radius = (radius * self.scale).clamp(self.limits.min_distance, self.limits.max_distance);

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(radius * sin_phi * theta.sin(), radius * phi.cos(), radius * sin_phi * theta.cos());
        pose.position = pose.target + new_offset;

        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        self.scale = 1.0;
        true
    }
}
