//! Scene tuning that the front end may override at startup.

use crate::camera::CameraPose;
use crate::constants::{
    default_camera_position, default_camera_target, CAMERA_FOV_DEGREES, MODAL_CAMERA_OFFSET,
    SECTION_FOCUS_DURATION_SEC,
};
use crate::controls::{KeyboardPan, OrbitLimits, PanTiming};
use crate::error::{IslandError, Result};
use crate::navigation::{ModalMode, Theme};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub initial_pose: CameraPose,
    pub fov_degrees: f32,
    pub pan: KeyboardPan,
    pub orbit: OrbitLimits,
    /// Camera offset from a section prop during the embedded modal entrance.
    pub modal_camera_offset: Vec3,
    pub section_focus_duration: f32,
    pub atmosphere_seed: u64,
    pub modal_mode: ModalMode,
    pub theme: Theme,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_pose: CameraPose::new(default_camera_position(), default_camera_target()),
            fov_degrees: CAMERA_FOV_DEGREES,
            pan: KeyboardPan::default(),
            orbit: OrbitLimits::default(),
            modal_camera_offset: Vec3::from(MODAL_CAMERA_OFFSET),
            section_focus_duration: SECTION_FOCUS_DURATION_SEC,
            atmosphere_seed: 0x15_1A_4D,
            modal_mode: ModalMode::Overlay,
            theme: Theme::Light,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(IslandError::InvalidConfig("fov must be in (0, 180) degrees"));
        }
        if !(self.pan.speed > 0.0 && self.pan.speed.is_finite()) {
            return Err(IslandError::InvalidConfig("pan speed must be positive"));
        }
        if !(self.orbit.min_distance > 0.0) || self.orbit.max_distance < self.orbit.min_distance {
            return Err(IslandError::InvalidConfig("orbit distance limits must be positive and ordered"));
        }
        if self.orbit.max_polar < self.orbit.min_polar {
            return Err(IslandError::InvalidConfig("orbit polar limits must be ordered"));
        }
        if !(self.section_focus_duration >= 0.0) {
            return Err(IslandError::InvalidConfig("section focus duration must be non-negative"));
        }
        if !(self.initial_pose.position.is_finite() && self.initial_pose.target.is_finite()) {
            return Err(IslandError::InvalidConfig("initial camera pose must be finite"));
        }
        Ok(())
    }

    /// Apply `mode`, `theme` and `pan` overrides from a URL query string
    /// (with or without the leading `?`). Unrecognised keys or values are
    /// skipped.
    pub fn apply_query(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match (key, value) {
                ("mode", "3d") => self.modal_mode = ModalMode::Embedded3d,
                ("mode", "overlay") => self.modal_mode = ModalMode::Overlay,
                ("theme", "dark") => self.theme = Theme::Dark,
                ("theme", "light") => self.theme = Theme::Light,
                ("pan", "delta") => self.pan.timing = PanTiming::DeltaScaled,
                ("pan", "frame") => self.pan.timing = PanTiming::PerFrame,
                ("mode" | "theme" | "pan", other) => {
                    log::warn!("[config] ignoring {key}={other}");
                }
                _ => {}
            }
        }
        self
    }
}
