use glam::Vec3;

// Shared scene tuning constants used by the core and the web frontend.

// Camera
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [-2.0, -15.0, 10.0];
pub const DEFAULT_CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const RESET_DURATION_SEC: f32 = 2.0;
pub const SECTION_FOCUS_DURATION_SEC: f32 = 2.0;
pub const MODAL_ENTRANCE_DURATION_SEC: f32 = 1.5;
pub const MODAL_CAMERA_OFFSET: [f32; 3] = [0.0, 2.0, 4.0];

// Longest frame delta the clock accepts (tab switches produce huge gaps)
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Keyboard panning
pub const PAN_SPEED_PER_FRAME: f32 = 0.1;
pub const PAN_REFERENCE_FPS: f32 = 60.0;

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_MIN_POLAR: f32 = 0.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 2.2;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.5;
pub const ORBIT_ZOOM_SPEED: f32 = 0.8;

// Picking
pub const PROP_PICK_RADIUS: f32 = 0.45;
pub const LABEL_Z_OFFSET: f32 = 0.4;

// Environment
pub const OCEAN_LEVEL: f32 = -0.9;
pub const SHARK_RADIUS: f32 = 10.0;
pub const SHARK_SPEED: f32 = 0.3;
pub const SHARK_DEPTH: f32 = -1.0;
pub const ISLAND_BOB_FREQUENCY: f32 = 0.3;
pub const ISLAND_BOB_AMPLITUDE: f32 = 0.1;
pub const CLOUD_COUNT: usize = 100;
pub const PARTICLE_COUNT: usize = 200;
pub const CLOUD_DRIFT_PER_FRAME: f32 = 0.005;
pub const CLOUD_WRAP_X: f32 = 25.0;

// Sub-scenes float above their section prop and are shrunk to fit
pub const SUBSCENE_ANCHOR_OFFSET: [f32; 3] = [0.0, 1.2, 0.0];
pub const SUBSCENE_SCALE: f32 = 0.3;

pub const FALLBACK_USER_NAME: &str = "Aziz";

#[inline]
pub fn default_camera_position() -> Vec3 {
    Vec3::from(DEFAULT_CAMERA_POSITION)
}

#[inline]
pub fn default_camera_target() -> Vec3 {
    Vec3::from(DEFAULT_CAMERA_TARGET)
}
