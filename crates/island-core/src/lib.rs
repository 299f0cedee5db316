pub mod ambient;
pub mod assets;
pub mod camera;
pub mod clock;
pub mod composer;
pub mod config;
pub mod constants;
pub mod content;
pub mod controller;
pub mod controls;
pub mod easing;
pub mod error;
pub mod navigation;
pub mod picking;
pub mod rig;
pub mod sections;
pub mod timeline;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static OCEAN_WGSL: &str = include_str!("../shaders/ocean.wgsl");

pub use ambient::Atmosphere;
pub use assets::{AssetKind, AssetRegistry};
pub use camera::{Camera, CameraPose};
pub use clock::{FrameTimer, SceneClock};
pub use composer::{compose, Instance, Label, LabelKind, RenderFrame, SceneUniforms};
pub use config::SceneConfig;
pub use constants::*;
pub use content::{ContentView, Panel, SubScene};
pub use controller::{SceneController, SceneEvent, SceneEvents};
pub use error::{AssetError, IslandError, Result};
pub use navigation::{CameraCue, Effect, ModalMode, NavigationState, Theme};
pub use rig::{CameraRig, SequenceComplete, SequenceId, SequenceKind};
pub use sections::{default_sections, find_section, Section, SectionKind};
