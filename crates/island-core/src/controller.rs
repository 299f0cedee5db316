//! Scene controller: owns every piece of scene state and exposes the user
//! actions. The web layer calls into it from event handlers and once per
//! animation frame; nothing here touches the DOM.

use crate::ambient::island_bob_y;
use crate::assets::AssetRegistry;
use crate::camera::{Camera, CameraPose};
use crate::clock::SceneClock;
use crate::config::SceneConfig;
use crate::content::{self, ContentView};
use crate::controls::{pan_step, KeyState, OrbitControls};
use crate::error::Result;
use crate::navigation::{CameraCue, Effect, ModalMode, NavigationState, Theme};
use crate::picking::{cursor_change, hover_target, nearest_hit, section_targets, PickTargets};
use crate::rig::{CameraRig, SequenceComplete, SequenceId};
use crate::sections::default_sections;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    SequenceComplete(SequenceComplete),
    /// The shark's welcome bubble went away after the fly-in.
    SharkWelcomeHidden,
}

pub type SceneEvents = SmallVec<[SceneEvent; 2]>;

pub struct SceneController {
    config: SceneConfig,
    nav: NavigationState,
    rig: CameraRig,
    keys: KeyState,
    orbit: OrbitControls,
    clock: SceneClock,
    hovered: Option<&'static str>,
    pre_modal_pose: Option<CameraPose>,
    fly_in: Option<SequenceId>,
    assets: AssetRegistry,
}

impl Default for SceneController {
    fn default() -> Self {
        Self::from_valid(SceneConfig::default())
    }
}

impl SceneController {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: SceneConfig) -> Self {
        let mut nav = NavigationState::new(default_sections());
        nav.set_theme(config.theme);
        nav.set_modal_mode(config.modal_mode);
        Self {
            rig: CameraRig::new(config.initial_pose),
            orbit: OrbitControls::new(config.orbit),
            nav,
            keys: KeyState::new(),
            clock: SceneClock::new(),
            hovered: None,
            pre_modal_pose: None,
            fly_in: None,
            assets: AssetRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn pose(&self) -> &CameraPose {
        self.rig.pose()
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }

    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetRegistry {
        &mut self.assets
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::from_pose(self.rig.pose(), self.config.fov_degrees, aspect)
    }

    pub fn content_view(&self) -> Option<ContentView> {
        content::render(self.nav.active_section(), self.nav.modal_mode(), self.nav.user_name())
    }

    // ---------------- Actions ----------------

    pub fn submit_name(&mut self, name: &str) -> Effect {
        let effect = self.nav.submit_name(name);
        self.apply(&effect);
        effect
    }

    pub fn select_section(&mut self, id: &str) -> Effect {
        let effect = self.nav.select_section(id);
        self.apply(&effect);
        effect
    }

    pub fn navigate(&mut self, id: &str) -> Effect {
        self.select_section(id)
    }

    pub fn close_section(&mut self) -> Effect {
        let effect = self.nav.close_section();
        self.apply(&effect);
        if self.nav.active_section_id().is_none() {
            self.pre_modal_pose = None;
        }
        effect
    }

    pub fn set_theme(&mut self, theme: Theme) -> Effect {
        self.nav.set_theme(theme)
    }

    pub fn toggle_theme(&mut self) -> Effect {
        let next = self.nav.theme().toggled();
        self.nav.set_theme(next)
    }

    pub fn toggle_modal_mode(&mut self) -> Effect {
        self.pre_modal_pose = None;
        self.nav.toggle_modal_mode()
    }

    pub fn reset_camera(&mut self) -> SequenceId {
        self.pre_modal_pose = None;
        self.rig.reset_camera()
    }

    pub fn dramatic_reveal(&mut self) -> SequenceId {
        self.pre_modal_pose = None;
        self.rig.dramatic_reveal()
    }

    fn apply(&mut self, effect: &Effect) {
        let Some(cue) = effect.camera_cue() else {
            return;
        };
        match cue {
            CameraCue::FlyToIsland { name } => {
                self.fly_in = Some(self.rig.fly_to_island(name));
            }
            CameraCue::FocusSection { position, .. } => {
                if self.pre_modal_pose.is_none() {
                    self.pre_modal_pose = Some(*self.rig.pose());
                }
                let eye = *position + self.config.modal_camera_offset;
                self.rig.modal_entrance(eye, *position);
            }
            CameraCue::LeaveSection => {
                if let Some(pose) = self.pre_modal_pose.take() {
                    let duration = self.config.section_focus_duration;
                    self.rig.animate_to_section(pose.position, pose.target, duration);
                }
            }
        }
    }

    // ---------------- Input ----------------

    /// `KeyboardEvent.code` went down. Escape closes the active section.
    pub fn key_down(&mut self, code: &str) -> Effect {
        if code == "Escape" {
            return self.close_section();
        }
        self.keys.set(code, true);
        Effect::Updated
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys.set(code, false);
    }

    pub fn clear_keys(&mut self) {
        self.keys.clear();
    }

    pub fn pointer_drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.rig.is_animating() {
            self.orbit.rotate(dx, dy, viewport_height);
        }
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if !self.rig.is_animating() {
            self.orbit.zoom(delta_y);
        }
    }

    pub fn pick_targets(&self) -> PickTargets {
        section_targets(self.nav.sections(), island_bob_y(self.clock.elapsed()))
    }

    /// Update the hovered prop for a pointer at pixel `px`. Returns the new
    /// cursor when it should change.
    pub fn pointer_move(&mut self, px: Vec2, width: f32, height: f32) -> Option<&'static str> {
        let cam = self.camera(width / height.max(1.0));
        let next = hover_target(&cam, px, width, height, &self.pick_targets());
        self.set_hovered(next)
    }

    pub fn set_hovered(&mut self, next: Option<&'static str>) -> Option<&'static str> {
        let change = cursor_change(self.hovered, next);
        self.hovered = next;
        change
    }

    /// Click at pixel `px`. Selects the nearest prop under the pointer;
    /// background clicks do nothing.
    pub fn click(&mut self, px: Vec2, width: f32, height: f32) -> Effect {
        let cam = self.camera(width / height.max(1.0));
        let (ro, rd) = cam.ndc_ray(crate::camera::pixel_to_ndc(px, width, height));
        self.click_ray(ro, rd)
    }

    pub fn click_ray(&mut self, ray_origin: Vec3, ray_dir: Vec3) -> Effect {
        match nearest_hit(ray_origin, ray_dir, &self.pick_targets()) {
            Some(id) => self.select_section(id),
            None => Effect::Ignored,
        }
    }

    // ---------------- Frame ----------------

    pub fn tick(&mut self, dt: f32) -> SceneEvents {
        let dt = self.clock.tick(dt);
        let mut events = SceneEvents::new();

        if self.rig.is_animating() {
            self.orbit.discard_input();
            if let Some(done) = self.rig.update(dt) {
                events.push(SceneEvent::SequenceComplete(done));
            }
        } else {
            pan_step(self.rig.pose_mut(), &self.keys, &self.config.pan, dt);
            self.orbit.update(self.rig.pose_mut());
        }

        // The fly-in is over once it is no longer the active sequence,
        // whether it finished or another trigger replaced it.
        if let Some(id) = self.fly_in {
            let still_flying = self.rig.active_sequence().is_some_and(|(active, _)| active == id);
            if !still_flying {
                self.fly_in = None;
                if self.nav.hide_shark_welcome() {
                    log::info!("[scene] shark welcome hidden");
                    events.push(SceneEvent::SharkWelcomeHidden);
                }
            }
        }
        events
    }

    pub fn modal_mode(&self) -> ModalMode {
        self.nav.modal_mode()
    }
}
