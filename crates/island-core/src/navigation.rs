//! Navigation state: welcome flow, active section, theme and modal mode.
//!
//! Every action returns an [`Effect`]. Transitions that imply a camera move
//! carry a [`CameraCue`] which the scene controller hands to the rig.

use crate::sections::{find_section, Section};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Overlay,
    Embedded3d,
}

impl ModalMode {
    pub fn toggled(self) -> Self {
        match self {
            ModalMode::Overlay => ModalMode::Embedded3d,
            ModalMode::Embedded3d => ModalMode::Overlay,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CameraCue {
    FlyToIsland { name: String },
    FocusSection { section_id: &'static str, position: Vec3 },
    LeaveSection,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Input rejected or already in the requested state.
    Ignored,
    Updated,
    Camera(CameraCue),
}

impl Effect {
    pub fn camera_cue(&self) -> Option<&CameraCue> {
        match self {
            Effect::Camera(cue) => Some(cue),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavigationState {
    sections: &'static [Section],
    active_section: Option<&'static str>,
    welcome_complete: bool,
    user_name: Option<String>,
    theme: Theme,
    modal_mode: ModalMode,
    shark_welcome_visible: bool,
}

impl NavigationState {
    pub fn new(sections: &'static [Section]) -> Self {
        Self {
            sections,
            active_section: None,
            welcome_complete: false,
            user_name: None,
            theme: Theme::default(),
            modal_mode: ModalMode::default(),
            shark_welcome_visible: false,
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn active_section_id(&self) -> Option<&'static str> {
        self.active_section
    }

    pub fn active_section(&self) -> Option<&'static Section> {
        self.active_section.and_then(|id| find_section(self.sections, id))
    }

    pub fn welcome_complete(&self) -> bool {
        self.welcome_complete
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn modal_mode(&self) -> ModalMode {
        self.modal_mode
    }

    pub fn shark_welcome_visible(&self) -> bool {
        self.shark_welcome_visible
    }

    pub fn submit_name(&mut self, name: &str) -> Effect {
        let name = name.trim();
        if name.is_empty() || self.welcome_complete {
            return Effect::Ignored;
        }
        self.user_name = Some(name.to_owned());
        self.welcome_complete = true;
        self.shark_welcome_visible = true;
        log::info!("[nav] welcome complete for {name}");
        Effect::Camera(CameraCue::FlyToIsland { name: name.to_owned() })
    }

    /// Unknown ids and re-selecting the active id are silent no-ops.
    pub fn select_section(&mut self, id: &str) -> Effect {
        let Some(section) = find_section(self.sections, id) else {
            log::debug!("[nav] ignoring unknown section {id:?}");
            return Effect::Ignored;
        };
        if self.active_section == Some(section.id) {
            return Effect::Ignored;
        }
        self.active_section = Some(section.id);
        log::debug!("[nav] section {} selected", section.id);
        match self.modal_mode {
            ModalMode::Overlay => Effect::Updated,
            ModalMode::Embedded3d => Effect::Camera(CameraCue::FocusSection {
                section_id: section.id,
                position: section.position,
            }),
        }
    }

    pub fn close_section(&mut self) -> Effect {
        let Some(prev) = self.active_section.take() else {
            return Effect::Ignored;
        };
        log::debug!("[nav] section {prev} closed");
        match self.modal_mode {
            ModalMode::Overlay => Effect::Updated,
            ModalMode::Embedded3d => Effect::Camera(CameraCue::LeaveSection),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> Effect {
        if self.theme == theme {
            return Effect::Ignored;
        }
        self.theme = theme;
        Effect::Updated
    }

    pub fn toggle_modal_mode(&mut self) -> Effect {
        self.modal_mode = self.modal_mode.toggled();
        Effect::Updated
    }

    pub fn set_modal_mode(&mut self, mode: ModalMode) -> Effect {
        if self.modal_mode == mode {
            return Effect::Ignored;
        }
        self.modal_mode = mode;
        Effect::Updated
    }

    /// Returns true if the bubble was visible.
    pub fn hide_shark_welcome(&mut self) -> bool {
        std::mem::replace(&mut self.shark_welcome_visible, false)
    }
}
