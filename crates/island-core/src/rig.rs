//! Camera rig: the live camera pose plus at most one in-flight sequence.
//!
//! Triggering a sequence replaces whatever was playing (last call wins).
//! A replaced sequence never reports completion; a finished one reports it
//! exactly once from [`CameraRig::update`].

use crate::camera::CameraPose;
use crate::constants::{
    default_camera_position, default_camera_target, MODAL_ENTRANCE_DURATION_SEC,
    RESET_DURATION_SEC,
};
use crate::easing::Ease;
use crate::timeline::{At, Channel, Timeline};
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceId(u64);

impl SequenceId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    FlyToIsland,
    SectionFocus,
    Reset,
    DramaticReveal,
    ModalEntrance,
    Orbit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceComplete {
    pub id: SequenceId,
    pub kind: SequenceKind,
}

/// Endless circle around a point. The look-at target eases onto the center
/// during the first tenth of a second.
#[derive(Clone, Debug)]
struct OrbitMotion {
    center: Vec3,
    radius: f32,
    height: f32,
    period: f32,
    elapsed: f32,
    target_from: Option<Vec3>,
}

const ORBIT_TARGET_SETTLE_SEC: f32 = 0.1;

impl OrbitMotion {
    fn advance(&mut self, dt: f32, pose: &mut CameraPose) {
        self.elapsed += dt;
        let angle = if self.period > 1e-6 {
            TAU * (self.elapsed % self.period) / self.period
        } else {
            0.0
        };
        pose.position = Vec3::new(
            self.center.x + self.radius * angle.cos(),
            self.height,
            self.center.z + self.radius * angle.sin(),
        );
        let from = *self.target_from.get_or_insert(pose.target);
        let p = (self.elapsed / ORBIT_TARGET_SETTLE_SEC).clamp(0.0, 1.0);
        pose.target = from.lerp(self.center, p);
    }
}

#[derive(Clone, Debug)]
enum Motion {
    Timeline(Timeline),
    Orbit(OrbitMotion),
}

#[derive(Clone, Debug)]
struct ActiveSequence {
    id: SequenceId,
    kind: SequenceKind,
    motion: Motion,
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    pose: CameraPose,
    active: Option<ActiveSequence>,
    next_id: u64,
    started: u64,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraPose::new(default_camera_position(), default_camera_target()))
    }
}

impl CameraRig {
    pub fn new(pose: CameraPose) -> Self {
        Self {
            pose,
            active: None,
            next_id: 1,
            started: 0,
        }
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Direct pose access for user controls. Callers must not use this while
    /// [`is_animating`](Self::is_animating) is true.
    pub fn pose_mut(&mut self) -> &mut CameraPose {
        &mut self.pose
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_sequence(&self) -> Option<(SequenceId, SequenceKind)> {
        self.active.as_ref().map(|a| (a.id, a.kind))
    }

    pub fn sequences_started(&self) -> u64 {
        self.started
    }

    fn start(&mut self, kind: SequenceKind, motion: Motion) -> SequenceId {
        let id = SequenceId(self.next_id);
        self.next_id += 1;
        self.started += 1;
        if let Some(prev) = self.active.take() {
            log::debug!(
                "[camera] {:?} #{} interrupted by {:?} #{}",
                prev.kind,
                prev.id.0,
                kind,
                id.0
            );
        }
        log::debug!("[camera] start {:?} #{}", kind, id.0);
        self.active = Some(ActiveSequence { id, kind, motion });
        id
    }

    /// Long approach from far out at sea, circling in to land near the island.
    pub fn fly_to_island(&mut self, user_name: &str) -> SequenceId {
        log::info!("[camera] flying in for {user_name}");
        let tl = Timeline::new()
            .set(Channel::Position, Vec3::new(-50.0, 30.0, 50.0))
            .set(Channel::Target, Vec3::ZERO)
            .to(Channel::Position, Vec3::new(-20.0, 15.0, 25.0), 2.0, Ease::Power2InOut, At::End)
            .to(Channel::Target, Vec3::new(0.0, 2.0, 0.0), 2.0, Ease::Power2InOut, At::Absolute(0.0))
            .to(Channel::Position, Vec3::new(0.0, 8.0, 15.0), 2.0, Ease::Power2InOut, At::End)
            .to(Channel::Target, Vec3::new(0.0, 1.0, 0.0), 2.0, Ease::Power2InOut, At::BeforeEnd(2.0))
            .to(Channel::Position, Vec3::new(-8.0, 5.0, 12.0), 1.5, Ease::Power2Out, At::End)
            .to(Channel::Target, Vec3::ZERO, 1.5, Ease::Power2Out, At::BeforeEnd(1.5));
        self.start(SequenceKind::FlyToIsland, Motion::Timeline(tl))
    }

    pub fn animate_to_section(&mut self, position: Vec3, target: Vec3, duration: f32) -> SequenceId {
        self.start(SequenceKind::SectionFocus, Motion::Timeline(focus_timeline(position, target, duration)))
    }

    pub fn reset_camera(&mut self) -> SequenceId {
        let tl = focus_timeline(default_camera_position(), default_camera_target(), RESET_DURATION_SEC);
        self.start(SequenceKind::Reset, Motion::Timeline(tl))
    }

    /// Rise from underwater, then pull back to show the whole island.
    pub fn dramatic_reveal(&mut self) -> SequenceId {
        let tl = Timeline::new()
            .set(Channel::Position, Vec3::new(0.0, -10.0, 0.0))
            .set(Channel::Target, Vec3::new(0.0, 5.0, 0.0))
            .to(Channel::Position, Vec3::new(0.0, 2.0, 8.0), 3.0, Ease::Power2Out, At::End)
            .to(Channel::Target, Vec3::ZERO, 3.0, Ease::Power2Out, At::Absolute(0.0))
            .to(Channel::Position, Vec3::new(-8.0, 12.0, 15.0), 2.0, Ease::Power1InOut, At::End)
            .to(Channel::Target, Vec3::new(0.0, 2.0, 0.0), 2.0, Ease::Power1InOut, At::BeforeEnd(2.0));
        self.start(SequenceKind::DramaticReveal, Motion::Timeline(tl))
    }

    pub fn modal_entrance(&mut self, position: Vec3, target: Vec3) -> SequenceId {
        let tl = focus_timeline(position, target, MODAL_ENTRANCE_DURATION_SEC);
        self.start(SequenceKind::ModalEntrance, Motion::Timeline(tl))
    }

    /// Circle `center` forever; only another trigger or [`cancel`](Self::cancel)
    /// stops it.
    pub fn orbit(&mut self, center: Vec3, radius: f32, height: f32, period: f32) -> SequenceId {
        let motion = OrbitMotion {
            center,
            radius,
            height,
            period: if period.is_finite() { period.max(0.0) } else { 0.0 },
            elapsed: 0.0,
            target_from: None,
        };
        self.start(SequenceKind::Orbit, Motion::Orbit(motion))
    }

    /// Stop the in-flight sequence where it is. No completion is reported.
    pub fn cancel(&mut self) -> Option<SequenceId> {
        self.active.take().map(|a| a.id)
    }

    pub fn update(&mut self, dt: f32) -> Option<SequenceComplete> {
        if !dt.is_finite() {
            return None;
        }
        let dt = dt.max(0.0);
        let active = self.active.as_mut()?;
        let done = match &mut active.motion {
            Motion::Timeline(tl) => tl.advance(dt, &mut self.pose),
            Motion::Orbit(orbit) => {
                orbit.advance(dt, &mut self.pose);
                false
            }
        };
        if !done {
            return None;
        }
        let finished = self.active.take()?;
        log::debug!("[camera] {:?} #{} complete", finished.kind, finished.id.0);
        Some(SequenceComplete {
            id: finished.id,
            kind: finished.kind,
        })
    }
}

fn focus_timeline(position: Vec3, target: Vec3, duration: f32) -> Timeline {
    Timeline::new()
        .to(Channel::Position, position, duration, Ease::Power2InOut, At::End)
        .to(Channel::Target, target, duration, Ease::Power2InOut, At::Absolute(0.0))
}
