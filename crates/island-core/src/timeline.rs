//! Multi-stage camera timelines advanced by frame deltas.
//!
//! A `Timeline` is an ordered list of tweens, each moving one channel of a
//! `CameraPose` toward a destination. Start values are captured the first
//! time a tween becomes active, so a stage always continues from wherever
//! the previous stage (or the user) left the camera.

use crate::camera::CameraPose;
use crate::easing::Ease;
use glam::Vec3;
use smallvec::SmallVec;

const EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Position,
    Target,
}

impl Channel {
    fn read(self, pose: &CameraPose) -> Vec3 {
        match self {
            Channel::Position => pose.position,
            Channel::Target => pose.target,
        }
    }

    fn write(self, pose: &mut CameraPose, v: Vec3) {
        match self {
            Channel::Position => pose.position = v,
            Channel::Target => pose.target = v,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum At {
    /// Appended after everything added so far.
    End,
    /// Fixed start time in seconds.
    Absolute(f32),
    /// This many seconds before the current end (`"-=x"`).
    BeforeEnd(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Pending,
    Running,
    Complete,
}

#[derive(Clone, Debug)]
struct Tween {
    channel: Channel,
    to: Vec3,
    start: f32,
    duration: f32,
    ease: Ease,
    from: Option<Vec3>,
}

impl Tween {
    fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= EPS {
            return 1.0;
        }
        ((elapsed - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct Timeline {
    tweens: SmallVec<[Tween; 8]>,
    end: f32,
    elapsed: f32,
    state: PlaybackState,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            tweens: SmallVec::new(),
            end: 0.0,
            elapsed: 0.0,
            state: PlaybackState::Pending,
        }
    }

    /// Jump a channel to `value` at the current end of the timeline.
    pub fn set(self, channel: Channel, value: Vec3) -> Self {
        self.to(channel, value, 0.0, Ease::Linear, At::End)
    }

    /// Tween a channel to `value`. Negative or non-finite durations are
    /// clamped to zero, which makes the stage instantaneous.
    pub fn to(mut self, channel: Channel, value: Vec3, duration: f32, ease: Ease, at: At) -> Self {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let start = match at {
            At::End => self.end,
            At::Absolute(t) => t.max(0.0),
            At::BeforeEnd(back) => (self.end - back).max(0.0),
        };
        self.end = self.end.max(start + duration);
        self.tweens.push(Tween {
            channel,
            to: value,
            start,
            duration,
            ease,
            from: None,
        });
        self
    }

    pub fn duration(&self) -> f32 {
        self.end
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Advance by `dt` seconds and write the result into `pose`.
    ///
    /// Returns `true` exactly once: on the call that completes the timeline.
    pub fn advance(&mut self, dt: f32, pose: &mut CameraPose) -> bool {
        if self.state == PlaybackState::Complete {
            return false;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.state = PlaybackState::Running;
        self.elapsed = (self.elapsed + dt).min(self.end);

        for tween in self.tweens.iter_mut() {
            if tween.start > self.elapsed + EPS {
                continue;
            }
            let channel = tween.channel;
            let from = *tween.from.get_or_insert_with(|| channel.read(pose));
            let p = tween.ease.apply(tween.progress(self.elapsed));
            channel.write(pose, from.lerp(tween.to, p));
        }

        if self.elapsed + EPS >= self.end {
            self.state = PlaybackState::Complete;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose() -> CameraPose {
        CameraPose::new(Vec3::ZERO, Vec3::ZERO)
    }

    #[test]
    fn relative_offsets_overlap_stages() {
        let tl = Timeline::new()
            .to(Channel::Position, Vec3::X, 2.0, Ease::Linear, At::End)
            .to(Channel::Target, Vec3::Y, 2.0, Ease::Linear, At::Absolute(0.0))
            .to(Channel::Position, Vec3::Z, 2.0, Ease::Linear, At::End)
            .to(Channel::Target, Vec3::X, 2.0, Ease::Linear, At::BeforeEnd(2.0));
        assert!((tl.duration() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn linear_midpoint_is_halfway() {
        let mut p = pose();
        let mut tl = Timeline::new().to(Channel::Position, Vec3::new(10.0, 0.0, 0.0), 2.0, Ease::Linear, At::End);
        assert!(!tl.advance(1.0, &mut p));
        assert!((p.position.x - 5.0).abs() < 1e-5);
        assert!(tl.advance(1.0, &mut p));
        assert!((p.position.x - 10.0).abs() < 1e-5);
        assert!(!tl.advance(1.0, &mut p), "completion reported twice");
    }

    #[test]
    fn later_stage_starts_from_previous_stage_end_across_frame_skip() {
        let mut p = pose();
        let mut tl = Timeline::new()
            .to(Channel::Position, Vec3::new(4.0, 0.0, 0.0), 1.0, Ease::Linear, At::End)
            .to(Channel::Position, Vec3::new(4.0, 8.0, 0.0), 1.0, Ease::Linear, At::End);
        tl.advance(0.5, &mut p);
        // skip straight past the boundary
        tl.advance(1.0, &mut p);
        assert!(p.position.abs_diff_eq(Vec3::new(4.0, 4.0, 0.0), 1e-5), "{:?}", p.position);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut p = pose();
        let mut tl = Timeline::new().to(Channel::Target, Vec3::ONE, 0.0, Ease::Power2InOut, At::End);
        assert!(tl.advance(0.0, &mut p));
        assert_eq!(p.target, Vec3::ONE);
    }

    #[test]
    fn negative_and_nan_durations_are_clamped() {
        let mut p = pose();
        let mut tl = Timeline::new()
            .to(Channel::Position, Vec3::ONE, -3.0, Ease::Linear, At::End)
            .to(Channel::Target, Vec3::ONE, f32::NAN, Ease::Linear, At::End);
        assert_eq!(tl.duration(), 0.0);
        assert!(tl.advance(0.016, &mut p));
        assert!(p.position.is_finite() && p.target.is_finite());
    }

    #[test]
    fn non_finite_dt_does_not_advance() {
        let mut p = pose();
        let mut tl = Timeline::new().to(Channel::Position, Vec3::X, 1.0, Ease::Linear, At::End);
        assert!(!tl.advance(f32::INFINITY, &mut p));
        assert_eq!(tl.elapsed(), 0.0);
        assert_eq!(tl.state(), PlaybackState::Running);
    }
}
