use crate::constants::MAX_FRAME_DT_SEC;
use instant::Instant;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneClock {
    elapsed: f32,
    frame: u64,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds and return the delta actually applied.
    /// Negative or non-finite deltas count as zero; long gaps are capped.
    pub fn tick(&mut self, dt: f32) -> f32 {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT_SEC) } else { 0.0 };
        self.elapsed += dt;
        self.frame += 1;
        dt
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[derive(Debug)]
pub struct FrameTimer {
    last: Instant,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    pub fn lap(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_clamps_bad_deltas() {
        let mut c = SceneClock::new();
        assert_eq!(c.tick(-1.0), 0.0);
        assert_eq!(c.tick(f32::NAN), 0.0);
        assert_eq!(c.tick(10.0), MAX_FRAME_DT_SEC);
        assert_eq!(c.frame(), 3);
        assert!((c.elapsed() - MAX_FRAME_DT_SEC).abs() < 1e-6);
    }
}
