//! Ambient motion: island bob, the shark's circuit, ocean surface, drifting
//! clouds and floating particles.
//!
//! Everything except [`Atmosphere`] is a pure function of elapsed time.
//! `Atmosphere` keeps per-point state because clouds wrap around and
//! particles accumulate their drift frame by frame.

use crate::constants::{
    CLOUD_COUNT, CLOUD_DRIFT_PER_FRAME, CLOUD_WRAP_X, ISLAND_BOB_AMPLITUDE, ISLAND_BOB_FREQUENCY,
    OCEAN_LEVEL, PARTICLE_COUNT, SHARK_DEPTH, SHARK_RADIUS, SHARK_SPEED,
};
use crate::navigation::Theme;
use glam::Vec3;
use rand::prelude::*;

#[inline]
pub fn island_bob_y(t: f32) -> f32 {
    (t * ISLAND_BOB_FREQUENCY).sin() * ISLAND_BOB_AMPLITUDE
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SharkPose {
    pub position: Vec3,
    /// Point the shark faces, slightly ahead on the circle.
    pub heading: Vec3,
}

pub fn shark_pose(t: f32) -> SharkPose {
    let angle = t * SHARK_SPEED;
    let on_circle = |a: f32| Vec3::new(a.cos() * SHARK_RADIUS, SHARK_DEPTH, a.sin() * SHARK_RADIUS);
    SharkPose {
        position: on_circle(angle),
        heading: on_circle(angle + 0.01),
    }
}

/// Displacement of the ocean surface above `OCEAN_LEVEL` at `(x, z)`.
pub fn ocean_wave(x: f32, z: f32, t: f32) -> f32 {
    (x * 0.5 + t * 0.8).sin() * 0.1 + (z * 0.3 + t * 0.6).sin() * 0.08
}

pub fn ocean_height(x: f32, z: f32, t: f32) -> f32 {
    OCEAN_LEVEL + ocean_wave(x, z, t)
}

pub fn ocean_foam(x: f32, z: f32, t: f32) -> f32 {
    let f = (x * 8.0 + t * 2.0).sin() * (z * 8.0 + t * 1.5).sin();
    smoothstep(0.7, 1.0, f)
}

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Float {
    pub speed: f32,
    pub intensity: f32,
    pub phase: f32,
}

impl Float {
    pub fn new(speed: f32, intensity: f32) -> Self {
        Self {
            speed,
            intensity,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn offset_y(&self, t: f32) -> f32 {
        (t * self.speed + self.phase).sin() * 0.1 * self.intensity
    }
}

/// Sky, light and water colours for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyPalette {
    pub zenith: [f32; 3],
    pub horizon: [f32; 3],
    pub deep_water: [f32; 3],
    pub shallow_water: [f32; 3],
    pub fog: [f32; 3],
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub directional_color: [f32; 3],
    /// Sun elevation; negative puts it below the horizon.
    pub sun_height: f32,
}

impl SkyPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                zenith: [0.25, 0.52, 0.86],
                horizon: [0.53, 0.81, 0.92],
                deep_water: [0.1, 0.3, 0.6],
                shallow_water: [0.2, 0.5, 0.8],
                fog: [0.53, 0.81, 0.92],
                ambient_intensity: 0.4,
                directional_intensity: 1.0,
                directional_color: [1.0, 1.0, 1.0],
                sun_height: 1.0,
            },
            Theme::Dark => Self {
                zenith: [0.02, 0.03, 0.10],
                horizon: [0.10, 0.14, 0.30],
                deep_water: [0.03, 0.08, 0.2],
                shallow_water: [0.08, 0.18, 0.35],
                fog: [0.06, 0.09, 0.2],
                ambient_intensity: 0.2,
                directional_intensity: 0.6,
                directional_color: [0.29, 0.56, 0.89],
                sun_height: -0.5,
            },
        }
    }
}

/// Drifting cloud puffs and floating particles.
#[derive(Clone, Debug)]
pub struct Atmosphere {
    clouds: Vec<Vec3>,
    particles: Vec<Vec3>,
}

impl Atmosphere {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let clouds = (0..CLOUD_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 50.0,
                    rng.gen::<f32>() * 10.0 + 5.0,
                    (rng.gen::<f32>() - 0.5) * 50.0,
                )
            })
            .collect();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 40.0,
                    rng.gen::<f32>() * 15.0,
                    (rng.gen::<f32>() - 0.5) * 40.0,
                )
            })
            .collect();
        Self { clouds, particles }
    }

    pub fn clouds(&self) -> &[Vec3] {
        &self.clouds
    }

    pub fn particles(&self) -> &[Vec3] {
        &self.particles
    }

    /// One rendered frame of drift at elapsed time `t`.
    pub fn step(&mut self, t: f32) {
        for c in self.clouds.iter_mut() {
            c.x += CLOUD_DRIFT_PER_FRAME;
            if c.x > CLOUD_WRAP_X {
                c.x = -CLOUD_WRAP_X;
            }
        }
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.y += (t + i as f32).sin() * 0.001;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shark_stays_on_its_circle() {
        for i in 0..50 {
            let pose = shark_pose(i as f32 * 0.7);
            let r = Vec3::new(pose.position.x, 0.0, pose.position.z).length();
            assert!((r - SHARK_RADIUS).abs() < 1e-3);
            assert_eq!(pose.position.y, SHARK_DEPTH);
            assert!(pose.heading.distance(pose.position) < 0.2);
        }
    }

    #[test]
    fn same_seed_same_atmosphere() {
        let a = Atmosphere::new(7);
        let b = Atmosphere::new(7);
        assert_eq!(a.clouds(), b.clouds());
        assert_eq!(a.particles().len(), PARTICLE_COUNT);
        assert!(a
            .clouds()
            .iter()
            .all(|c| c.x.abs() <= 25.0 && (5.0..=15.0).contains(&c.y)));
    }

    #[test]
    fn clouds_wrap_at_the_edge() {
        let mut a = Atmosphere::new(1);
        a.clouds[0].x = CLOUD_WRAP_X - 0.001;
        a.step(0.0);
        assert_eq!(a.clouds()[0].x, -CLOUD_WRAP_X);
    }

    #[test]
    fn foam_is_a_mask() {
        for i in 0..100 {
            let f = ocean_foam(i as f32 * 0.13, i as f32 * 0.07, i as f32 * 0.05);
            assert!((0.0..=1.0).contains(&f));
        }
    }
}
