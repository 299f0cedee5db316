//! Easing curves used by camera sequences.
//!
//! Names follow the GSAP convention the sequences were tuned with:
//! `power1` is quadratic and `power2` is cubic.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
}

impl Ease {
    /// Map linear progress in \[0, 1\] to eased progress. Input is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::Power1In => t * t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::Power1In,
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in ALL {
            let mut prev = e.apply(0.0);
            for i in 1..=100 {
                let v = e.apply(i as f32 / 100.0);
                assert!(v + 1e-6 >= prev, "{e:?} not monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn in_out_curves_are_symmetric_at_midpoint() {
        assert!((Ease::Power1InOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
        assert_eq!(Ease::Linear.apply(f32::NAN), 1.0);
    }
}
