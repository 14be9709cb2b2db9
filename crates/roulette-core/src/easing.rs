//! Easing curves for the spin animation.

/// Easing applied to the linear progress of a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// `1 - (1 - t)^3`: fast start, smooth deceleration to a stop. The wheel
    /// feels thrown and coasting, never ramping up.
    EaseOutCubic,
}

impl Easing {
    /// Applies the curve to a fraction, clamped into `[0, 1]`.
    pub fn transform(&self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exact() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
            // Out-of-range input clamps instead of extrapolating.
            assert_eq!(easing.transform(-0.5), 0.0);
            assert_eq!(easing.transform(1.5), 1.0);
        }
    }

    #[test]
    fn ease_out_decelerates() {
        let e = Easing::EaseOutCubic;
        // Front-loaded: the first half covers most of the distance.
        assert!(e.transform(0.5) > 0.8);
        // Strictly increasing.
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.transform(i as f64 / 100.0);
            assert!(v > prev);
            prev = v;
        }
    }
}
