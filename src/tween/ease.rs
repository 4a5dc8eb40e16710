use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

/// Named shaping curve applied to normalized progress.
///
/// Every curve is an "ease in" curve: it starts slow at `p = 0` and
/// reaches `1` at `p = 1`. Direction is chosen separately through
/// [`Transition`](super::Transition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Ease {
    #[default]
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Sine,
    Circ,
    /// Overshoots below zero before accelerating.
    Back,
    /// Oscillates with growing amplitude towards the end.
    Elastic,
}

impl Ease {
    pub const ALL: [Ease; 10] = [
        Ease::Linear,
        Ease::Quad,
        Ease::Cubic,
        Ease::Quart,
        Ease::Quint,
        Ease::Expo,
        Ease::Sine,
        Ease::Circ,
        Ease::Back,
        Ease::Elastic,
    ];

    /// Maps raw progress `p` in `[0, 1]` to shaped progress.
    ///
    /// Total over `[0, 1]`; never fails. `Expo` and `Elastic` do not hit
    /// exactly `0` at `p = 0` (they return `2^-10` and a tiny negative value).
    #[inline]
    #[must_use]
    pub fn apply(self, p: f32) -> f32 {
        match self {
            Ease::Linear => p,
            Ease::Quad => p * p,
            Ease::Cubic => p * p * p,
            Ease::Quart => p * p * p * p,
            Ease::Quint => p * p * p * p * p,
            Ease::Expo => 2.0_f32.powf(10.0 * (p - 1.0)),
            Ease::Sine => 1.0 - (p * FRAC_PI_2).cos(),
            Ease::Circ => 1.0 - (1.0 - p * p).sqrt(),
            Ease::Back => p * p * (2.7 * p - 1.7),
            Ease::Elastic => {
                -(2.0_f32.powf(10.0 * p - 10.0)) * ((10.0 * p - 10.75) * (2.0 * PI / 3.0)).sin()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn polynomial_curves_hit_both_ends() {
        for ease in [Ease::Linear, Ease::Quad, Ease::Cubic, Ease::Quart, Ease::Quint, Ease::Sine, Ease::Circ, Ease::Back] {
            assert!(ease.apply(0.0).abs() < EPSILON, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < EPSILON, "{ease:?} at 1");
        }
    }

    #[test]
    fn expo_starts_at_two_to_minus_ten() {
        assert!((Ease::Expo.apply(0.0) - 2.0_f32.powi(-10)).abs() < EPSILON);
        assert!((Ease::Expo.apply(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn elastic_literal_boundaries() {
        // -2^-10 * sin(-10.75 * 2pi/3)
        let at_zero = -(2.0_f32.powi(-10)) * (-10.75_f32 * (2.0 * PI / 3.0)).sin();
        assert!((Ease::Elastic.apply(0.0) - at_zero).abs() < EPSILON);
        assert!(Ease::Elastic.apply(0.0).abs() < 1e-3);
        assert!((Ease::Elastic.apply(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn back_dips_below_zero() {
        assert!(Ease::Back.apply(0.3) < 0.0);
    }

    #[test]
    fn quad_midpoint() {
        assert!((Ease::Quad.apply(0.5) - 0.25).abs() < EPSILON);
        assert!((Ease::Cubic.apply(0.5) - 0.125).abs() < EPSILON);
    }
}
