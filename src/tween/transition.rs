use serde::{Deserialize, Serialize};

use super::ease::Ease;

/// Direction in which an [`Ease`] curve is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Transition {
    /// The curve as-is (ease in).
    #[default]
    Forward,
    /// The curve mirrored on both axes (ease out).
    Backward,
    /// Forward curve over the first half, backward curve over the second,
    /// meeting at `(0.5, 0.5)` (ease in-out).
    Symmetric,
}

impl Transition {
    pub const ALL: [Transition; 3] = [Transition::Forward, Transition::Backward, Transition::Symmetric];

    /// Shapes raw progress `p` with `ease` played in this direction.
    #[inline]
    #[must_use]
    pub fn shape(self, ease: Ease, p: f32) -> f32 {
        match self {
            Transition::Forward => ease.apply(p),
            Transition::Backward => 1.0 - ease.apply(1.0 - p),
            Transition::Symmetric => {
                let p = p * 2.0;
                if p < 1.0 {
                    0.5 * ease.apply(p)
                } else {
                    0.5 * (1.0 - ease.apply(2.0 - p)) + 0.5
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn backward_mirrors_forward() {
        for ease in Ease::ALL {
            for i in 0..=20 {
                let p = i as f32 / 20.0;
                let backward = Transition::Backward.shape(ease, p);
                let mirrored = 1.0 - Transition::Forward.shape(ease, 1.0 - p);
                assert!((backward - mirrored).abs() < EPSILON, "{ease:?} at {p}");
            }
        }
    }

    #[test]
    fn symmetric_meets_at_midpoint() {
        for ease in [Ease::Linear, Ease::Quad, Ease::Cubic, Ease::Sine] {
            let below = Transition::Symmetric.shape(ease, 0.5 - 1e-4);
            let at = Transition::Symmetric.shape(ease, 0.5);
            assert!((at - 0.5).abs() < EPSILON, "{ease:?}");
            assert!((below - at).abs() < 1e-2, "{ease:?} is discontinuous");
        }
    }

    #[test]
    fn symmetric_quad_quarter_points() {
        // First half: 0.5 * (2p)^2, second half mirrors it.
        assert!((Transition::Symmetric.shape(Ease::Quad, 0.25) - 0.125).abs() < EPSILON);
        assert!((Transition::Symmetric.shape(Ease::Quad, 0.75) - 0.875).abs() < EPSILON);
    }
}
