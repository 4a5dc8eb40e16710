use super::slots::SlotHandle;

/// One interpolated scalar of a tween.
///
/// Maps progress onto `from..to` and writes the result into `target`.
/// Only created for a non-zero `delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBinding {
    pub from: f32,
    pub to: f32,
    pub delta: f32, // Always `to - from`
    pub target: SlotHandle,
}

impl ValueBinding {
    /// Returns `None` when `from == to`, since such a binding never changes its target.
    #[must_use]
    pub fn new(target: SlotHandle, from: f32, to: f32) -> Option<Self> {
        let delta = to - from;
        if delta == 0.0 {
            return None;
        }
        Some(Self {
            from,
            to,
            delta,
            target,
        })
    }

    #[inline]
    #[must_use]
    pub fn sample(&self, shaped: f32) -> f32 {
        self.from + shaped * self.delta
    }

    #[inline]
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.delta = -self.delta;
    }
}
