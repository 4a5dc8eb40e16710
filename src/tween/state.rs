use smallvec::SmallVec;

use crate::errors::{Result, TweenError};

use super::{
    binding::ValueBinding,
    id::TweenId,
    options::TweenOptions,
    slots::{SlotHandle, ValueSlots},
};

/// Remaining delay at or below this many seconds counts as elapsed, so
/// accumulated `f32` rounding never costs an extra delaying step.
pub const EPSILON: f32 = 1e-6;

/// Where a tween is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenPhase {
    /// Counting down the initial delay; targets are not written.
    Delaying,
    /// Accumulating progress and writing targets every step.
    Animating,
    /// Progress reached `1`; further updates are no-ops.
    Complete,
}

/// One logical animation: a set of [`ValueBinding`]s sharing a timing curve.
#[derive(Debug, Clone)]
pub struct TweenState {
    id: TweenId,
    options: TweenOptions,

    rate: f32,
    delay: f32,
    progress: f32,

    bindings: SmallVec<[ValueBinding; 4]>,
}

impl TweenState {
    #[must_use]
    pub fn new(id: TweenId, options: TweenOptions) -> Self {
        Self {
            id,
            options,
            rate: options.rate(),
            delay: options.delay_secs(),
            progress: 0.0,
            bindings: SmallVec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> TweenId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &TweenOptions {
        &self.options
    }

    /// Normalized progress. Can overshoot `1` on the completing step.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    #[must_use]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Seconds of delay left before progress starts.
    #[inline]
    #[must_use]
    pub fn delay_remaining(&self) -> f32 {
        self.delay
    }

    #[inline]
    #[must_use]
    pub fn bindings(&self) -> &[ValueBinding] {
        &self.bindings
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    #[must_use]
    pub fn phase(&self) -> TweenPhase {
        if self.is_complete() {
            TweenPhase::Complete
        } else if self.delay > 0.0 {
            TweenPhase::Delaying
        } else {
            TweenPhase::Animating
        }
    }

    #[must_use]
    pub fn is_bound(&self, slot: SlotHandle) -> bool {
        self.bindings.iter().any(|b| b.target == slot)
    }

    /// Binds `slot` to animate from its current value towards `to`.
    ///
    /// A slot that is already bound keeps its original endpoints and `to` is
    /// ignored. Returns `Ok(true)` only when a new binding was recorded; a slot
    /// already holding `to` records nothing.
    pub fn bind(&mut self, slots: &ValueSlots, slot: SlotHandle, to: f32) -> Result<bool> {
        if self.is_bound(slot) {
            return Ok(false);
        }

        let from = slots
            .get(slot)
            .ok_or(TweenError::StaleSlot { id: self.id })?;

        match ValueBinding::new(slot, from, to) {
            Some(binding) => {
                log::trace!("Tween {}: bound slot {:?} {} -> {}", self.id, slot, from, to);
                self.bindings.push(binding);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Advances the tween by `dt` seconds and writes every bound target.
    ///
    /// Returns `true` once the tween is complete. Negative `dt` is treated
    /// as zero so progress never runs backwards.
    pub fn update(&mut self, dt: f32, slots: &mut ValueSlots) -> bool {
        if self.progress >= 1.0 {
            return true;
        }

        let dt = dt.max(0.0);

        if self.delay > 0.0 {
            self.delay -= dt;
            if self.delay <= EPSILON {
                self.delay = 0.0;
            }
            return false;
        }

        if self.rate > 0.0 {
            self.progress += self.rate * dt;
        } else {
            // Zero duration: complete on the first animating step
            self.progress = 1.0;
        }

        if self.progress >= 1.0 {
            if self.options.snap_to_end {
                self.write_back(slots, |b| b.to);
            }
            return true;
        }

        let shaped = self
            .options
            .transition
            .shape(self.options.ease, self.progress);
        self.write_back(slots, |b| b.sample(shaped));

        false
    }

    /// Swaps the endpoints of every binding. Progress is kept, so the next
    /// update continues from the current position towards the old start.
    pub fn reverse(&mut self) {
        for binding in &mut self.bindings {
            binding.reverse();
        }
    }

    /// Restarts timing from the stored options. Bindings are untouched.
    pub fn reset(&mut self) {
        let rate = self.options.rate();
        if rate > 0.0 {
            self.rate = rate;
        }

        let delay = self.options.delay_secs();
        if delay > 0.0 {
            self.delay = delay;
        }

        self.progress = 0.0;
        log::debug!("Tween {} reset", self.id);
    }

    pub(crate) fn clear_bindings(&mut self) {
        self.bindings.clear();
    }

    fn write_back(&self, slots: &mut ValueSlots, value: impl Fn(&ValueBinding) -> f32) {
        for binding in &self.bindings {
            if !slots.set(binding.target, value(binding)) {
                log::warn!(
                    "Tween {} writes to removed slot {:?}, skipping",
                    self.id,
                    binding.target
                );
            }
        }
    }
}
