//! Tween configuration.
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use myth_tween::{Ease, Transition, TweenOptions};
//!
//! // Default: quartic in-out over three seconds
//! let opts = TweenOptions::default();
//!
//! let fade = TweenOptions {
//!     ease: Ease::Sine,
//!     duration: Duration::from_millis(250),
//!     ..Default::default()
//! };
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ease::Ease, transition::Transition};

/// Timing and shaping of a tween.
///
/// Read once when a [`TweenState`](super::TweenState) is created; later
/// options passed for the same id are ignored. [`TweenState::reset`] re-reads
/// the stored copy.
///
/// [`TweenState::reset`]: super::TweenState::reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenOptions {
    pub ease: Ease,
    pub transition: Transition,
    /// Total animating time. Zero means the tween completes on its first
    /// animating step.
    pub duration: Duration,
    /// Waiting time before progress starts accumulating.
    pub delay: Duration,
    /// Write the exact end value on the completing step instead of leaving
    /// the last interpolated value in place.
    pub snap_to_end: bool,
}

impl Default for TweenOptions {
    #[inline]
    fn default() -> Self {
        Self {
            ease: Ease::Quart,
            transition: Transition::Symmetric,
            duration: Duration::from_secs(3),
            delay: Duration::ZERO,
            snap_to_end: false,
        }
    }
}

impl TweenOptions {
    #[must_use]
    pub fn new(ease: Ease, transition: Transition, duration: Duration) -> Self {
        Self {
            ease,
            transition,
            duration,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn with_snap_to_end(mut self, snap_to_end: bool) -> Self {
        self.snap_to_end = snap_to_end;
        self
    }

    /// Progress gained per second, `0.0` for a zero duration.
    #[inline]
    #[must_use]
    pub fn rate(&self) -> f32 {
        let secs = self.duration.as_secs_f32();
        if secs > 0.0 { 1.0 / secs } else { 0.0 }
    }

    /// Initial delay in seconds.
    #[inline]
    #[must_use]
    pub fn delay_secs(&self) -> f32 {
        let secs = self.delay.as_secs_f32();
        if secs > 0.0 { secs } else { 0.0 }
    }
}
