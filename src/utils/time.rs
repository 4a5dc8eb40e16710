#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Produces the per-step `dt` fed to [`TweenRegistry::advance`].
///
/// [`TweenRegistry::advance`]: crate::TweenRegistry::advance
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Upper bound for a single step, so a stalled frame does not finish
    /// every running tween at once.
    pub max_delta: Duration,
    /// Time since last tick (after clamping)
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            max_delta: Duration::from_millis(250),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Starts a new step and returns its length in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.advance(now - self.last_update);
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.dt_seconds()
    }

    /// Records a step of externally measured length.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta.min(self.max_delta);
        self.frame_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_long_steps() {
        let mut timer = Timer::new().with_max_delta(Duration::from_millis(100));
        timer.advance(Duration::from_secs(2));
        assert_eq!(timer.delta, Duration::from_millis(100));
        assert_eq!(timer.frame_count, 1);

        timer.advance(Duration::from_millis(16));
        assert_eq!(timer.delta, Duration::from_millis(16));
    }

    #[test]
    fn tick_counts_frames() {
        let mut timer = Timer::new();
        let dt = timer.tick();
        assert!(dt >= 0.0);
        assert_eq!(timer.frame_count, 1);
    }
}
