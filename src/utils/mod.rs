//! Utility Module
//!
//! - [`time`]: Step timing that produces the `dt` consumed by tweens
//!
//! ```rust,ignore
//! use myth_tween::utils::Timer;
//!
//! let mut timer = Timer::new();
//! loop {
//!     let dt = timer.tick();
//!     registry.update_all(dt, &mut slots);
//! }
//! ```

pub mod time;

pub use time::Timer;
