//! Immediate-Mode Tweening
//!
//! A caller re-issues the same request every step and the registry keeps the
//! animation state behind a stable [`TweenId`]:
//!
//! ```rust,ignore
//! use myth_tween::{TweenOptions, TweenRegistry, ValueSlots};
//!
//! let mut registry = TweenRegistry::new();
//! let mut slots = ValueSlots::new();
//! let alpha = slots.insert(0.0);
//! let opts = TweenOptions::default();
//!
//! // Once per frame:
//! let (done, _) = registry.advance("fade_in", timer.dt_seconds(), &mut slots, alpha, 1.0, Some(&opts))?;
//! if done {
//!     registry.delete("fade_in");
//! }
//! ```
//!
//! Completed tweens are never collected automatically; callers delete them
//! or call [`TweenRegistry::retain_active`].

pub mod binding;
pub mod ease;
pub mod id;
pub mod options;
pub mod registry;
pub mod slots;
pub mod state;
pub mod transition;
mod vector;

pub use binding::ValueBinding;
pub use ease::Ease;
pub use id::TweenId;
pub use options::TweenOptions;
pub use registry::TweenRegistry;
pub use slots::{SlotHandle, ValueSlots, Vec2Slots, Vec3Slots};
pub use state::{TweenPhase, TweenState};
pub use transition::Transition;
