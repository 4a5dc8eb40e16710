#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod errors;
pub mod tween;
pub mod utils;

pub use errors::{Result, TweenError};
pub use tween::{
    Ease, SlotHandle, Transition, TweenId, TweenOptions, TweenPhase, TweenRegistry, TweenState,
    ValueBinding, ValueSlots, Vec2Slots, Vec3Slots,
};
pub use utils::Timer;
