//! Error Types
//!
//! This module defines the error types returned by the tween registry.
//!
//! # Overview
//!
//! Every variant of [`TweenError`] is a usage contract violation at the call
//! site rather than a runtime condition to recover from:
//! - Creating a tween without supplying options
//! - Binding a tween to a slot the caller already removed
//!
//! Degenerate timing (zero duration or delay) is not an error; it is handled
//! by the regular update path.
//!
//! # Usage
//!
//! ```rust,ignore
//! use myth_tween::errors::Result;
//!
//! fn animate(registry: &mut TweenRegistry, slots: &mut ValueSlots) -> Result<()> {
//!     let (done, _) = registry.advance("fade", 0.016, slots, slot, 1.0, Some(&opts))?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::tween::TweenId;

/// Errors returned by [`TweenRegistry`](crate::TweenRegistry) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TweenError {
    /// A tween with this id did not exist yet and no options were supplied
    /// to create it.
    #[error("Attempt to create tween {id} with no options")]
    MissingOptions {
        /// Id of the tween that could not be created
        id: TweenId,
    },

    /// The target slot was removed from its store before it could be bound.
    #[error("Tween {id} was given a slot that no longer exists")]
    StaleSlot {
        /// Id of the tween the binding was meant for
        id: TweenId,
    },
}

/// Alias for `Result<T, TweenError>`.
pub type Result<T> = std::result::Result<T, TweenError>;
