use std::fmt;
use std::panic::Location;

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// Stable identity of one logical tween inside a [`TweenRegistry`].
///
/// The same id passed on every step addresses the same tween. Ids built from
/// different sources are not checked for collisions: two call sites that hash
/// to the same value share one tween.
///
/// [`TweenRegistry`]: super::TweenRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

impl TweenId {
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Hashes a name into an id.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(xxh3_64(name.as_bytes()))
    }

    /// Id of the source location that called this function.
    ///
    /// Propagates through other `#[track_caller]` functions, so wrappers
    /// marked with it resolve to *their* caller.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        let seed = (u64::from(location.line()) << 32) | u64::from(location.column());
        Self(xxh3_64_with_seed(location.file().as_bytes(), seed))
    }

    /// Derives an id for a sub-item of this one, e.g. a loop index at a
    /// single call site.
    #[must_use]
    pub fn with_index(self, index: u64) -> Self {
        Self(xxh3_64_with_seed(&index.to_le_bytes(), self.0))
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for TweenId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<&str> for TweenId {
    #[inline]
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for TweenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn here() -> TweenId {
        TweenId::caller()
    }

    #[test]
    fn names_hash_deterministically() {
        assert_eq!(TweenId::from("fade"), TweenId::from_name("fade"));
        assert_ne!(TweenId::from("fade"), TweenId::from("slide"));
    }

    #[test]
    fn caller_is_stable_per_location() {
        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(TweenId::caller());
        }
        assert!(ids.windows(2).all(|w| w[0] == w[1]));

        let a = TweenId::caller();
        let b = TweenId::caller();
        assert_ne!(a, b);
    }

    #[test]
    fn caller_without_track_caller_is_the_callee() {
        assert_eq!(here(), here());
    }

    #[test]
    fn indexed_ids_differ() {
        let base = TweenId::new(7);
        assert_ne!(base.with_index(0), base.with_index(1));
        assert_eq!(base.with_index(3), base.with_index(3));
    }
}
