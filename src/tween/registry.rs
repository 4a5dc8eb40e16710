use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::errors::{Result, TweenError};

use super::{
    id::TweenId,
    options::TweenOptions,
    slots::{SlotHandle, ValueSlots},
    state::TweenState,
};

/// Owns every live [`TweenState`], keyed by [`TweenId`].
///
/// Entries are only removed by [`delete`](Self::delete),
/// [`retain_active`](Self::retain_active) or [`clear`](Self::clear); a
/// completed tween stays registered (and keeps reporting `done`) until the
/// caller removes it.
#[derive(Debug, Default)]
pub struct TweenRegistry {
    tweens: FxHashMap<TweenId, TweenState>,
}

impl TweenRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tweens: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: impl Into<TweenId>) -> bool {
        self.tweens.contains_key(&id.into())
    }

    #[must_use]
    pub fn get(&self, id: impl Into<TweenId>) -> Option<&TweenState> {
        self.tweens.get(&id.into())
    }

    pub fn get_mut(&mut self, id: impl Into<TweenId>) -> Option<&mut TweenState> {
        self.tweens.get_mut(&id.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TweenState> {
        self.tweens.values()
    }

    /// Returns the tween registered under `id`, creating it from `options`
    /// if absent.
    ///
    /// Options are ignored for an existing tween: its timing was fixed at
    /// creation. Creating without options is a usage error.
    pub fn get_or_create(
        &mut self,
        id: impl Into<TweenId>,
        options: Option<&TweenOptions>,
    ) -> Result<&mut TweenState> {
        let id = id.into();
        match self.tweens.entry(id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let options = options.ok_or(TweenError::MissingOptions { id })?;
                log::debug!(
                    "Tween {} created: {:?} {:?} over {:?} after {:?}",
                    id,
                    options.ease,
                    options.transition,
                    options.duration,
                    options.delay
                );
                Ok(entry.insert(TweenState::new(id, *options)))
            }
        }
    }

    /// Immediate-mode entry point.
    ///
    /// Call once per step with the same `id`: the first call creates the tween
    /// and binds `slot` from its current value to `to`, every call advances it
    /// by `dt` seconds. Later changes to `to` or `options` are ignored.
    ///
    /// Returns whether the tween is complete, together with the tween itself
    /// for [`reverse`](TweenState::reverse) / [`reset`](TweenState::reset).
    pub fn advance(
        &mut self,
        id: impl Into<TweenId>,
        dt: f32,
        slots: &mut ValueSlots,
        slot: SlotHandle,
        to: f32,
        options: Option<&TweenOptions>,
    ) -> Result<(bool, &mut TweenState)> {
        let id = id.into();
        if !slots.contains(slot) {
            return Err(TweenError::StaleSlot { id });
        }

        let state = self.get_or_create(id, options)?;
        state.bind(slots, slot, to)?;
        let done = state.update(dt, slots);
        Ok((done, state))
    }

    /// [`advance`](Self::advance) keyed by the calling source location.
    ///
    /// Each call site gets its own tween without naming it. Calls made from
    /// inside a loop share one tween; use [`TweenId::caller`] with
    /// [`TweenId::with_index`] and [`advance`](Self::advance) there.
    #[track_caller]
    pub fn advance_here(
        &mut self,
        dt: f32,
        slots: &mut ValueSlots,
        slot: SlotHandle,
        to: f32,
        options: Option<&TweenOptions>,
    ) -> Result<(bool, &mut TweenState)> {
        self.advance(TweenId::caller(), dt, slots, slot, to, options)
    }

    /// Clears the tween's bindings and unregisters it. The next `advance`
    /// with the same id starts a brand-new tween.
    pub fn delete(&mut self, id: impl Into<TweenId>) -> bool {
        let id = id.into();
        match self.tweens.remove(&id) {
            Some(mut state) => {
                state.clear_bindings();
                log::debug!("Tween {} deleted", id);
                true
            }
            None => false,
        }
    }

    /// Advances every registered tween by `dt`. Returns how many are complete.
    pub fn update_all(&mut self, dt: f32, slots: &mut ValueSlots) -> usize {
        self.tweens
            .values_mut()
            .map(|state| state.update(dt, slots))
            .filter(|done| *done)
            .count()
    }

    /// Unregisters every completed tween. Returns how many were removed.
    pub fn retain_active(&mut self) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|_, state| !state.is_complete());
        let removed = before - self.tweens.len();
        if removed > 0 {
            log::debug!("Removed {} completed tweens", removed);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}
