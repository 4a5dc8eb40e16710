//! glam vector tweening.
//!
//! A vector is tweened as one scalar binding per component, all sharing a
//! single [`TweenState`]. Components whose start already equals the end
//! produce no binding.

use glam::{Vec2, Vec3};

use crate::errors::{Result, TweenError};

use super::{
    id::TweenId,
    options::TweenOptions,
    registry::TweenRegistry,
    slots::{Vec2Slots, Vec3Slots, ValueSlots},
    state::TweenState,
};

impl TweenRegistry {
    /// [`advance`](Self::advance) for a [`Vec2`] stored in component slots.
    pub fn advance_vec2(
        &mut self,
        id: impl Into<TweenId>,
        dt: f32,
        slots: &mut ValueSlots,
        target: Vec2Slots,
        to: Vec2,
        options: Option<&TweenOptions>,
    ) -> Result<(bool, &mut TweenState)> {
        let id = id.into();
        if slots.read_vec2(target).is_none() {
            return Err(TweenError::StaleSlot { id });
        }

        let state = self.get_or_create(id, options)?;
        state.bind(slots, target.x, to.x)?;
        state.bind(slots, target.y, to.y)?;
        let done = state.update(dt, slots);
        Ok((done, state))
    }

    /// [`advance`](Self::advance) for a [`Vec3`] stored in component slots.
    pub fn advance_vec3(
        &mut self,
        id: impl Into<TweenId>,
        dt: f32,
        slots: &mut ValueSlots,
        target: Vec3Slots,
        to: Vec3,
        options: Option<&TweenOptions>,
    ) -> Result<(bool, &mut TweenState)> {
        let id = id.into();
        if slots.read_vec3(target).is_none() {
            return Err(TweenError::StaleSlot { id });
        }

        let state = self.get_or_create(id, options)?;
        state.bind(slots, target.x, to.x)?;
        state.bind(slots, target.y, to.y)?;
        state.bind(slots, target.z, to.z)?;
        let done = state.update(dt, slots);
        Ok((done, state))
    }
}
