use glam::{Vec2, Vec3};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to one caller-owned scalar in a [`ValueSlots`] store.
    pub struct SlotHandle;
}

/// Caller-owned storage for tweened scalars.
///
/// Tweens never hold references into this store, only [`SlotHandle`]s, and
/// receive the store again on every update. Removing a slot that a tween is
/// still bound to is allowed: the write-back for that binding is skipped.
#[derive(Debug, Default, Clone)]
pub struct ValueSlots {
    values: SlotMap<SlotHandle, f32>,
}

/// Component slots of a tweened [`Vec2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vec2Slots {
    pub x: SlotHandle,
    pub y: SlotHandle,
}

/// Component slots of a tweened [`Vec3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vec3Slots {
    pub x: SlotHandle,
    pub y: SlotHandle,
    pub z: SlotHandle,
}

impl ValueSlots {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, value: f32) -> SlotHandle {
        self.values.insert(value)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, slot: SlotHandle) -> Option<f32> {
        self.values.get(slot).copied()
    }

    /// Writes `value` into `slot`. Returns `false` if the slot was removed.
    #[inline]
    pub fn set(&mut self, slot: SlotHandle, value: f32) -> bool {
        match self.values.get_mut(slot) {
            Some(v) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, slot: SlotHandle) -> Option<f32> {
        self.values.remove(slot)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, slot: SlotHandle) -> bool {
        self.values.contains_key(slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn insert_vec2(&mut self, v: Vec2) -> Vec2Slots {
        Vec2Slots {
            x: self.insert(v.x),
            y: self.insert(v.y),
        }
    }

    pub fn insert_vec3(&mut self, v: Vec3) -> Vec3Slots {
        Vec3Slots {
            x: self.insert(v.x),
            y: self.insert(v.y),
            z: self.insert(v.z),
        }
    }

    /// Reads a [`Vec2`] back. `None` if any component slot was removed.
    #[must_use]
    pub fn read_vec2(&self, slots: Vec2Slots) -> Option<Vec2> {
        Some(Vec2::new(self.get(slots.x)?, self.get(slots.y)?))
    }

    #[must_use]
    pub fn read_vec3(&self, slots: Vec3Slots) -> Option<Vec3> {
        Some(Vec3::new(
            self.get(slots.x)?,
            self.get(slots.y)?,
            self.get(slots.z)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_slot_rejects_writes() {
        let mut slots = ValueSlots::new();
        let a = slots.insert(1.0);
        assert!(slots.set(a, 2.0));
        assert_eq!(slots.get(a), Some(2.0));

        assert_eq!(slots.remove(a), Some(2.0));
        assert!(!slots.set(a, 3.0));
        assert_eq!(slots.get(a), None);
    }

    #[test]
    fn stale_handle_does_not_alias_new_slot() {
        let mut slots = ValueSlots::new();
        let a = slots.insert(1.0);
        slots.remove(a);
        let b = slots.insert(5.0);
        assert!(!slots.contains(a));
        assert_eq!(slots.get(b), Some(5.0));
    }

    #[test]
    fn vec3_round_trip() {
        let mut slots = ValueSlots::new();
        let v = slots.insert_vec3(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(slots.read_vec3(v), Some(Vec3::new(1.0, 2.0, 3.0)));
        slots.remove(v.y);
        assert_eq!(slots.read_vec3(v), None);
    }
}
