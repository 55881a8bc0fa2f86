//! Fixed-capacity arena of game objects.
//!
//! Slots are never compacted: an object dies by clearing its liveness flag and
//! the slot is reused once the spawn cursor scans past it again.

use rand::Rng;

use crate::constants::POOL_CAPACITY;
use crate::entities::{GameObject, SimState};

/// Anything new objects can be spawned into.
pub trait Spawner {
    /// Returns the slot used, or `None` when there was no room.
    fn spawn(&mut self, object: GameObject) -> Option<usize>;
}

/// Handler run when an object that has one overlaps another live object.
/// Returns an effect to spawn, if any.
pub type CollisionResponse = fn(&mut GameObject, &mut GameObject) -> Option<GameObject>;

#[derive(Clone, Debug)]
pub struct EntityPool {
    slots: [GameObject; POOL_CAPACITY],
    cursor: usize,
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityPool {
    pub fn new() -> Self {
        EntityPool {
            slots: [GameObject::VACANT; POOL_CAPACITY],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        POOL_CAPACITY
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|o| o.alive).count()
    }

    pub fn get(&self, slot: usize) -> Option<&GameObject> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut GameObject> {
        self.slots.get_mut(slot)
    }

    /// Live objects with their slot index, in slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, &GameObject)> {
        self.slots.iter().enumerate().filter(|(_, o)| o.alive)
    }

    /// Free every slot.
    pub fn clear(&mut self) {
        for object in self.slots.iter_mut() {
            object.alive = false;
        }
        self.cursor = 0;
    }

    /// Advance every live object by one frame, then let it react to whatever it
    /// overlaps. Objects spawned mid-pass into a later slot are ticked in the
    /// same pass.
    pub fn tick_all<R: Rng>(&mut self, sim: &mut SimState, rng: &mut R) {
        for slot in 0..POOL_CAPACITY {
            if !self.slots[slot].alive {
                continue;
            }

            // The slot still reads as live while its copy is out, so nothing
            // spawned during the update can land on it.
            let mut object = self.slots[slot];
            object.update(self, sim, rng);
            self.slots[slot] = object;

            if let Some(respond) = object.collision_response() {
                self.resolve_collisions(slot, respond);
            }
        }
    }

    fn resolve_collisions(&mut self, slot: usize, respond: CollisionResponse) {
        for other in 0..POOL_CAPACITY {
            if other == slot {
                continue;
            }
            let (this, that) = pair_mut(&mut self.slots, slot, other);
            if !this.alive {
                break;
            }
            if !that.alive || !this.rect.overlaps(&that.rect) {
                continue;
            }
            if let Some(effect) = respond(this, that) {
                self.spawn(effect);
            }
        }
    }
}

impl Spawner for EntityPool {
    fn spawn(&mut self, object: GameObject) -> Option<usize> {
        for step in 0..POOL_CAPACITY {
            let slot = (self.cursor + step) % POOL_CAPACITY;
            if !self.slots[slot].alive {
                self.slots[slot] = object;
                self.cursor = (slot + 1) % POOL_CAPACITY;
                return Some(slot);
            }
        }
        tracing::trace!(?object.kind, "entity pool full, spawn dropped");
        None
    }
}

/// Two distinct mutable slots at once.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
