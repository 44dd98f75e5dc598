//! Hand module - the player's pool of placeable shapes
//!
//! The hand is an ordered sequence of shape ids (order is display-only, not
//! gameplay-significant). Shapes are drawn independently and uniformly at
//! random, with replacement, from the full catalog. The hand refills back to
//! capacity only once it reaches exactly zero shapes.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{ShapeId, HAND_CAPACITY};

/// Draw `n` shape ids from the catalog, uniformly with replacement.
///
/// Pure with respect to hand state; all randomness comes from the injected
/// `rng`. `n` must not exceed [`HAND_CAPACITY`].
pub fn draw(rng: &mut SimpleRng, n: usize) -> ArrayVec<ShapeId, HAND_CAPACITY> {
    debug_assert!(n <= HAND_CAPACITY);
    let mut drawn = ArrayVec::new();
    for _ in 0..n.min(HAND_CAPACITY) {
        let idx = rng.next_range(ShapeId::ALL.len() as u32) as usize;
        drawn.push(ShapeId::ALL[idx]);
    }
    drawn
}

/// The player's current hand of shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    slots: ArrayVec<ShapeId, HAND_CAPACITY>,
}

impl Hand {
    /// Create an empty hand
    pub fn new() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Create the starting hand: [`HAND_CAPACITY`] random shapes
    pub fn starting(rng: &mut SimpleRng) -> Self {
        Self {
            slots: draw(rng, HAND_CAPACITY),
        }
    }

    /// Create a hand with the given shapes (at most [`HAND_CAPACITY`]).
    pub fn from_ids(ids: &[ShapeId]) -> Self {
        debug_assert!(ids.len() <= HAND_CAPACITY);
        let mut slots = ArrayVec::new();
        for &id in ids.iter().take(HAND_CAPACITY) {
            slots.push(id);
        }
        Self { slots }
    }

    /// The shapes currently in hand, in display order
    pub fn slots(&self) -> &[ShapeId] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.slots.contains(&id)
    }

    /// Remove the first occurrence of `id`; no-op if absent.
    ///
    /// Returns whether a shape was removed. Duplicates are untouched beyond
    /// the single removed instance.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        match self.slots.iter().position(|&s| s == id) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Refill the hand to capacity, but only if it is completely empty.
    ///
    /// Returns whether a refill happened.
    pub fn refill_if_empty(&mut self, rng: &mut SimpleRng) -> bool {
        if !self.slots.is_empty() {
            return false;
        }
        self.slots = draw(rng, HAND_CAPACITY);
        true
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
