//! The occupied-tile sliding window.

use std::collections::VecDeque;

use ilx_core::Tile;

/// The ordered set of tiles a train's body currently covers, oldest (tail)
/// first, newest (head) last.
///
/// Capacity is fixed at the train length: pushing into a full window evicts
/// the tail tile, so `len() <= capacity()` holds after every operation.
/// This is a fixed-capacity sliding window, not an unbounded queue.
#[derive(Clone, Debug)]
pub struct OccupiedWindow {
    tiles: VecDeque<Tile>,
    capacity: usize,
}

impl OccupiedWindow {
    /// # Panics
    /// Panics in debug mode if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "train length must be positive");
        Self {
            tiles: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Advance the head onto `tile`, returning the evicted tail tile if the
    /// window was already at capacity.
    pub fn push(&mut self, tile: Tile) -> Option<Tile> {
        self.tiles.push_back(tile);
        if self.tiles.len() > self.capacity {
            self.tiles.pop_front()
        } else {
            None
        }
    }

    /// Drop the tail tile (draining region), if any.
    pub fn pop_tail(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// The newest tile — the train's head position.
    pub fn head(&self) -> Option<Tile> {
        self.tiles.back().copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Contiguous copy of the window, tail first — the shape render sinks
    /// consume.
    pub fn snapshot(&self) -> Vec<Tile> {
        self.tiles.iter().copied().collect()
    }
}
