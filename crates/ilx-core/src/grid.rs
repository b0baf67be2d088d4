//! Integer grid coordinate type.
//!
//! Track geometry lives on a uniform tile grid.  `Tile` stores the grid
//! position as integers; the pixel-scaled position a renderer needs is
//! produced on demand via [`Tile::scaled`].  Keeping the canonical
//! coordinate integral makes coordinate comparisons exact, which the
//! departure path reconstruction relies on (it locates the train's head
//! tile inside a platform-exit segment by equality).

use std::fmt;

/// A cell of the simulation grid, addressed by column and row.
///
/// Rows grow downward and columns grow rightward, matching the screen
/// convention of the renderer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub col: i32,
    pub row: i32,
}

impl Tile {
    #[inline]
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Pixel-scaled `[x, y]` position of this tile's origin corner.
    ///
    /// `tile_size` is the edge length of one grid cell in render units.
    #[inline]
    pub fn scaled(self, tile_size: f32) -> [f32; 2] {
        [self.col as f32 * tile_size, self.row as f32 * tile_size]
    }

    /// `true` if `other` is reachable from `self` in one movement step:
    /// at most one tile apart on each axis, and not the same tile.
    pub fn is_step_from(self, other: Tile) -> bool {
        let dc = (self.col - other.col).abs();
        let dr = (self.row - other.row).abs();
        dc <= 1 && dr <= 1 && (dc, dr) != (0, 0)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
