//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter of abstract simulation
//! time units.  Using an integer tick as the canonical time unit means all
//! scheduling arithmetic is exact (no floating-point drift) and comparisons
//! are O(1).  The mapping to wall-clock time is left to the application; the
//! simulator itself never reads a real clock.
//!
//! Delays ("run the motion step 70 units from now", "reset from emergency
//! 2000 units from now") are plain `u64` offsets added to a `Tick`.

use std::fmt;

/// An absolute simulation time counter, in abstract time units.
///
/// Stored as `u64` to avoid overflow: at one unit per millisecond a `u64`
/// lasts ~585 million years, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` units after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Units elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
