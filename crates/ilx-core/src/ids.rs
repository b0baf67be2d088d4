//! Train and platform identifiers.

use std::fmt;

// ── TrainId ───────────────────────────────────────────────────────────────────

/// Identity of one simulated train movement.
///
/// Allocated from a monotonically increasing counter and never reused, so a
/// logged `TrainId` always refers to exactly one arrival.  The counter starts
/// at 100 to keep ids visually distinct from platform numbers in log output.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainId(pub u64);

impl TrainId {
    /// The first id ever allocated.
    pub const FIRST: TrainId = TrainId(100);

    /// The id that follows `self` in allocation order.
    #[inline]
    pub fn next(self) -> TrainId {
        TrainId(self.0 + 1)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "train {}", self.0)
    }
}

// ── Platform ──────────────────────────────────────────────────────────────────

/// One of the station's two platforms.
///
/// `P1` is the upper platform reached via the diagonal loop; `P2` is the
/// lower platform on the straight main line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    P1,
    P2,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::P1, Platform::P2];

    /// Zero-based index, for direct use with per-platform arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Platform::P1 => 0,
            Platform::P2 => 1,
        }
    }

    /// The other platform.
    #[inline]
    pub fn other(self) -> Platform {
        match self {
            Platform::P1 => Platform::P2,
            Platform::P2 => Platform::P1,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::P1 => write!(f, "P1"),
            Platform::P2 => write!(f, "P2"),
        }
    }
}
