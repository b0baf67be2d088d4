//! The route lock token.

use std::fmt;

use ilx_core::Platform;

/// The mutual-exclusion token arbitrating one movement at a time.
///
/// An unlocked interlocking is represented as `Option::<RouteLock>::None`;
/// every held lock is one of these variants, so unparseable lock values are
/// unrepresentable by construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteLock {
    /// An inbound movement toward `Platform` holds the interlocking.
    Inbound(Platform),
    /// An outbound movement from `Platform` holds the interlocking.
    Outbound(Platform),
    /// Emergency stop holds the interlocking until the delayed reset.
    Emergency,
}

impl RouteLock {
    /// The platform this lock routes to or from, if any.
    pub fn platform(self) -> Option<Platform> {
        match self {
            RouteLock::Inbound(p) | RouteLock::Outbound(p) => Some(p),
            RouteLock::Emergency => None,
        }
    }

    #[inline]
    pub fn is_inbound(self) -> bool {
        matches!(self, RouteLock::Inbound(_))
    }

    #[inline]
    pub fn is_outbound(self) -> bool {
        matches!(self, RouteLock::Outbound(_))
    }
}

impl fmt::Display for RouteLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteLock::Inbound(p) => write!(f, "inbound to {p}"),
            RouteLock::Outbound(p) => write!(f, "outbound from {p}"),
            RouteLock::Emergency => write!(f, "emergency"),
        }
    }
}
