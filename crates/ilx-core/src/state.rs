//! The single train's lifecycle state machine.

use std::fmt;

/// Lifecycle state of the (at most one) train in the interlocking.
///
/// Exactly one state is active at any instant:
///
/// ```text
/// Ready ──startArrival──▶ Running ──stop index reached──▶ InStation
///   ▲                                                         │
///   │                                              outbound route set
///   └────────── occupied window drains ◀── Leaving ◀──────────┘
/// ```
///
/// `Emergency` is reachable from every state and preempts any in-flight
/// motion; a delayed reset returns the machine to `Ready`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainState {
    /// No train present; the interlocking accepts inbound route requests.
    #[default]
    Ready,
    /// An inbound train is advancing toward its stop index.
    Running,
    /// A train is stopped at a platform awaiting an outbound route.
    InStation,
    /// A departing train is traversing toward (and off) the map edge.
    Leaving,
    /// Emergency stop active; all movement halted until the delayed reset.
    Emergency,
}

impl TrainState {
    /// `true` while the occupied window is being advanced each tick.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, TrainState::Running | TrainState::Leaving)
    }
}

impl fmt::Display for TrainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrainState::Ready => "ready",
            TrainState::Running => "running",
            TrainState::InStation => "in station",
            TrainState::Leaving => "leaving",
            TrainState::Emergency => "emergency",
        };
        f.write_str(s)
    }
}
