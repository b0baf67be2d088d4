//! Signal lamps and their lock-derived aspects.
//!
//! A signal's aspect is a pure function of the current route lock — signals
//! carry no state of their own.  The orchestrator re-derives and pushes all
//! four aspects to the render sink whenever the lock changes.

use std::fmt;

use ilx_core::Platform;

use crate::RouteLock;

/// The station's four fixed signals.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalId {
    /// Home signal on the lead-in main line, protecting the station throat.
    Home,
    /// Departure signal at the head of platform 1.
    DepartureP1,
    /// Departure signal at the head of platform 2.
    DepartureP2,
    /// Starter signal on the trailing main line.
    Starter,
}

impl SignalId {
    pub const ALL: [SignalId; 4] = [
        SignalId::Home,
        SignalId::DepartureP1,
        SignalId::DepartureP2,
        SignalId::Starter,
    ];

    /// The departure signal guarding `platform`.
    pub fn departure(platform: Platform) -> SignalId {
        match platform {
            Platform::P1 => SignalId::DepartureP1,
            Platform::P2 => SignalId::DepartureP2,
        }
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalId::Home => "S-01 (home)",
            SignalId::DepartureP1 => "S-P1",
            SignalId::DepartureP2 => "S-P2",
            SignalId::Starter => "S-03 (starter)",
        };
        f.write_str(s)
    }
}

/// A two-aspect lamp.  Red is the fail-safe default.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalAspect {
    #[default]
    Red,
    Green,
}

/// Aspect of every signal under `lock`:
///
/// - an inbound lock clears the home signal;
/// - an outbound lock clears that platform's departure signal and the
///   starter;
/// - no lock, or the emergency lock, shows all red.
pub fn signal_aspects(lock: Option<RouteLock>) -> [(SignalId, SignalAspect); 4] {
    let mut aspects = SignalId::ALL.map(|id| (id, SignalAspect::Red));
    match lock {
        Some(RouteLock::Inbound(_)) => {
            aspects[0].1 = SignalAspect::Green; // Home
        }
        Some(RouteLock::Outbound(platform)) => {
            let depart = SignalId::departure(platform);
            for slot in &mut aspects {
                if slot.0 == depart || slot.0 == SignalId::Starter {
                    slot.1 = SignalAspect::Green;
                }
            }
        }
        Some(RouteLock::Emergency) | None => {}
    }
    aspects
}
