//! `ilx-interlock` — route arbitration for the two-platform station.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`lock`]       | `RouteLock` — the mutual-exclusion token            |
//! | [`controller`] | `RouteController` — lock + occupancy state machine  |
//! | [`signal`]     | `SignalId`, `SignalAspect`, lock → lamp mapping     |
//! | [`error`]      | `InterlockError`, `InterlockResult<T>`              |
//!
//! # Arbitration model
//!
//! At most one route lock exists at any instant; it is the single token
//! preventing two simultaneous movements through the interlocking.  No
//! request ever overrides an existing lock — a second request fails with
//! [`InterlockError::Locked`] until the motion engine clears the lock at a
//! stop or departure boundary.

pub mod controller;
pub mod error;
pub mod lock;
pub mod signal;

#[cfg(test)]
mod tests;

pub use controller::RouteController;
pub use error::{InterlockError, InterlockResult};
pub use lock::RouteLock;
pub use signal::{signal_aspects, SignalAspect, SignalId};
