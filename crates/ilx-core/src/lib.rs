//! `ilx-core` — foundational types for the `ilx` interlocking simulator.
//!
//! This crate is a dependency of every other `ilx-*` crate.  It intentionally
//! has no `ilx-*` dependencies and no required external ones (only optional
//! `serde`).  Errors live with the layer that produces them; no operation
//! here can fail.
//!
//! # What lives here
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`grid`]  | `Tile` — integer grid coordinate                |
//! | [`time`]  | `Tick` — simulation time counter                |
//! | [`ids`]   | `TrainId`, `Platform`                           |
//! | [`state`] | `TrainState` — the single train's state machine |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod grid;
pub mod ids;
pub mod state;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use grid::Tile;
pub use ids::{Platform, TrainId};
pub use state::TrainState;
pub use time::Tick;
