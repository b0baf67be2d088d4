//! `ilx-track` — fixed track geometry of the two-platform station.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`layout`] | `LayoutConfig`, `TrackLayout`, `SegmentId`                |
//! | [`error`]  | `LayoutError`, `LayoutResult<T>`                          |
//!
//! # Geometry model
//!
//! The station sits on a uniform tile grid.  A single main line runs along
//! one row; the upper platform loop branches off it through two diagonal
//! segments:
//!
//! ```text
//!            ┌── diagonal-in ── upper straight ── diagonal-out ──┐
//! lead-in ───┤                                                   ├─── trailing
//!            └────────────── middle straight ────────────────────┘
//! ```
//!
//! Construction is pure and deterministic: the same [`LayoutConfig`] always
//! yields identical coordinate sequences, so geometry can be reproduced
//! exactly in tests.  Segments are half-open and non-overlapping — composite
//! routes contain no duplicated tile, and each segment's length equals its
//! nominal size parameter (the interlocking's stop-index arithmetic depends
//! on this).

pub mod error;
pub mod layout;

#[cfg(test)]
mod tests;

pub use error::{LayoutError, LayoutResult};
pub use layout::{LayoutConfig, SegmentId, TrackLayout};
