//! Track-geometry error type.

use thiserror::Error;

/// Errors produced when validating a [`LayoutConfig`][crate::LayoutConfig].
///
/// These are construction-time failures: an invalid geometry fails fast at
/// startup and is never recoverable at runtime.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("station footprint of {station} tiles does not fit a {map}-tile map")]
    StationTooWide { station: u32, map: u32 },

    #[error("{name} must be positive")]
    ZeroSize { name: &'static str },

    #[error("main row {row} leaves no room above it for a {diag}-tile diagonal")]
    DiagonalOffMap { row: u32, diag: u32 },

    #[error("tile size {0} is not a positive finite number")]
    BadTileSize(f32),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
