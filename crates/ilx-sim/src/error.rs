//! Orchestrator error type.

use ilx_interlock::InterlockError;
use ilx_motion::MotionError;
use ilx_track::LayoutError;
use thiserror::Error;

/// Errors surfaced by the command surface.
///
/// All variants are recoverable and local: the rejected command leaves the
/// simulation state unchanged, and the rejection is also reported through
/// the [`Logger`][crate::Logger].  Only [`SimError::Layout`] is fatal, and
/// only at construction time.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("track layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("route request rejected: {0}")]
    Interlock(#[from] InterlockError),

    #[error("movement trigger rejected: {0}")]
    Motion(#[from] MotionError),
}

pub type SimResult<T> = Result<T, SimError>;
