//! Interlocking error type.

use thiserror::Error;

use ilx_core::{Platform, TrainState};

use crate::RouteLock;

/// Rejected route requests.
///
/// Every rejection leaves the controller's state untouched — the caller may
/// retry once the offending precondition clears.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterlockError {
    #[error("route already locked: {0}")]
    Locked(RouteLock),

    #[error("platform {0} is occupied")]
    Occupied(Platform),

    #[error("platform {0} is empty")]
    NotOccupied(Platform),

    #[error("train state is {0}, expected in station")]
    WrongState(TrainState),
}

pub type InterlockResult<T> = Result<T, InterlockError>;
