//! Motion-engine error type.

use thiserror::Error;

use ilx_core::TrainState;

/// Rejected movement triggers.  State is untouched on every rejection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotionError {
    #[error("cannot start arrival: train state is {0}")]
    NotReady(TrainState),

    #[error("cannot start arrival: no inbound route is locked")]
    NoInboundRoute,

    #[error("cannot start departure: train state is {0}")]
    NotInStation(TrainState),

    #[error("cannot start departure: no outbound route is locked")]
    NoOutboundRoute,
}

pub type MotionResult<T> = Result<T, MotionError>;
