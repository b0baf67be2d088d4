//! `ilx-motion` — the motion engine advancing the single train per tick.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`window`] | `OccupiedWindow` — fixed-capacity sliding tile window    |
//! | [`train`]  | `Train` — identity, active path, head index, window      |
//! | [`engine`] | `MotionEngine` — arrival/departure and the tick step     |
//! | [`error`]  | `MotionError`, `MotionResult<T>`                         |
//!
//! # Movement model
//!
//! The engine is a pure state-transition step: [`MotionEngine::step`]
//! mutates state and reports a [`TickOutcome`], and the *caller* decides
//! when the next step runs (by scheduling another tick) and what to render
//! or log.  Separating "what changes" from "when it is invoked" makes every
//! transition testable without a timer.
//!
//! Each step falls in one of three regions:
//!
//! 1. **Advancing** — the head index is still inside the active path: the
//!    head tile enters the occupied window (evicting the oldest tile once
//!    the window is full), and an inbound train that has reached its stop
//!    index halts in station.
//! 2. **Draining** — the head has run off the end of the path but the tail
//!    has not: the oldest tile leaves the window each step.
//! 3. **Departed** — the window is empty: the train is destroyed and the
//!    interlocking returns to ready.

pub mod engine;
pub mod error;
pub mod train;
pub mod window;


pub use engine::{MotionEngine, TickOutcome};
pub use error::{MotionError, MotionResult};
pub use train::Train;
pub use window::OccupiedWindow;
