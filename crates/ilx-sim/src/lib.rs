//! `ilx-sim` — orchestrator for the two-platform interlocking simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`scheduler`] | `Task`, `TaskQueue` — the delayed-task queue            |
//! | [`sink`]      | `RenderSink`, `Logger` traits and their no-op impls     |
//! | [`sim`]       | `StationSim`, `SimParams` — commands, queries, time     |
//! | [`error`]     | `SimError`, `SimResult<T>`                              |
//!
//! # Run model
//!
//! Execution is single-threaded and cooperative.  Every movement tick and
//! the emergency-reset delay are entries in a [`TaskQueue`]; the owner of a
//! [`StationSim`] advances simulated time explicitly with
//! [`StationSim::advance`] (or [`run_until_idle`][StationSim::run_until_idle]),
//! and due tasks are dispatched strictly in tick order.  A motion tick
//! schedules its successor only after completing its own state mutation, so
//! ticks for a given train never overlap.
//!
//! There is no task cancellation: an emergency makes every already-queued
//! motion tick a no-op through the engine's entry state check, which is
//! cheaper and simpler than tracking handles.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ilx_core::Platform;
//! use ilx_sim::{NoopLogger, NoopRender, SimParams, StationSim};
//! use ilx_track::LayoutConfig;
//!
//! let mut sim = StationSim::new(
//!     LayoutConfig::default(), SimParams::default(), NoopRender, NoopLogger,
//! )?;
//! sim.request_inbound_route(Platform::P1)?;
//! sim.trigger_arrival()?;
//! sim.run_until_idle();
//! assert!(sim.platform_occupied(Platform::P1));
//! ```

pub mod error;
pub mod scheduler;
pub mod sim;
pub mod sink;


pub use error::{SimError, SimResult};
pub use scheduler::{Task, TaskQueue};
pub use sim::{SimParams, StationSim};
pub use sink::{EventKind, Logger, NoopLogger, NoopRender, RenderSink, TrackColor, TrainColor};
