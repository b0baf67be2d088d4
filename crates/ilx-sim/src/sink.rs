//! External collaborator contracts: rendering and logging.
//!
//! The core calls into these but never depends on them for correctness —
//! every method is fire-and-forget, all draws are idempotent full redraws
//! (never incremental diffs), and the default implementations are no-ops so
//! implementors only override what they care about.

use std::fmt;

use ilx_core::{Platform, Tick, Tile};
use ilx_interlock::{SignalAspect, SignalId};
use ilx_track::TrackLayout;

// ── Colors ────────────────────────────────────────────────────────────────────

/// Train body color, chosen from the train's state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TrainColor {
    /// Running or leaving.
    Moving,
    /// Stopped in station.
    Stopped,
}

/// Platform indicator track color.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TrackColor {
    /// No train at the platform.
    Idle,
    /// A train is stopped at the platform.
    Occupied,
}

// ── RenderSink ────────────────────────────────────────────────────────────────

/// Consumer of track and train geometry.
///
/// Calls receive tile-grid coordinates; scale them with
/// [`TrackLayout::tile_size`] (or [`Tile::scaled`]) when drawing.
pub trait RenderSink {
    /// Redraw the fixed track geometry.  Called once at startup.
    fn draw_base_tracks(&mut self, _layout: &TrackLayout) {}

    /// Redraw the train as the ordered tile window, tail first.  An empty
    /// slice clears the train visual.
    fn draw_train(&mut self, _tiles: &[Tile], _color: TrainColor) {}

    /// Recolor one platform's indicator track.
    fn set_platform_indicator(&mut self, _platform: Platform, _color: TrackColor) {}

    /// Set one signal lamp's aspect.
    fn set_signal(&mut self, _signal: SignalId, _aspect: SignalAspect) {}
}

/// A [`RenderSink`] that does nothing.  Use for headless runs and tests.
pub struct NoopRender;

impl RenderSink for NoopRender {}

// ── Logger ────────────────────────────────────────────────────────────────────

/// Category tag attached to every log event.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    /// Simulator lifecycle.
    Sim,
    /// Interlocking decisions: routes set, locks cleared, resets.
    System,
    /// Train movement milestones.
    Train,
    /// Rejected commands.
    Error,
    /// Emergency stop.
    Emergency,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Sim => "SIM",
            EventKind::System => "SYS",
            EventKind::Train => "TRAIN",
            EventKind::Error => "ERROR",
            EventKind::Emergency => "EMERGENCY",
        };
        f.write_str(s)
    }
}

/// Consumer of timestamped text events.
///
/// `log` must not fail: implementations swallow backend errors and surface
/// them out-of-band (see `ilx-output`'s `take_error` pattern).
pub trait Logger {
    fn log(&mut self, now: Tick, kind: EventKind, message: &str);
}

/// A [`Logger`] that discards everything.
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&mut self, _now: Tick, _kind: EventKind, _message: &str) {}
}
