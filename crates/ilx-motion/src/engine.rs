//! The motion engine: arrival, the per-tick step, and departure.

use ilx_core::{Platform, Tile, TrainId, TrainState};
use ilx_interlock::{RouteController, RouteLock};
use ilx_track::TrackLayout;

use crate::{MotionError, MotionResult, Train};

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What one [`MotionEngine::step`] did, and whether the tick chain continues.
///
/// The caller schedules another tick only for `Advanced` and `Draining`;
/// every other outcome terminates the chain.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Emergency preempted the tick; nothing changed.
    Halted,
    /// The head advanced one path index; schedule the next tick.
    Advanced,
    /// The train reached its stop index and is now in station.
    Stopped { train: TrainId, platform: Platform },
    /// The tail shrank by one tile while running off the path end; schedule
    /// the next tick.
    Draining,
    /// The window emptied: the train left the map and was destroyed.
    Departed { train: TrainId, platform: Platform },
    /// No train to move — a stale tick dispatched after the chain ended.
    Idle,
}

impl TickOutcome {
    /// `true` if the caller should schedule a follow-up tick.
    pub fn reschedule(&self) -> bool {
        matches!(self, TickOutcome::Advanced | TickOutcome::Draining)
    }
}

// ── MotionEngine ──────────────────────────────────────────────────────────────

/// Owns the train lifecycle state machine and the (at most one) live
/// [`Train`].
///
/// The engine never schedules anything itself: the orchestrator invokes
/// [`step`][Self::step] at tick boundaries and consults the returned
/// [`TickOutcome`].  Interlocking callbacks (`clear`, `mark_occupied`,
/// `mark_vacated`) fire inside `step` so the lock and occupancy can never
/// disagree with the movement that changed them.
#[derive(Debug)]
pub struct MotionEngine {
    state: TrainState,
    train: Option<Train>,
    /// Path index at which the current inbound movement must halt.
    stop_index: usize,
    /// Next identity to allocate; monotonic, never reused.
    next_id: TrainId,
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self {
            state: TrainState::Ready,
            train: None,
            stop_index: 0,
            next_id: TrainId::FIRST,
        }
    }
}

impl MotionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> TrainState {
        self.state
    }

    pub fn current_train_id(&self) -> Option<TrainId> {
        self.train.as_ref().map(|t| t.id)
    }

    /// Tiles the train body currently covers, tail first.  Empty when no
    /// train is live.
    pub fn occupied_tiles(&self) -> Vec<Tile> {
        self.train
            .as_ref()
            .map(|t| t.window.snapshot())
            .unwrap_or_default()
    }

    // ── Arrival ───────────────────────────────────────────────────────────

    /// Begin an inbound movement on the route held by `interlock`.
    ///
    /// Requires `Ready` and an inbound lock.  Allocates a fresh [`TrainId`],
    /// anchors the train at index 0 of the locked platform's inbound route,
    /// and transitions to `Running`.  `stop_index` is the halt position
    /// computed by the route controller when the route was granted.
    ///
    /// The first tick is *not* taken here; the caller performs it
    /// immediately after, then keeps the chain going per [`TickOutcome`].
    pub fn start_arrival(
        &mut self,
        interlock: &RouteController,
        layout: &TrackLayout,
        stop_index: usize,
    ) -> MotionResult<TrainId> {
        if self.state != TrainState::Ready {
            return Err(MotionError::NotReady(self.state));
        }
        let Some(RouteLock::Inbound(platform)) = interlock.lock() else {
            return Err(MotionError::NoInboundRoute);
        };

        let id = self.next_id;
        self.next_id = self.next_id.next();

        let path = layout.inbound_route(platform).to_vec();
        let train_len = layout.config().train_len as usize;
        self.train = Some(Train::new(id, platform, path, train_len));
        self.stop_index = stop_index;
        self.state = TrainState::Running;
        Ok(id)
    }

    // ── Departure ─────────────────────────────────────────────────────────

    /// Begin the outbound movement for the stopped train.
    ///
    /// Requires `InStation` and an outbound lock.  The remaining path is
    /// reconstructed from the train's current head tile: the tail of the
    /// platform's exit segment from that tile onward, plus the trailing main
    /// line (see [`TrackLayout::departure_path`]).  The head index restarts
    /// at 0 relative to the new path and the state becomes `Leaving`.
    pub fn start_departure(
        &mut self,
        interlock: &RouteController,
        layout: &TrackLayout,
    ) -> MotionResult<TrainId> {
        if self.state != TrainState::InStation {
            return Err(MotionError::NotInStation(self.state));
        }
        let Some(RouteLock::Outbound(platform)) = interlock.lock() else {
            return Err(MotionError::NoOutboundRoute);
        };
        // InStation implies a live train with a non-empty window.
        let Some(train) = self.train.as_mut() else {
            return Err(MotionError::NotInStation(self.state));
        };

        let path = match train.window.head() {
            Some(head) => layout.departure_path(platform, head),
            None => layout.trailing().to_vec(),
        };
        train.platform = platform;
        train.retarget(path);
        self.state = TrainState::Leaving;
        Ok(train.id)
    }

    // ── The tick step ─────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    ///
    /// Entry check: while the state is `Emergency` every pending tick is a
    /// no-op (`Halted`) — emergency preempts in-flight chains without the
    /// scheduler having to cancel anything.
    pub fn step(&mut self, interlock: &mut RouteController) -> TickOutcome {
        if self.state == TrainState::Emergency {
            return TickOutcome::Halted;
        }
        if self.state == TrainState::InStation {
            // The arrival chain ended at the stop tick; a tick landing here
            // is stale and must not move the stopped train.
            return TickOutcome::Idle;
        }
        let Some(train) = self.train.as_mut() else {
            return TickOutcome::Idle;
        };

        if train.head < train.path.len() {
            // Advancing region: the head tile joins the occupied window,
            // evicting the tail once the window is at train length.
            train.window.push(train.path[train.head]);

            if self.state == TrainState::Running && train.head >= self.stop_index {
                // Terminal for this chain: the nose is at the platform
                // mid-point plus half a train length.
                let platform = train.platform;
                let id = train.id;
                self.state = TrainState::InStation;
                interlock.clear();
                interlock.mark_occupied(platform);
                return TickOutcome::Stopped { train: id, platform };
            }

            train.head += 1;
            TickOutcome::Advanced
        } else if !train.window.is_empty() {
            // Draining region: the head has left the path; the tail is
            // still traversing off the end.
            train.window.pop_tail();
            TickOutcome::Draining
        } else {
            // Fully departed: head past the path end, window empty.
            self.finish_departure(interlock)
        }
    }

    fn finish_departure(&mut self, interlock: &mut RouteController) -> TickOutcome {
        let Some(train) = self.train.take() else {
            return TickOutcome::Idle;
        };
        self.state = TrainState::Ready;
        interlock.clear();
        interlock.mark_vacated(train.platform);
        TickOutcome::Departed {
            train: train.id,
            platform: train.platform,
        }
    }

    // ── Emergency ─────────────────────────────────────────────────────────

    /// Halt all movement: destroy the live train, empty the window, and
    /// enter `Emergency`.  Cannot fail, from any state.
    pub fn halt_emergency(&mut self) {
        self.state = TrainState::Emergency;
        self.train = None;
        self.stop_index = 0;
    }

    /// Return to `Ready` after the delayed emergency reset.
    pub fn reset_from_emergency(&mut self) {
        if self.state == TrainState::Emergency {
            self.state = TrainState::Ready;
        }
    }
}
