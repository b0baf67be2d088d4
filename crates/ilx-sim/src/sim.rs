//! The `StationSim` struct: command surface, query surface, and time.

use ilx_core::{Platform, Tick, TrainId, TrainState};
use ilx_interlock::{signal_aspects, RouteController, RouteLock};
use ilx_motion::{MotionEngine, MotionError, TickOutcome};
use ilx_track::{LayoutConfig, TrackLayout};

use crate::scheduler::{Task, TaskQueue};
use crate::sink::{EventKind, Logger, RenderSink, TrackColor, TrainColor};
use crate::{SimError, SimResult};

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Timing parameters for the simulation.
///
/// Neither value is a correctness parameter; they only set the cadence of
/// the tick chain and the emergency recovery delay.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Time units between motion ticks.
    pub tick_interval: u64,
    /// Delay before the emergency reset task runs.
    pub emergency_reset_delay: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            tick_interval: 70,
            emergency_reset_delay: 2000,
        }
    }
}

// ── StationSim ────────────────────────────────────────────────────────────────

/// The simulation aggregate.
///
/// `StationSim` exclusively owns all simulation state — layout, route
/// controller, motion engine, task queue, and the current tick.  External
/// layers mutate it only through the command surface and read it only
/// through the query surface; the render and log sinks receive copies and
/// events, never references they could mutate through.
pub struct StationSim<R: RenderSink, L: Logger> {
    layout: TrackLayout,
    params: SimParams,

    interlock: RouteController,
    motion: MotionEngine,

    /// Pending delayed tasks, drained in tick order by [`advance`][Self::advance].
    queue: TaskQueue,
    now: Tick,

    /// Stop index granted with the current inbound lock, consumed by the
    /// arrival trigger.
    pending_stop: Option<usize>,

    render: R,
    logger: L,
}

impl<R: RenderSink, L: Logger> StationSim<R, L> {
    /// Build the layout and an idle simulation at tick 0.
    ///
    /// Draws the base tracks and the all-red signal state into `render`
    /// before returning.
    pub fn new(
        config: LayoutConfig,
        params: SimParams,
        render: R,
        logger: L,
    ) -> SimResult<Self> {
        let layout = TrackLayout::new(config)?;
        let mut sim = Self {
            layout,
            params,
            interlock: RouteController::new(),
            motion: MotionEngine::new(),
            queue: TaskQueue::new(),
            now: Tick::ZERO,
            pending_stop: None,
            render,
            logger,
        };
        sim.logger.log(sim.now, EventKind::Sim, "simulator initialized");
        sim.render.draw_base_tracks(&sim.layout);
        for platform in Platform::ALL {
            sim.render.set_platform_indicator(platform, TrackColor::Idle);
        }
        sim.push_signals();
        Ok(sim)
    }

    // ── Query surface ─────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    #[inline]
    pub fn train_state(&self) -> TrainState {
        self.motion.state()
    }

    #[inline]
    pub fn route_lock(&self) -> Option<RouteLock> {
        self.interlock.lock()
    }

    #[inline]
    pub fn platform_occupied(&self, platform: Platform) -> bool {
        self.interlock.occupied(platform)
    }

    #[inline]
    pub fn current_train_id(&self) -> Option<TrainId> {
        self.motion.current_train_id()
    }

    #[inline]
    pub fn last_platform(&self) -> Option<Platform> {
        self.interlock.last_platform()
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// The render sink, for inspection after a run.
    pub fn render(&self) -> &R {
        &self.render
    }

    /// The logger, for inspection after a run.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// The logger, mutably — backends with buffered writers need this to
    /// flush and surface stored errors after a run.
    pub fn logger_mut(&mut self) -> &mut L {
        &mut self.logger
    }

    // ── Command surface ───────────────────────────────────────────────────

    /// Lock an inbound route to `platform`.
    pub fn request_inbound_route(&mut self, platform: Platform) -> SimResult<()> {
        match self.interlock.request_inbound(platform, &self.layout) {
            Ok(stop_index) => {
                self.pending_stop = Some(stop_index);
                self.push_signals();
                self.logger.log(
                    self.now,
                    EventKind::System,
                    &format!("route set: inbound to {platform}; system locked"),
                );
                Ok(())
            }
            Err(e) => Err(self.reject(e.into())),
        }
    }

    /// Lock an outbound route from `platform` and immediately begin the
    /// departure sequence.
    pub fn request_outbound_route(&mut self, platform: Platform) -> SimResult<()> {
        match self
            .interlock
            .request_outbound(platform, self.motion.state())
        {
            Ok(()) => {
                self.push_signals();
                self.logger.log(
                    self.now,
                    EventKind::System,
                    &format!("route set: outbound from {platform}; system locked"),
                );
                self.start_departure()
            }
            Err(e) => Err(self.reject(e.into())),
        }
    }

    /// Bring a new train into the system on the locked inbound route.
    pub fn trigger_arrival(&mut self) -> SimResult<()> {
        let Some(stop_index) = self.pending_stop else {
            return Err(self.reject(MotionError::NoInboundRoute.into()));
        };
        let Some(lock @ RouteLock::Inbound(_)) = self.interlock.lock() else {
            return Err(self.reject(MotionError::NoInboundRoute.into()));
        };
        match self
            .motion
            .start_arrival(&self.interlock, &self.layout, stop_index)
        {
            Ok(id) => {
                self.pending_stop = None;
                self.logger.log(
                    self.now,
                    EventKind::Train,
                    &format!("{id} arriving on route {lock}"),
                );
                // First tick runs immediately; the chain continues on the
                // task queue.
                self.motion_tick();
                Ok(())
            }
            Err(e) => Err(self.reject(e.into())),
        }
    }

    /// Emergency stop: unconditional, from any state, cannot fail.
    ///
    /// Halts motion, seizes the emergency lock, clears occupancy and the
    /// train visual, and schedules the delayed reset.  Already-queued motion
    /// ticks are left in place — the engine ignores them while in emergency.
    pub fn trigger_emergency_stop(&mut self) {
        self.logger.log(
            self.now,
            EventKind::Emergency,
            "all signals red; train movement halted",
        );
        self.motion.halt_emergency();
        self.interlock.set_emergency();
        self.pending_stop = None;

        self.render.draw_train(&[], TrainColor::Stopped);
        for platform in Platform::ALL {
            self.render.set_platform_indicator(platform, TrackColor::Idle);
        }
        self.push_signals();

        self.queue.push(
            self.now + self.params.emergency_reset_delay,
            Task::EmergencyReset,
        );
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Advance simulated time by `dt` units, dispatching every task that
    /// falls due, strictly in tick order.
    pub fn advance(&mut self, dt: u64) {
        let target = self.now + dt;
        while let Some(tick) = self.queue.next_tick() {
            if tick > target {
                break;
            }
            self.now = tick;
            if let Some(tasks) = self.queue.drain_tick(tick) {
                for task in tasks {
                    self.dispatch(task);
                }
            }
        }
        self.now = target;
    }

    /// Advance until no tasks remain queued.
    pub fn run_until_idle(&mut self) {
        while let Some(tick) = self.queue.next_tick() {
            self.advance(tick.since(self.now));
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn dispatch(&mut self, task: Task) {
        match task {
            Task::MotionTick => self.motion_tick(),
            Task::EmergencyReset => self.emergency_reset(),
        }
    }

    /// One motion step plus its render/log side effects and, if the chain
    /// continues, the next tick's scheduling.
    fn motion_tick(&mut self) {
        let outcome = self.motion.step(&mut self.interlock);
        match outcome {
            TickOutcome::Advanced | TickOutcome::Draining => {
                self.draw_train();
                self.queue
                    .push(self.now + self.params.tick_interval, Task::MotionTick);
            }
            TickOutcome::Stopped { train, platform } => {
                self.draw_train();
                self.render
                    .set_platform_indicator(platform, TrackColor::Occupied);
                self.push_signals();
                self.logger.log(
                    self.now,
                    EventKind::Train,
                    &format!("{train} stopped at {platform}; route unlocked"),
                );
            }
            TickOutcome::Departed { train, platform } => {
                self.draw_train();
                self.render.set_platform_indicator(platform, TrackColor::Idle);
                self.push_signals();
                self.logger.log(
                    self.now,
                    EventKind::Train,
                    &format!("{train} has left {platform}; map clear"),
                );
            }
            TickOutcome::Halted => {
                self.logger.log(
                    self.now,
                    EventKind::Train,
                    "movement halted by emergency stop",
                );
            }
            TickOutcome::Idle => {}
        }
    }

    fn start_departure(&mut self) -> SimResult<()> {
        let Some(RouteLock::Outbound(platform)) = self.interlock.lock() else {
            return Err(self.reject(MotionError::NoOutboundRoute.into()));
        };
        match self.motion.start_departure(&self.interlock, &self.layout) {
            Ok(id) => {
                self.render.set_platform_indicator(platform, TrackColor::Idle);
                self.logger.log(
                    self.now,
                    EventKind::Train,
                    &format!("{id} departing from {platform}"),
                );
                self.motion_tick();
                Ok(())
            }
            Err(e) => Err(self.reject(e.into())),
        }
    }

    fn emergency_reset(&mut self) {
        // A stray reset task after state already moved on is ignored.
        if self.motion.state() != TrainState::Emergency {
            return;
        }
        self.motion.reset_from_emergency();
        self.interlock.clear();
        self.push_signals();
        self.logger
            .log(self.now, EventKind::System, "system resetting from emergency");
    }

    /// Redraw the occupied window in the state-appropriate color.
    fn draw_train(&mut self) {
        let color = if self.motion.state().is_moving() {
            TrainColor::Moving
        } else {
            TrainColor::Stopped
        };
        let tiles = self.motion.occupied_tiles();
        self.render.draw_train(&tiles, color);
    }

    /// Re-derive all four signal aspects from the current lock.
    fn push_signals(&mut self) {
        for (id, aspect) in signal_aspects(self.interlock.lock()) {
            self.render.set_signal(id, aspect);
        }
    }

    /// Log a rejected command and hand the error back unchanged.
    fn reject(&mut self, err: SimError) -> SimError {
        self.logger
            .log(self.now, EventKind::Error, &err.to_string());
        err
    }
}
