//! `TaskQueue` — sparse delayed-task queue keyed by tick.
//!
//! # Why this exists
//!
//! The simulation is idle at almost every time unit; only two things ever
//! need to run: the motion engine's next step and the one-shot emergency
//! reset.  Rather than polling every unit, each tick of interest registers
//! itself here and the runner jumps straight from one due tick to the next.
//!
//! `BTreeMap` keeps due ticks sorted, so draining in time order is a
//! first-key lookup.  The queue holds at most a handful of entries (one
//! pending motion tick plus at most one emergency reset), so the constant
//! cost is negligible.

use std::collections::BTreeMap;

use ilx_core::Tick;

/// A scheduled unit of work, dispatched by the simulation runner.
///
/// Tasks are plain data rather than callbacks: the runner owns all state, so
/// dispatch is a `match`, and a stale task (one queued before an emergency)
/// is harmless by construction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Task {
    /// One step of the motion engine.
    MotionTick,
    /// The delayed return from emergency to ready.
    EmergencyReset,
}

/// A priority queue mapping ticks → tasks due at that tick.
#[derive(Default, Debug)]
pub struct TaskQueue {
    inner: BTreeMap<Tick, Vec<Task>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run at `tick`.
    pub fn push(&mut self, tick: Tick, task: Task) {
        self.inner.entry(tick).or_default().push(task);
        self.total += 1;
    }

    /// Remove and return all tasks due at exactly `tick`.
    ///
    /// Returns `None` if nothing is queued for that tick.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Task>> {
        let tasks = self.inner.remove(&tick)?;
        self.total -= tasks.len();
        Some(tasks)
    }

    /// The earliest tick with at least one queued task, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued tasks across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
