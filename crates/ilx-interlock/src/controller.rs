//! The route-locking state machine.

use ilx_core::{Platform, TrainState};
use ilx_track::TrackLayout;

use crate::{InterlockError, InterlockResult, RouteLock};

/// Lock, occupancy, and last-used-platform state for the interlocking.
///
/// `RouteController` owns the arbitration rules; it never moves the train
/// itself.  The motion engine calls back into it at movement boundaries
/// ([`clear`][Self::clear], [`mark_occupied`][Self::mark_occupied],
/// [`mark_vacated`][Self::mark_vacated]).
#[derive(Debug, Default)]
pub struct RouteController {
    lock: Option<RouteLock>,
    /// Indexed by `Platform::index()`.
    occupied: [bool; 2],
    /// The platform the current or most recent movement is using.
    last_platform: Option<Platform>,
}

impl RouteController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn lock(&self) -> Option<RouteLock> {
        self.lock
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    #[inline]
    pub fn occupied(&self, platform: Platform) -> bool {
        self.occupied[platform.index()]
    }

    #[inline]
    pub fn last_platform(&self) -> Option<Platform> {
        self.last_platform
    }

    // ── Route requests ────────────────────────────────────────────────────

    /// Lock an inbound route to `platform` and return the stop index within
    /// that platform's composite path.
    ///
    /// The stop index places the train's nose at the platform mid-point plus
    /// half its own length — the head coordinate leads the rest of the
    /// train, so the extra half-length centers the body on the platform:
    ///
    /// ```text
    /// stop = lead-in + diagonal-in (P1 only) + straight/2 + train/2
    /// ```
    ///
    /// Fails with [`InterlockError::Locked`] if any lock is held and
    /// [`InterlockError::Occupied`] if the platform already holds a train.
    pub fn request_inbound(
        &mut self,
        platform: Platform,
        layout: &TrackLayout,
    ) -> InterlockResult<usize> {
        if let Some(lock) = self.lock {
            return Err(InterlockError::Locked(lock));
        }
        if self.occupied(platform) {
            return Err(InterlockError::Occupied(platform));
        }

        let approach = match platform {
            Platform::P1 => layout.lead_in().len() + layout.diagonal_in().len(),
            Platform::P2 => layout.lead_in().len(),
        };
        let stop_index = approach
            + layout.platform_straight(platform).len() / 2
            + layout.config().train_len as usize / 2;

        self.lock = Some(RouteLock::Inbound(platform));
        self.last_platform = Some(platform);
        Ok(stop_index)
    }

    /// Lock an outbound route from `platform`.
    ///
    /// Fails with [`InterlockError::Locked`] if any lock is held,
    /// [`InterlockError::NotOccupied`] if the platform is empty, and
    /// [`InterlockError::WrongState`] unless the train is in station.
    pub fn request_outbound(
        &mut self,
        platform: Platform,
        train_state: TrainState,
    ) -> InterlockResult<()> {
        if let Some(lock) = self.lock {
            return Err(InterlockError::Locked(lock));
        }
        if !self.occupied(platform) {
            return Err(InterlockError::NotOccupied(platform));
        }
        if train_state != TrainState::InStation {
            return Err(InterlockError::WrongState(train_state));
        }

        self.lock = Some(RouteLock::Outbound(platform));
        self.last_platform = Some(platform);
        Ok(())
    }

    // ── Movement-boundary callbacks ───────────────────────────────────────

    /// Release the lock.  Called when a train reaches its stop index or
    /// fully departs.
    pub fn clear(&mut self) {
        self.lock = None;
    }

    /// Record a stopped train at `platform`.
    pub fn mark_occupied(&mut self, platform: Platform) {
        self.occupied[platform.index()] = true;
    }

    /// Record that `platform` no longer holds a train.
    pub fn mark_vacated(&mut self, platform: Platform) {
        self.occupied[platform.index()] = false;
    }

    /// Seize the interlocking for an emergency stop: the emergency lock is
    /// set unconditionally and all occupancy is cleared.
    pub fn set_emergency(&mut self) {
        self.lock = Some(RouteLock::Emergency);
        self.occupied = [false, false];
    }
}
