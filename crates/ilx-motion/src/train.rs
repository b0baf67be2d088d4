//! Per-train movement state.

use ilx_core::{Platform, Tile, TrainId};

use crate::OccupiedWindow;

/// One train movement: identity, the path being traversed, the head index
/// into that path, and the occupied-tile window trailing the head.
///
/// A `Train` is created on a successful arrival trigger and destroyed once
/// its window empties during departure (or on emergency reset).  The path is
/// replaced wholesale when an outbound route re-anchors the train on its
/// exit path; the head index is always relative to the *current* path.
#[derive(Clone, Debug)]
pub struct Train {
    pub id: TrainId,
    /// The platform this movement serves.
    pub platform: Platform,
    /// The active path; read-only, indices are stable.
    pub path: Vec<Tile>,
    /// Index of the next path coordinate the head will occupy.
    pub head: usize,
    pub window: OccupiedWindow,
}

impl Train {
    pub fn new(id: TrainId, platform: Platform, path: Vec<Tile>, train_len: usize) -> Self {
        Self {
            id,
            platform,
            path,
            head: 0,
            window: OccupiedWindow::new(train_len),
        }
    }

    /// Re-anchor this train on `path` starting from index 0, keeping the
    /// occupied window as-is.  Used when departure swaps in the exit path.
    pub fn retarget(&mut self, path: Vec<Tile>) {
        self.path = path;
        self.head = 0;
    }
}
