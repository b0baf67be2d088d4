//! Unit tests for ilx-core primitives.

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(70).to_string(), "T70");
    }
}

#[cfg(test)]
mod grid {
    use crate::Tile;

    #[test]
    fn scaled_position() {
        let t = Tile::new(3, 40);
        assert_eq!(t.scaled(10.0), [30.0, 400.0]);
    }

    #[test]
    fn step_adjacency() {
        let t = Tile::new(5, 5);
        assert!(t.is_step_from(Tile::new(6, 5)));
        assert!(t.is_step_from(Tile::new(6, 4))); // diagonal step
        assert!(!t.is_step_from(Tile::new(5, 5))); // same tile
        assert!(!t.is_step_from(Tile::new(7, 5))); // two columns away
    }
}

#[cfg(test)]
mod ids {
    use crate::{Platform, TrainId};

    #[test]
    fn train_ids_are_monotonic() {
        let a = TrainId::FIRST;
        let b = a.next();
        assert!(b > a);
        assert_eq!(a, TrainId(100));
        assert_eq!(b, TrainId(101));
    }

    #[test]
    fn platform_index_and_other() {
        assert_eq!(Platform::P1.index(), 0);
        assert_eq!(Platform::P2.index(), 1);
        assert_eq!(Platform::P1.other(), Platform::P2);
    }

    #[test]
    fn display() {
        assert_eq!(TrainId(100).to_string(), "train 100");
        assert_eq!(Platform::P2.to_string(), "P2");
    }
}

#[cfg(test)]
mod state {
    use crate::TrainState;

    #[test]
    fn moving_states() {
        assert!(TrainState::Running.is_moving());
        assert!(TrainState::Leaving.is_moving());
        assert!(!TrainState::Ready.is_moving());
        assert!(!TrainState::InStation.is_moving());
        assert!(!TrainState::Emergency.is_moving());
    }

    #[test]
    fn default_is_ready() {
        assert_eq!(TrainState::default(), TrainState::Ready);
    }
}
