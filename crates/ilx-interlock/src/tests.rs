//! Unit tests for route arbitration and signal aspects.

use ilx_core::{Platform, TrainState};
use ilx_track::{LayoutConfig, TrackLayout};

use crate::{signal_aspects, InterlockError, RouteController, RouteLock, SignalAspect, SignalId};

fn paknam() -> TrackLayout {
    TrackLayout::new(LayoutConfig::default()).unwrap()
}

#[cfg(test)]
mod inbound {
    use super::*;

    #[test]
    fn lock_is_exclusive() {
        let layout = paknam();
        let mut ctl = RouteController::new();
        ctl.request_inbound(Platform::P1, &layout).unwrap();
        assert_eq!(ctl.lock(), Some(RouteLock::Inbound(Platform::P1)));

        // A second request of either kind, for any platform, is rejected
        // until the lock clears.
        for platform in Platform::ALL {
            assert_eq!(
                ctl.request_inbound(platform, &layout),
                Err(InterlockError::Locked(RouteLock::Inbound(Platform::P1)))
            );
            assert_eq!(
                ctl.request_outbound(platform, TrainState::InStation),
                Err(InterlockError::Locked(RouteLock::Inbound(Platform::P1)))
            );
        }

        ctl.clear();
        assert!(ctl.request_inbound(Platform::P2, &layout).is_ok());
    }

    #[test]
    fn occupied_platform_is_rejected() {
        let layout = paknam();
        let mut ctl = RouteController::new();
        ctl.mark_occupied(Platform::P2);
        assert_eq!(
            ctl.request_inbound(Platform::P2, &layout),
            Err(InterlockError::Occupied(Platform::P2))
        );
        // The other platform is still reachable.
        assert!(ctl.request_inbound(Platform::P1, &layout).is_ok());
    }

    #[test]
    fn stop_index_centers_train_on_platform() {
        // P1: 41 lead-in + 10 diagonal + 25/2 + 17/2 = 41 + 10 + 12 + 8.
        let layout = paknam();
        let mut ctl = RouteController::new();
        let stop = ctl.request_inbound(Platform::P1, &layout).unwrap();
        assert_eq!(stop, 41 + 10 + 12 + 8);

        // P2: 41 lead-in + 45/2 + 17/2.
        let mut ctl = RouteController::new();
        let stop = ctl.request_inbound(Platform::P2, &layout).unwrap();
        assert_eq!(stop, 41 + 22 + 8);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let layout = paknam();
        let mut ctl = RouteController::new();
        ctl.mark_occupied(Platform::P1);
        let _ = ctl.request_inbound(Platform::P1, &layout);
        assert_eq!(ctl.lock(), None);
        assert_eq!(ctl.last_platform(), None);
    }
}

#[cfg(test)]
mod outbound {
    use super::*;

    fn controller_with_train_at(platform: Platform) -> RouteController {
        let mut ctl = RouteController::new();
        ctl.mark_occupied(platform);
        ctl
    }

    #[test]
    fn empty_platform_is_rejected() {
        let mut ctl = controller_with_train_at(Platform::P1);
        assert_eq!(
            ctl.request_outbound(Platform::P2, TrainState::InStation),
            Err(InterlockError::NotOccupied(Platform::P2))
        );
        // The rejection leaves the lock untouched.
        assert_eq!(ctl.lock(), None);
    }

    #[test]
    fn requires_in_station() {
        let mut ctl = controller_with_train_at(Platform::P1);
        assert_eq!(
            ctl.request_outbound(Platform::P1, TrainState::Ready),
            Err(InterlockError::WrongState(TrainState::Ready))
        );
    }

    #[test]
    fn grants_outbound_lock() {
        let mut ctl = controller_with_train_at(Platform::P2);
        ctl.request_outbound(Platform::P2, TrainState::InStation).unwrap();
        assert_eq!(ctl.lock(), Some(RouteLock::Outbound(Platform::P2)));
        assert_eq!(ctl.last_platform(), Some(Platform::P2));
    }
}

#[cfg(test)]
mod emergency {
    use super::*;

    #[test]
    fn seizes_lock_and_clears_occupancy() {
        let layout = paknam();
        let mut ctl = RouteController::new();
        ctl.request_inbound(Platform::P1, &layout).unwrap();
        ctl.mark_occupied(Platform::P2);

        ctl.set_emergency();
        assert_eq!(ctl.lock(), Some(RouteLock::Emergency));
        assert!(!ctl.occupied(Platform::P1));
        assert!(!ctl.occupied(Platform::P2));
    }
}

#[cfg(test)]
mod signals {
    use super::*;

    fn aspect_of(aspects: &[(SignalId, SignalAspect)], id: SignalId) -> SignalAspect {
        aspects.iter().find(|(s, _)| *s == id).unwrap().1
    }

    #[test]
    fn unlocked_is_all_red() {
        for (_, aspect) in signal_aspects(None) {
            assert_eq!(aspect, SignalAspect::Red);
        }
    }

    #[test]
    fn inbound_clears_home_only() {
        let aspects = signal_aspects(Some(RouteLock::Inbound(Platform::P2)));
        assert_eq!(aspect_of(&aspects, SignalId::Home), SignalAspect::Green);
        assert_eq!(aspect_of(&aspects, SignalId::DepartureP1), SignalAspect::Red);
        assert_eq!(aspect_of(&aspects, SignalId::DepartureP2), SignalAspect::Red);
        assert_eq!(aspect_of(&aspects, SignalId::Starter), SignalAspect::Red);
    }

    #[test]
    fn outbound_clears_platform_departure_and_starter() {
        let aspects = signal_aspects(Some(RouteLock::Outbound(Platform::P1)));
        assert_eq!(aspect_of(&aspects, SignalId::DepartureP1), SignalAspect::Green);
        assert_eq!(aspect_of(&aspects, SignalId::Starter), SignalAspect::Green);
        assert_eq!(aspect_of(&aspects, SignalId::DepartureP2), SignalAspect::Red);
        assert_eq!(aspect_of(&aspects, SignalId::Home), SignalAspect::Red);
    }

    #[test]
    fn emergency_is_all_red() {
        for (_, aspect) in signal_aspects(Some(RouteLock::Emergency)) {
            assert_eq!(aspect, SignalAspect::Red);
        }
    }
}
