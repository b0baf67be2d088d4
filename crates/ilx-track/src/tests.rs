//! Unit tests for the track geometry.

use ilx_core::{Platform, Tile};

use crate::{LayoutConfig, LayoutError, SegmentId, TrackLayout};

fn paknam() -> TrackLayout {
    TrackLayout::new(LayoutConfig::default()).unwrap()
}

/// Every adjacent pair of tiles in `path` must be one movement step apart.
fn assert_continuous(path: &[Tile], what: &str) {
    for pair in path.windows(2) {
        assert!(
            pair[1].is_step_from(pair[0]),
            "{what}: {} -> {} is not a single step",
            pair[0],
            pair[1]
        );
    }
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn segment_lengths_match_config() {
        let layout = paknam();
        let cfg = layout.config().clone();
        assert_eq!(layout.segment(SegmentId::DiagonalIn).len(), 10);
        assert_eq!(layout.segment(SegmentId::DiagonalOut).len(), 10);
        assert_eq!(layout.segment(SegmentId::UpperStraight).len(), 25);
        assert_eq!(
            layout.segment(SegmentId::MiddleStraight).len(),
            cfg.station_width() as usize
        );
        // 125/2 - 45/2 + 1 = 62 - 22 + 1 = 41 lead-in tiles.
        assert_eq!(layout.lead_in().len(), 41);
    }

    #[test]
    fn routes_are_continuous_and_duplicate_free() {
        let layout = paknam();
        for platform in Platform::ALL {
            let route = layout.inbound_route(platform);
            assert_continuous(route, "inbound route");
            for pair in route.windows(2) {
                assert_ne!(pair[0], pair[1]);
            }
        }
        assert_continuous(layout.trailing(), "trailing");
    }

    #[test]
    fn both_routes_hand_over_to_trailing() {
        // Each inbound route's last tile must be one step before the first
        // trailing tile, so an outbound path is continuous end to end.
        let layout = paknam();
        let first_trailing = layout.trailing()[0];
        for platform in Platform::ALL {
            let last = *layout.inbound_route(platform).last().unwrap();
            assert!(
                first_trailing.is_step_from(last),
                "{platform}: {last} does not hand over to {first_trailing}"
            );
        }
    }

    #[test]
    fn route_lengths() {
        // Both routes traverse the same number of tiles: lead-in + station
        // footprint.  The top route trades straight tiles for diagonals.
        let layout = paknam();
        assert_eq!(
            layout.inbound_route(Platform::P1).len(),
            layout.inbound_route(Platform::P2).len()
        );
        assert_eq!(layout.inbound_route(Platform::P2).len(), 41 + 45);
    }

    #[test]
    fn upper_platform_sits_above_main_line() {
        let layout = paknam();
        let main_row = layout.config().main_row as i32;
        let diag = layout.config().diagonal_len as i32;
        for tile in layout.platform_straight(Platform::P1) {
            assert_eq!(tile.row, main_row - diag);
        }
        for tile in layout.platform_straight(Platform::P2) {
            assert_eq!(tile.row, main_row);
        }
    }

    #[test]
    fn deterministic_reconstruction() {
        let a = paknam();
        let b = paknam();
        for id in SegmentId::ALL {
            assert_eq!(a.segment(id), b.segment(id));
        }
        for platform in Platform::ALL {
            assert_eq!(a.inbound_route(platform), b.inbound_route(platform));
        }
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn station_wider_than_map_is_rejected() {
        let cfg = LayoutConfig { map_width: 40, ..LayoutConfig::default() };
        assert!(matches!(
            TrackLayout::new(cfg),
            Err(LayoutError::StationTooWide { station: 45, map: 40 })
        ));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let cfg = LayoutConfig { platform_len: 0, ..LayoutConfig::default() };
        assert!(matches!(
            TrackLayout::new(cfg),
            Err(LayoutError::ZeroSize { name: "platform_len" })
        ));
    }

    #[test]
    fn diagonal_taller_than_main_row_is_rejected() {
        let cfg = LayoutConfig { main_row: 8, ..LayoutConfig::default() };
        assert!(matches!(
            TrackLayout::new(cfg),
            Err(LayoutError::DiagonalOffMap { row: 8, diag: 10 })
        ));
    }

    #[test]
    fn non_finite_tile_size_is_rejected() {
        let cfg = LayoutConfig { tile_size: f32::NAN, ..LayoutConfig::default() };
        assert!(matches!(TrackLayout::new(cfg), Err(LayoutError::BadTileSize(_))));
    }
}

#[cfg(test)]
mod departure {
    use super::*;

    #[test]
    fn path_resumes_from_head_tile() {
        let layout = paknam();
        let exit = layout.exit_segment(Platform::P1);
        let head = exit[5];
        let path = layout.departure_path(Platform::P1, head);
        assert_eq!(path[0], head);
        assert_eq!(path.len(), exit.len() - 5 + layout.trailing().len());
        assert_continuous(&path, "departure path");
    }

    #[test]
    fn head_at_last_exit_tile_leaves_only_trailing_ahead() {
        let layout = paknam();
        let exit = layout.exit_segment(Platform::P2);
        let head = *exit.last().unwrap();
        let path = layout.departure_path(Platform::P2, head);
        assert_eq!(path.len(), 1 + layout.trailing().len());
    }

    #[test]
    fn unknown_head_falls_back_to_trailing() {
        let layout = paknam();
        let nowhere = Tile::new(-5, -5);
        let path = layout.departure_path(Platform::P1, nowhere);
        assert_eq!(path, layout.trailing().to_vec());
    }
}
