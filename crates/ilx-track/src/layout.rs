//! Station layout construction and route composition.

use ilx_core::{Platform, Tile};

use crate::{LayoutError, LayoutResult};

// ── LayoutConfig ──────────────────────────────────────────────────────────────

/// Size parameters for the station geometry.
///
/// All tile counts are in grid cells; `tile_size` is the render scale passed
/// through to sinks and never affects simulation arithmetic.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Edge length of one grid cell in render units.
    pub tile_size: f32,

    /// Total map width in tiles.
    pub map_width: u32,

    /// Grid row of the main line (rows grow downward; the upper platform
    /// sits `diagonal_len` rows above this).
    pub main_row: u32,

    /// Length in tiles of each diagonal branch segment.
    pub diagonal_len: u32,

    /// Length in tiles of each platform straight.
    pub platform_len: u32,

    /// Train length in tiles — the capacity of the occupied window, and the
    /// overrun allowed past the map edge so a departing train drains fully.
    pub train_len: u32,
}

impl Default for LayoutConfig {
    /// The Paknam station scenario: 125-tile map, 10-tile diagonals,
    /// 25-tile platforms, 17-tile train.
    fn default() -> Self {
        Self {
            tile_size: 10.0,
            map_width: 125,
            main_row: 40,
            diagonal_len: 10,
            platform_len: 25,
            train_len: 17,
        }
    }
}

impl LayoutConfig {
    /// Combined station footprint: diagonal in, platform straight, diagonal out.
    #[inline]
    pub fn station_width(&self) -> u32 {
        2 * self.diagonal_len + self.platform_len
    }

    fn validate(&self) -> LayoutResult<()> {
        for (name, value) in [
            ("map_width", self.map_width),
            ("diagonal_len", self.diagonal_len),
            ("platform_len", self.platform_len),
            ("train_len", self.train_len),
        ] {
            if value == 0 {
                return Err(LayoutError::ZeroSize { name });
            }
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(LayoutError::BadTileSize(self.tile_size));
        }
        if self.station_width() >= self.map_width {
            return Err(LayoutError::StationTooWide {
                station: self.station_width(),
                map: self.map_width,
            });
        }
        if self.main_row <= self.diagonal_len {
            return Err(LayoutError::DiagonalOffMap {
                row: self.main_row,
                diag: self.diagonal_len,
            });
        }
        Ok(())
    }
}

// ── SegmentId ─────────────────────────────────────────────────────────────────

/// Names of the six fixed track segments, in west-to-east order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentId {
    LeadIn,
    DiagonalIn,
    UpperStraight,
    DiagonalOut,
    MiddleStraight,
    Trailing,
}

impl SegmentId {
    pub const ALL: [SegmentId; 6] = [
        SegmentId::LeadIn,
        SegmentId::DiagonalIn,
        SegmentId::UpperStraight,
        SegmentId::DiagonalOut,
        SegmentId::MiddleStraight,
        SegmentId::Trailing,
    ];
}

// ── TrackLayout ───────────────────────────────────────────────────────────────

/// The station's full coordinate geometry, computed once from a
/// [`LayoutConfig`] and read-only afterwards.
///
/// Segment tiles and composite routes are materialized at construction so
/// path indices are stable references for the lifetime of the layout —
/// stop-index and departure-resume calculations index into these vectors.
#[derive(Clone, Debug)]
pub struct TrackLayout {
    config: LayoutConfig,

    lead_in: Vec<Tile>,
    diagonal_in: Vec<Tile>,
    upper_straight: Vec<Tile>,
    diagonal_out: Vec<Tile>,
    middle_straight: Vec<Tile>,
    trailing: Vec<Tile>,

    /// lead-in + diagonal-in + upper straight + diagonal-out.
    route_top: Vec<Tile>,
    /// lead-in + middle straight.
    route_bottom: Vec<Tile>,
    /// upper straight + diagonal-out — where a P1 train stands when stopped.
    exit_top: Vec<Tile>,
}

impl TrackLayout {
    /// Compute the full geometry.  Fails fast with a [`LayoutError`] if the
    /// station does not fit the configured map.
    pub fn new(config: LayoutConfig) -> LayoutResult<Self> {
        config.validate()?;

        let row = config.main_row as i32;
        let diag = config.diagonal_len as i32;
        let top_row = row - diag;

        // Horizontal anchor columns, west to east.
        let station_start =
            (config.map_width / 2 - config.station_width() / 2 + 1) as i32;
        let upper_start = station_start + diag;
        let exit_start = upper_start + config.platform_len as i32;
        let station_end = exit_start + diag;
        let map_end = (config.map_width + config.train_len) as i32;

        let lead_in: Vec<Tile> =
            (0..station_start).map(|x| Tile::new(x, row)).collect();

        // The first diagonal tile already steps one row off the main line,
        // so the junction tile itself belongs only to the lead-in.
        let diagonal_in: Vec<Tile> = (0..diag)
            .map(|k| Tile::new(station_start + k, row - 1 - k))
            .collect();

        let upper_straight: Vec<Tile> = (upper_start..exit_start)
            .map(|x| Tile::new(x, top_row))
            .collect();

        let diagonal_out: Vec<Tile> = (0..diag)
            .map(|k| Tile::new(exit_start + k, top_row + 1 + k))
            .collect();

        let middle_straight: Vec<Tile> = (station_start..station_end)
            .map(|x| Tile::new(x, row))
            .collect();

        // Extends train_len tiles past the map edge so the tail of a
        // departing train drains completely off screen.
        let trailing: Vec<Tile> =
            (station_end..map_end).map(|x| Tile::new(x, row)).collect();

        let route_top: Vec<Tile> = lead_in
            .iter()
            .chain(&diagonal_in)
            .chain(&upper_straight)
            .chain(&diagonal_out)
            .copied()
            .collect();

        let route_bottom: Vec<Tile> =
            lead_in.iter().chain(&middle_straight).copied().collect();

        let exit_top: Vec<Tile> = upper_straight
            .iter()
            .chain(&diagonal_out)
            .copied()
            .collect();

        Ok(Self {
            config,
            lead_in,
            diagonal_in,
            upper_straight,
            diagonal_out,
            middle_straight,
            trailing,
            route_top,
            route_bottom,
            exit_top,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Render scale, forwarded to sinks.
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.config.tile_size
    }

    // ── Segments ──────────────────────────────────────────────────────────

    /// Tiles of one named segment.
    pub fn segment(&self, id: SegmentId) -> &[Tile] {
        match id {
            SegmentId::LeadIn => &self.lead_in,
            SegmentId::DiagonalIn => &self.diagonal_in,
            SegmentId::UpperStraight => &self.upper_straight,
            SegmentId::DiagonalOut => &self.diagonal_out,
            SegmentId::MiddleStraight => &self.middle_straight,
            SegmentId::Trailing => &self.trailing,
        }
    }

    pub fn lead_in(&self) -> &[Tile] {
        &self.lead_in
    }

    pub fn diagonal_in(&self) -> &[Tile] {
        &self.diagonal_in
    }

    pub fn platform_straight(&self, platform: Platform) -> &[Tile] {
        match platform {
            Platform::P1 => &self.upper_straight,
            Platform::P2 => &self.middle_straight,
        }
    }

    pub fn trailing(&self) -> &[Tile] {
        &self.trailing
    }

    // ── Composite routes ──────────────────────────────────────────────────

    /// The inbound route serving `platform`: the top-station route for P1,
    /// the bottom-station route for P2.
    pub fn inbound_route(&self, platform: Platform) -> &[Tile] {
        match platform {
            Platform::P1 => &self.route_top,
            Platform::P2 => &self.route_bottom,
        }
    }

    /// The segment a stopped train stands in when departing from `platform`:
    /// upper straight + diagonal-out for P1, the middle straight for P2.
    pub fn exit_segment(&self, platform: Platform) -> &[Tile] {
        match platform {
            Platform::P1 => &self.exit_top,
            Platform::P2 => &self.middle_straight,
        }
    }

    /// Reconstruct the outbound path for a train whose head currently sits
    /// at `head`: the remainder of the platform's exit segment from `head`
    /// onward, followed by the trailing main line.
    ///
    /// If `head` is not found in the exit segment the trailing main line is
    /// returned alone.  Under correct sequencing a stopped train's head is
    /// always inside its exit segment; the fallback only guards against a
    /// corrupted position.
    pub fn departure_path(&self, platform: Platform, head: Tile) -> Vec<Tile> {
        let exit = self.exit_segment(platform);
        match exit.iter().position(|&t| t == head) {
            Some(i) => exit[i..].iter().chain(&self.trailing).copied().collect(),
            None => self.trailing.clone(),
        }
    }
}
