//! paknam — scripted run of the two-platform station interlocking simulator.
//!
//! Replays a typical operator session at a small terminus: an arrival and a
//! departure on platform 1, then an inbound move toward platform 2 cut short
//! by an emergency stop.  Every event is echoed to the console and persisted
//! to `output/paknam/events.csv`.

use std::path::Path;

use anyhow::Result;

use ilx_core::{Platform, Tick, Tile};
use ilx_interlock::{SignalAspect, SignalId};
use ilx_output::CsvEventLog;
use ilx_sim::{
    EventKind, Logger, RenderSink, SimParams, StationSim, TrackColor, TrainColor,
};
use ilx_track::LayoutConfig;

// ── Console + CSV logger ──────────────────────────────────────────────────────

/// Echoes every event to stdout and forwards it to the CSV backend.
struct ConsoleLog {
    csv: CsvEventLog,
}

impl Logger for ConsoleLog {
    fn log(&mut self, now: Tick, kind: EventKind, message: &str) {
        println!("{:>6}  {:<9}  {message}", now.to_string(), kind.to_string());
        self.csv.log(now, kind, message);
    }
}

// ── Panel render ──────────────────────────────────────────────────────────────

/// Keeps the latest signal aspects and platform indicator colors, the way a
/// control-panel mimic would, so the script can print them between phases.
struct PanelRender {
    signals: Vec<(SignalId, SignalAspect)>,
    indicators: [TrackColor; 2],
    train_tiles: usize,
}

impl PanelRender {
    fn new() -> Self {
        Self {
            signals: Vec::new(),
            indicators: [TrackColor::Idle; 2],
            train_tiles: 0,
        }
    }

    fn print_panel(&self) {
        for (signal, aspect) in &self.signals {
            let lamp = match aspect {
                SignalAspect::Green => "green",
                SignalAspect::Red => "red",
            };
            println!("    {:<20} {lamp}", signal.to_string());
        }
        for platform in Platform::ALL {
            println!(
                "    {platform} indicator         {:?}",
                self.indicators[platform.index()]
            );
        }
        println!("    train tiles on map   {}", self.train_tiles);
    }
}

impl RenderSink for PanelRender {
    fn draw_train(&mut self, tiles: &[Tile], _color: TrainColor) {
        self.train_tiles = tiles.len();
    }

    fn set_platform_indicator(&mut self, platform: Platform, color: TrackColor) {
        self.indicators[platform.index()] = color;
    }

    fn set_signal(&mut self, signal: SignalId, aspect: SignalAspect) {
        match self.signals.iter_mut().find(|(id, _)| *id == signal) {
            Some(slot) => slot.1 = aspect,
            None => self.signals.push((signal, aspect)),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== paknam — station interlocking simulator ===");
    println!();

    std::fs::create_dir_all("output/paknam")?;
    let csv = CsvEventLog::create(Path::new("output/paknam/events.csv"))?;

    let config = LayoutConfig::default();
    let params = SimParams::default();
    let mut sim = StationSim::new(config, params, PanelRender::new(), ConsoleLog { csv })?;

    println!(
        "Track: {} tiles per inbound route, {}-tile trains, tick every {} units",
        sim.layout().inbound_route(Platform::P1).len(),
        sim.layout().config().train_len,
        SimParams::default().tick_interval,
    );
    println!();

    // 1. Arrival on platform 1.
    sim.request_inbound_route(Platform::P1)?;
    sim.trigger_arrival()?;
    sim.run_until_idle();
    println!("  -- train at rest ({}), panel:", sim.train_state());
    sim.render().print_panel();
    println!();

    // 2. Departure from platform 1.
    sim.request_outbound_route(Platform::P1)?;
    sim.run_until_idle();

    // 3. Second arrival, toward platform 2, interrupted mid-approach.
    sim.request_inbound_route(Platform::P2)?;
    sim.trigger_arrival()?;
    sim.advance(30 * SimParams::default().tick_interval);
    sim.trigger_emergency_stop();
    println!("  -- emergency, panel:");
    sim.render().print_panel();
    sim.run_until_idle();
    println!();

    // 4. Flush the CSV and summarize.
    sim.logger_mut().csv.finish()?;
    if let Some(e) = sim.logger_mut().csv.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Final tick:  {}", sim.now());
    println!("Train state: {}", sim.train_state());
    println!("Event log:   output/paknam/events.csv");

    Ok(())
}
