//! Tests for the CSV event-log backend.

use std::fs;

use ilx_core::{Platform, Tick};
use ilx_sim::{EventKind, Logger, SimParams, StationSim};
use ilx_track::LayoutConfig;

use crate::CsvEventLog;

#[test]
fn writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.csv");

    let mut log = CsvEventLog::create(&path).unwrap();
    log.log(Tick(0), EventKind::Sim, "simulator initialized");
    log.log(Tick(70), EventKind::Train, "train 100 arriving");
    log.finish().unwrap();
    assert!(log.take_error().is_none());

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "tick,kind,message");
    assert_eq!(lines[1], "0,SIM,simulator initialized");
    assert_eq!(lines[2], "70,TRAIN,train 100 arriving");
}

#[test]
fn finish_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut log = CsvEventLog::create(&dir.path().join("events.csv")).unwrap();
    log.finish().unwrap();
    log.finish().unwrap();
}

#[test]
fn records_a_full_arrival_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.csv");
    let log = CsvEventLog::create(&path).unwrap();

    let mut sim = StationSim::new(
        LayoutConfig::default(),
        SimParams::default(),
        ilx_sim::NoopRender,
        log,
    )
    .unwrap();
    sim.request_inbound_route(Platform::P1).unwrap();
    sim.trigger_arrival().unwrap();
    sim.run_until_idle();
    sim.request_outbound_route(Platform::P1).unwrap();
    sim.run_until_idle();

    sim.logger_mut().finish().unwrap();
    assert!(sim.logger_mut().take_error().is_none());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("route set: inbound to P1"));
    assert!(content.contains("stopped at P1"));
    assert!(content.contains("has left P1"));
}
