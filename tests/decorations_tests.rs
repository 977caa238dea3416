// Host-side tests for decoration gates and rigs.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/choreography.rs"]
mod choreography;
#[path = "../src/core/chapters.rs"]
mod chapters;
#[path = "../src/core/decorations.rs"]
mod decorations;

use constants::*;
use decorations::*;

const TICK: f32 = 1.0 / 60.0;

#[test]
fn gate_eases_up_while_active_and_back_down() {
    let mut gate = VisibilityGate::new();
    let mut prev = gate.value();
    for _ in 0..120 {
        gate.step(true, TICK);
        assert!(gate.value() > prev);
        assert!(gate.value() <= 1.0);
        prev = gate.value();
    }
    assert!(gate.value() > 0.9, "two seconds should nearly open the gate");

    for _ in 0..600 {
        gate.step(false, TICK);
    }
    assert!(gate.is_hidden(), "gate never settled: {}", gate.value());
}

#[test]
fn gate_snaps_to_zero_once_settled() {
    let mut gate = VisibilityGate::new();
    gate.step(true, 1.0); // alpha clamps to 1: fully open
    assert_eq!(gate.value(), 1.0);
    for _ in 0..2000 {
        gate.step(false, TICK);
        assert!(gate.value() >= 0.0);
    }
    assert_eq!(gate.value(), 0.0);
}

#[test]
fn hidden_satellites_emit_nothing_and_do_no_work() {
    let mut satellites = Satellites::new();
    satellites.update(false, TICK);
    let mut out = Vec::new();
    satellites.emit(&mut out);
    assert!(out.is_empty());

    // Open, then close fully: dormant again
    satellites.update(true, 1.0);
    for _ in 0..2000 {
        satellites.update(false, TICK);
    }
    out.clear();
    satellites.emit(&mut out);
    assert!(out.is_empty());
}

#[test]
fn active_satellites_scale_through_the_gate() {
    let mut satellites = Satellites::new();
    satellites.update(true, TICK);
    let early = satellites.gate_value();
    let mut out = Vec::new();
    satellites.emit(&mut out);
    assert_eq!(out.len(), SATELLITE_COUNT);
    for s in &out {
        assert_eq!(s.kind, SpriteKind::Orb);
        assert!(s.scale > 0.0 && s.scale < 0.4 * early + 1e-6);
    }

    satellites.update(true, 5.0);
    out.clear();
    satellites.emit(&mut out);
    for s in &out {
        assert!((s.scale - 0.4).abs() < 1e-3, "fully open scale: {}", s.scale);
    }
}

#[test]
fn scanner_loop_runs_only_while_visible() {
    let mut scanner = ScannerRing::new();
    scanner.update(false, 10.0);
    assert_eq!(scanner.sweep_y(), 0.0, "hidden ring must not sweep");

    scanner.update(true, 0.25);
    let first = scanner.sweep_y();
    scanner.update(true, 0.25);
    assert_ne!(scanner.sweep_y(), first);
    assert!(scanner.sweep_y().abs() <= SCAN_SWEEP_SPAN);

    let mut out = Vec::new();
    scanner.emit(&mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, SpriteKind::Ring);
}

#[test]
fn shockwaves_stagger_and_wrap() {
    let mut waves = Shockwaves::new();
    waves.update(true, 0.0);
    let (scale0, opacity0) = waves.wave_pose(0);
    assert!((scale0 - WAVE_BASE_SCALE).abs() < 1e-6);
    assert!((opacity0 - 1.0).abs() < 1e-6);

    // One full period later wave 0 is back at its birth pose
    waves.update(true, WAVE_PERIOD);
    let (scale_wrapped, _) = waves.wave_pose(0);
    assert!((scale_wrapped - WAVE_BASE_SCALE).abs() < 1e-3);

    for i in 0..SHOCKWAVE_COUNT {
        let (scale, opacity) = waves.wave_pose(i);
        assert!(scale >= WAVE_BASE_SCALE);
        assert!((0.0..=1.0).contains(&opacity));
    }
}

#[test]
fn stream_particles_stay_in_band_and_are_deterministic() {
    let mut a = DataStream::new(7);
    let mut b = DataStream::new(7);
    for _ in 0..300 {
        a.update(true, 0.1);
        b.update(true, 0.1);
    }
    for (pa, pb) in a.positions().zip(b.positions()) {
        assert_eq!(pa, pb, "same seed must give the same flow");
        assert!(pa.y >= STREAM_FLOOR && pa.y <= STREAM_CEILING + 0.25);
    }

    let mut out = Vec::new();
    a.emit(&mut out);
    assert_eq!(out.len(), STREAM_COUNT);
    assert!(out.iter().all(|s| s.kind == SpriteKind::Shard));
}

#[test]
fn decoration_set_routes_one_chapter_at_a_time() {
    let mut set = DecorationSet::new(42);
    let mut out = Vec::new();

    // Problem chapter: only the red debris field is live
    set.update(DEBRIS_CHAPTER, 0.5);
    set.emit(&mut out);
    assert_eq!(out.len(), DEBRIS_COUNT);

    // Jump to the scanner chapter: debris toggles off the same tick
    set.update(SCANNER_CHAPTER, 0.5);
    out.clear();
    set.emit(&mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, SpriteKind::Ring);

    // Satellites fade rather than toggle, so right after leaving their
    // chapter they still emit at a shrinking scale
    set.update(SATELLITES_CHAPTER, 0.5);
    set.update(SCANNER_CHAPTER, TICK);
    out.clear();
    set.emit(&mut out);
    assert!(out.len() == 1 + SATELLITE_COUNT);
}
