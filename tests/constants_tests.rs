// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn blend_rates_are_positive() {
    assert!(MORPH_BLEND_RATE > 0.0);
    assert!(CAMERA_BLEND_RATE > 0.0);
    assert!(GATE_BLEND_RATE > 0.0);
    assert!(GATE_SETTLE_EPSILON > 0.0 && GATE_SETTLE_EPSILON < 0.01);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn chapter_configuration_is_consistent() {
    assert_eq!(NAV_LABELS.len(), CHAPTER_COUNT);
    assert!(FALLBACK_CHAPTER < CHAPTER_COUNT);
    assert!(WARP_CHAPTER < CHAPTER_COUNT);
    assert!(STAR_SPEED_WARP > STAR_SPEED_IDLE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_motion_and_parallax_are_gentle() {
    assert!(IDLE_SPIN_X > 0.0 && IDLE_SPIN_X < 1.0);
    assert!(IDLE_SPIN_Y > 0.0 && IDLE_SPIN_Y < 1.0);
    assert!(POINTER_PARALLAX > 0.0 && POINTER_PARALLAX <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn service_latencies_read_like_a_network() {
    for ms in [
        MARKET_OVERVIEW_LATENCY_MS,
        ACTION_REPORT_LATENCY_MS,
        CHAT_LATENCY_MS,
    ] {
        assert!((800..=2000).contains(&ms));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_capacity_fits_every_decoration_at_once() {
    let worst_case = DEBRIS_COUNT + STREAM_COUNT + SATELLITE_COUNT + SHOCKWAVE_COUNT + 3;
    assert!(SPRITE_CAPACITY >= worst_case);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decoration_loops_have_sane_shapes() {
    assert!(WAVE_PERIOD > 0.0);
    assert!(WAVE_BASE_SCALE > 0.0);
    assert!(WAVE_GROWTH > 0.0);
    assert!(SCAN_SWEEP_SPAN > 0.0);
    assert!(SCAN_SWEEP_HZ > 0.0);
    assert!(STREAM_CEILING > STREAM_FLOOR);
}
