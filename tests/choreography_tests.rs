// Host-side tests for the exponential interpolation core.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/chapters.rs"]
mod chapters;
#[path = "../src/core/choreography.rs"]
mod choreography;

use chapters::CHAPTERS;
use choreography::*;
use constants::*;
use glam::Vec2;

const TICK: f32 = 1.0 / 60.0;

#[test]
fn blend_alpha_is_clamped_to_unit_range() {
    assert_eq!(blend_alpha(MORPH_BLEND_RATE, 0.0), 0.0);
    let normal = blend_alpha(MORPH_BLEND_RATE, TICK);
    assert!(normal > 0.0 && normal < 1.0);
    // A five-second stall must not push the factor past 1
    assert_eq!(blend_alpha(MORPH_BLEND_RATE, 5.0), 1.0);
}

#[test]
fn state_converges_monotonically_to_a_fixed_target() {
    let mut state = VisualState::from_target(&CHAPTERS[0]);
    let target = &CHAPTERS[2];

    let mut prev = state.distance_to(target);
    let mut ticks = 0;
    while prev >= 1e-3 {
        state.advance(target, TICK);
        let d = state.distance_to(target);
        assert!(d < prev, "distance grew at tick {ticks}: {d} >= {prev}");
        prev = d;
        ticks += 1;
        assert!(ticks < 200, "did not converge below 1e-3 in 200 ticks");
    }
}

#[test]
fn long_stalled_frame_lands_on_target_without_overshoot() {
    let mut state = VisualState::from_target(&CHAPTERS[0]);
    let target = &CHAPTERS[4];
    state.advance(target, 5.0);
    assert!((state.distort - target.distort).abs() < 1e-6);
    assert!((state.anim_speed - target.anim_speed).abs() < 1e-6);
    assert!((state.scale - target.scale).abs() < 1e-6);
    assert!((state.metalness - target.metalness).abs() < 1e-6);
    assert!(state.color.abs_diff_eq(target.color, 1e-6));
}

#[test]
fn republishing_the_same_target_never_resets_progress() {
    let mut state = VisualState::from_target(&CHAPTERS[0]);
    let target = &CHAPTERS[2];
    for _ in 0..30 {
        state.advance(target, TICK);
    }
    let mid = state.distance_to(target);
    // A redundant re-publish of the same chapter is just another tick toward
    // the same place
    state.advance(target, TICK);
    assert!(state.distance_to(target) < mid);
}

#[test]
fn retargeting_moves_the_goal_not_the_state() {
    let mut state = VisualState::from_target(&CHAPTERS[0]);
    for _ in 0..10 {
        state.advance(&CHAPTERS[1], TICK);
    }
    let before = state.distort;
    // Switching chapters mid-flight continues from the current pose; one
    // tick can only cover an alpha-sized fraction of the remaining gap
    state.advance(&CHAPTERS[2], TICK);
    let alpha = blend_alpha(MORPH_BLEND_RATE, TICK);
    let max_step = alpha * (CHAPTERS[2].distort - before).abs() + 1e-6;
    assert!((state.distort - before).abs() <= max_step);
}

#[test]
fn idle_spin_advances_with_time_regardless_of_target() {
    let mut state = VisualState::from_target(&CHAPTERS[0]);
    // Already at the target; only the spin should move
    for _ in 0..60 {
        state.advance(&CHAPTERS[0], TICK);
    }
    assert!((state.rotation.x - IDLE_SPIN_X).abs() < 1e-3);
    assert!((state.rotation.y - IDLE_SPIN_Y).abs() < 1e-3);
}

#[test]
fn camera_settles_on_chapter_eye_plus_parallax() {
    let mut rig = CameraRig::new(CHAPTERS[0].camera_eye);
    let chapter_eye = CHAPTERS[5].camera_eye;
    let pointer = Vec2::new(1.0, -1.0);
    for _ in 0..600 {
        rig.advance(chapter_eye, pointer, TICK);
    }
    let expected = chapter_eye + glam::Vec3::new(POINTER_PARALLAX, -POINTER_PARALLAX, 0.0);
    assert!(rig.eye.abs_diff_eq(expected, 1e-3), "eye = {:?}", rig.eye);
    assert_eq!(rig.look_target(), CAMERA_LOOK_TARGET);
}

#[test]
fn camera_never_overshoots_on_a_stalled_frame() {
    let mut rig = CameraRig::new(CHAPTERS[0].camera_eye);
    let chapter_eye = CHAPTERS[7].camera_eye;
    rig.advance(chapter_eye, Vec2::ZERO, 10.0);
    assert!(rig.eye.abs_diff_eq(chapter_eye, 1e-6));
}
