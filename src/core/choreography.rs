//! Frame-by-frame easing of the shared visual state toward chapter targets.
//!
//! Everything here is exponential smoothing: each tick moves a field a
//! `rate * dt` fraction of the remaining distance, so transitions never pop
//! and never depend on the host's frame cadence. The blend factor is clamped
//! to 1 so a stalled tab (one very long frame) lands exactly on the target
//! instead of overshooting past it.

use super::chapters::ChapterTarget;
use super::constants::*;
use glam::{Vec2, Vec3};

/// Fraction of remaining distance covered this tick, clamped to [0, 1].
#[inline]
pub fn blend_alpha(rate: f32, dt_sec: f32) -> f32 {
    (rate * dt_sec).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp_f32(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Current pose of the morphing core. Single instance, owned by the frame
/// loop; mutated in place every tick and read by the renderer afterwards.
#[derive(Clone, Copy, Debug)]
pub struct VisualState {
    pub distort: f32,
    pub anim_speed: f32,
    pub color: Vec3,
    pub scale: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub rotation: Vec2, // x/y spin of the rendered core
}

impl VisualState {
    /// Start from a chapter target so the first frames ease out of a real
    /// pose instead of black.
    pub fn from_target(target: &ChapterTarget) -> Self {
        Self {
            distort: target.distort,
            anim_speed: target.anim_speed,
            color: target.color,
            scale: target.scale,
            roughness: target.roughness,
            metalness: target.metalness,
            rotation: Vec2::ZERO,
        }
    }

    /// Ease every field toward `target` and advance the idle spin.
    ///
    /// Retargeting is implicit: passing a different `target` changes where
    /// the state is heading, never where it currently is.
    pub fn advance(&mut self, target: &ChapterTarget, dt_sec: f32) {
        let alpha = blend_alpha(MORPH_BLEND_RATE, dt_sec);
        self.distort = lerp_f32(self.distort, target.distort, alpha);
        self.anim_speed = lerp_f32(self.anim_speed, target.anim_speed, alpha);
        self.color = self.color.lerp(target.color, alpha);
        self.scale = lerp_f32(self.scale, target.scale, alpha);
        self.roughness = lerp_f32(self.roughness, target.roughness, alpha);
        self.metalness = lerp_f32(self.metalness, target.metalness, alpha);

        // Idle motion is pure time-based drift, independent of any target.
        self.rotation.x += IDLE_SPIN_X * dt_sec;
        self.rotation.y += IDLE_SPIN_Y * dt_sec;
    }

    /// Euclidean distance to a target over the five morph scalars and the
    /// color channels. Used by tests to check convergence; cheap enough to
    /// keep out of cfg(test).
    pub fn distance_to(&self, target: &ChapterTarget) -> f32 {
        let dc = self.color - target.color;
        let parts = [
            self.distort - target.distort,
            self.anim_speed - target.anim_speed,
            self.scale - target.scale,
            self.roughness - target.roughness,
            self.metalness - target.metalness,
            dc.x,
            dc.y,
            dc.z,
        ];
        parts.iter().map(|d| d * d).sum::<f32>().sqrt()
    }
}

/// Chapter-choreographed camera with pointer parallax.
///
/// The eye chases `chapter eye + pointer offset`; the look target stays
/// pinned at the origin so the core never leaves frame.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
}

impl CameraRig {
    pub fn new(eye: Vec3) -> Self {
        Self { eye }
    }

    /// `pointer` is the normalized device pointer in [-1, 1] on both axes.
    pub fn advance(&mut self, chapter_eye: Vec3, pointer: Vec2, dt_sec: f32) {
        let desired = chapter_eye + Vec3::new(pointer.x, pointer.y, 0.0) * POINTER_PARALLAX;
        let alpha = blend_alpha(CAMERA_BLEND_RATE, dt_sec);
        self.eye = self.eye.lerp(desired, alpha);
    }

    #[inline]
    pub fn look_target(&self) -> Vec3 {
        CAMERA_LOOK_TARGET
    }
}
