use glam::Vec3;

// Shared choreography tuning constants used by the core and the web frontend.

// Chapters
pub const CHAPTER_COUNT: usize = 10;
pub const FALLBACK_CHAPTER: usize = 0; // out-of-range indices resolve to the intro look

// Exponential blend rates (per second)
pub const MORPH_BLEND_RATE: f32 = 2.5; // shared across all morph fields
pub const CAMERA_BLEND_RATE: f32 = 3.0;
pub const GATE_BLEND_RATE: f32 = 2.0; // decoration show/hide easing

// A gate this close to zero while inactive counts as fully hidden
pub const GATE_SETTLE_EPSILON: f32 = 1e-3;

// Idle motion of the morphing core (radians per second)
pub const IDLE_SPIN_X: f32 = 0.1;
pub const IDLE_SPIN_Y: f32 = 0.2;

// Camera
pub const CAMERA_LOOK_TARGET: Vec3 = Vec3::ZERO;
pub const POINTER_PARALLAX: f32 = 0.5; // world units per normalized pointer unit

// Star-field backdrop
pub const STAR_SPEED_IDLE: f32 = 0.5;
pub const STAR_SPEED_WARP: f32 = 20.0;
pub const WARP_CHAPTER: usize = 8; // roadmap chapter gets the warp effect

// Decoration populations
pub const SATELLITE_COUNT: usize = 3;
pub const SHOCKWAVE_COUNT: usize = 3;
pub const DEBRIS_COUNT: usize = 200;
pub const STREAM_COUNT: usize = 40;

// Scanner ring sweep (chapter 4)
pub const SCAN_SWEEP_HZ: f32 = 2.0; // sin frequency of the vertical sweep
pub const SCAN_SWEEP_SPAN: f32 = 2.5; // peak vertical offset
pub const SCAN_SPIN_RATE: f32 = 1.2; // radians per second

// Shockwave pulse (chapter 5)
pub const WAVE_PERIOD: f32 = 3.0; // seconds per expanding ring
pub const WAVE_BASE_SCALE: f32 = 1.5;
pub const WAVE_GROWTH: f32 = 2.0; // scale gained per second of phase

// Data stream (chapter 7)
pub const STREAM_CEILING: f32 = 10.0; // particles wrap from here back to the floor
pub const STREAM_FLOOR: f32 = -10.0;
