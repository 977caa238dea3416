/// Presentation-side tuning constants.
///
/// Core choreography constants live in `core::constants`; everything here is
/// specific to the web frontend (DOM labels, service latencies, renderer
/// sizing).
// Labels for the navigation dots, one per chapter
pub const NAV_LABELS: [&str; 10] = [
    "Intro", "Problem", "Vision", "Agents", "Truth", "Reach", "Demo", "Value", "Roadmap", "Access",
];

// Seed for the deterministic particle layouts
pub const DECOR_SEED: u64 = 42;

// Simulated network latency of the mock services (milliseconds)
pub const MARKET_OVERVIEW_LATENCY_MS: i32 = 800;
pub const ACTION_REPORT_LATENCY_MS: i32 = 2000;
pub const CHAT_LATENCY_MS: i32 = 1500;

// Renderer sizing
pub const SPRITE_CAPACITY: usize = 320; // debris (200) + stream (40) + rings with headroom
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
