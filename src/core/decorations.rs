//! Chapter-scoped decorations around the morphing core.
//!
//! Every decoration belongs to exactly one chapter and is driven through one
//! of two disciplines:
//!
//! - smooth-scale: the rig eases a [`VisibilityGate`] and scales its sprites
//!   through the gate value (satellites);
//! - hard-toggle: the rig is simply invisible off-chapter, and its own
//!   looping animation (sweep, pulse, spin, particle motion) advances only
//!   while visible (scanner ring, shockwaves, tech shell, data stream,
//!   chaos debris).
//!
//! Either way a rig that is hidden and settled does no per-instance work:
//! `update` returns before touching particles and `emit` pushes nothing.

use super::choreography::{blend_alpha, lerp_f32};
use super::constants::*;
use glam::{Vec3, Vec4};
use rand::prelude::*;

// Chapter assignments
pub const DEBRIS_CHAPTER: usize = 1;
pub const SATELLITES_CHAPTER: usize = 3;
pub const SCANNER_CHAPTER: usize = 4;
pub const SHOCKWAVES_CHAPTER: usize = 5;
pub const SHELL_CHAPTER: usize = 6;
pub const STREAM_CHAPTER: usize = 7;
pub const FINALE_DEBRIS_CHAPTER: usize = 9;

/// Billboard mask the renderer applies to a sprite quad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Orb,
    Ring,
    Shard,
}

/// One renderable decoration instance for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub position: Vec3,
    pub scale: f32,
    pub color: Vec4,
    pub kind: SpriteKind,
    pub spin: f32, // in-plane billboard rotation, radians
}

/// Eased show/hide value shared by all smooth-scale decorations.
///
/// The value chases 1 while the owning chapter is active and 0 otherwise,
/// with the same clamped exponential blend as the morph fields. Once the
/// gate is inactive and within [`GATE_SETTLE_EPSILON`] of zero it snaps to
/// exactly 0 so owners can skip their update pass entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityGate {
    value: f32,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self { value: 0.0 }
    }

    pub fn step(&mut self, active: bool, dt_sec: f32) -> f32 {
        let target = if active { 1.0 } else { 0.0 };
        let alpha = blend_alpha(GATE_BLEND_RATE, dt_sec);
        self.value = lerp_f32(self.value, target, alpha);
        if !active && self.value < GATE_SETTLE_EPSILON {
            self.value = 0.0;
        }
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.value <= 0.0
    }
}

// ---------------------------------------------------------------- satellites

const SATELLITE_OFFSETS: [Vec3; SATELLITE_COUNT] = [
    Vec3::new(3.0, 1.0, 0.0),
    Vec3::new(-3.0, -1.0, 1.0),
    Vec3::new(0.0, 3.0, -1.0),
];
const SATELLITE_COLORS: [Vec3; SATELLITE_COUNT] = [
    Vec3::new(0.388, 0.400, 0.945), // indigo
    Vec3::new(0.925, 0.282, 0.600), // pink
    Vec3::new(0.063, 0.725, 0.506), // emerald
];
const SATELLITE_SCALE: f32 = 0.4;
const SATELLITE_ORBIT_RATE: f32 = 0.5; // radians per second around Y

/// Three orbiting agent markers (chapter 3). Smooth-scale policy: the whole
/// group grows out of the core and shrinks back through the gate.
pub struct Satellites {
    gate: VisibilityGate,
    orbit: f32,
}

impl Satellites {
    pub fn new() -> Self {
        Self {
            gate: VisibilityGate::new(),
            orbit: 0.0,
        }
    }

    pub fn update(&mut self, active: bool, dt_sec: f32) {
        self.gate.step(active, dt_sec);
        if self.gate.is_hidden() {
            return;
        }
        self.orbit += SATELLITE_ORBIT_RATE * dt_sec;
    }

    pub fn emit(&self, out: &mut Vec<Sprite>) {
        if self.gate.is_hidden() {
            return;
        }
        let (sin, cos) = self.orbit.sin_cos();
        for (offset, color) in SATELLITE_OFFSETS.iter().zip(SATELLITE_COLORS.iter()) {
            let rotated = Vec3::new(
                offset.x * cos + offset.z * sin,
                offset.y,
                -offset.x * sin + offset.z * cos,
            );
            out.push(Sprite {
                position: rotated,
                scale: SATELLITE_SCALE * self.gate.value(),
                color: Vec4::from((*color, 1.0)),
                kind: SpriteKind::Orb,
                spin: 0.0,
            });
        }
    }

    #[inline]
    pub fn gate_value(&self) -> f32 {
        self.gate.value()
    }
}

// -------------------------------------------------------------- scanner ring

const SCANNER_COLOR: Vec3 = Vec3::new(0.024, 0.714, 0.831);
const SCANNER_SCALE: f32 = 2.5;
const SCANNER_ALPHA: f32 = 0.8;

/// Fact-checking sweep ring (chapter 4). Hard-toggle policy: the sweep and
/// spin run only while the chapter is active.
pub struct ScannerRing {
    visible: bool,
    phase: f32,
    spin: f32,
}

impl ScannerRing {
    pub fn new() -> Self {
        Self {
            visible: false,
            phase: 0.0,
            spin: 0.0,
        }
    }

    pub fn update(&mut self, active: bool, dt_sec: f32) {
        self.visible = active;
        if !active {
            return;
        }
        self.phase += dt_sec;
        self.spin += SCAN_SPIN_RATE * dt_sec;
    }

    pub fn emit(&self, out: &mut Vec<Sprite>) {
        if !self.visible {
            return;
        }
        out.push(Sprite {
            position: Vec3::new(0.0, self.sweep_y(), 0.0),
            scale: SCANNER_SCALE,
            color: Vec4::from((SCANNER_COLOR, SCANNER_ALPHA)),
            kind: SpriteKind::Ring,
            spin: self.spin,
        });
    }

    #[inline]
    pub fn sweep_y(&self) -> f32 {
        (self.phase * SCAN_SWEEP_HZ).sin() * SCAN_SWEEP_SPAN
    }
}

// --------------------------------------------------------------- shockwaves

const WAVE_COLOR: Vec3 = Vec3::new(0.976, 0.451, 0.086);
const WAVE_DELAY_SEC: f32 = 1.0;

/// Expanding alert rings (chapter 5). Hard-toggle; three staggered pulses.
pub struct Shockwaves {
    visible: bool,
    phase: f32,
}

impl Shockwaves {
    pub fn new() -> Self {
        Self {
            visible: false,
            phase: 0.0,
        }
    }

    pub fn update(&mut self, active: bool, dt_sec: f32) {
        self.visible = active;
        if !active {
            return;
        }
        self.phase += dt_sec;
    }

    /// Scale and opacity of one wave at its staggered local phase.
    pub fn wave_pose(&self, index: usize) -> (f32, f32) {
        let t = (self.phase + index as f32 * WAVE_DELAY_SEC) % WAVE_PERIOD;
        let scale = t * WAVE_GROWTH + WAVE_BASE_SCALE;
        let opacity = (1.0 - t / WAVE_PERIOD).max(0.0);
        (scale, opacity)
    }

    pub fn emit(&self, out: &mut Vec<Sprite>) {
        if !self.visible {
            return;
        }
        for i in 0..SHOCKWAVE_COUNT {
            let (scale, opacity) = self.wave_pose(i);
            out.push(Sprite {
                position: Vec3::ZERO,
                scale,
                color: Vec4::from((WAVE_COLOR, opacity)),
                kind: SpriteKind::Ring,
                spin: 0.0,
            });
        }
    }
}

// ---------------------------------------------------------------- tech shell

const SHELL_INNER_COLOR: Vec3 = Vec3::new(0.376, 0.647, 0.980);
const SHELL_OUTER_COLOR: Vec3 = Vec3::new(0.118, 0.251, 0.686);
const SHELL_INNER_SCALE: f32 = 2.2;
const SHELL_OUTER_SCALE: f32 = 2.6;
const SHELL_YAW_RATE: f32 = 0.5;
const SHELL_PITCH_RATE: f32 = 0.2;

/// Counter-rotating engine cage (chapter 6). Hard-toggle.
pub struct TechShell {
    visible: bool,
    yaw: f32,
    pitch: f32,
}

impl TechShell {
    pub fn new() -> Self {
        Self {
            visible: false,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn update(&mut self, active: bool, dt_sec: f32) {
        self.visible = active;
        if !active {
            return;
        }
        self.yaw -= SHELL_YAW_RATE * dt_sec;
        self.pitch += SHELL_PITCH_RATE * dt_sec;
    }

    pub fn emit(&self, out: &mut Vec<Sprite>) {
        if !self.visible {
            return;
        }
        out.push(Sprite {
            position: Vec3::ZERO,
            scale: SHELL_INNER_SCALE,
            color: Vec4::from((SHELL_INNER_COLOR, 0.3)),
            kind: SpriteKind::Ring,
            spin: self.yaw,
        });
        out.push(Sprite {
            position: Vec3::ZERO,
            scale: SHELL_OUTER_SCALE,
            color: Vec4::from((SHELL_OUTER_COLOR, 0.1)),
            kind: SpriteKind::Ring,
            spin: self.pitch,
        });
    }
}

// --------------------------------------------------------------- data stream

const STREAM_COLOR: Vec3 = Vec3::new(0.886, 0.910, 0.973);
const STREAM_ALPHA: f32 = 0.6;

struct StreamParticle {
    position: Vec3,
    speed: f32,
    scale: f32,
    tumble: f32,
}

/// Rising delivery particles (chapter 7). Hard-toggle; the column keeps
/// flowing only while visible.
pub struct DataStream {
    visible: bool,
    particles: Vec<StreamParticle>,
}

impl DataStream {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..STREAM_COUNT)
            .map(|_| StreamParticle {
                position: Vec3::new(
                    rng.gen_range(-7.5..7.5),
                    rng.gen_range(STREAM_FLOOR..STREAM_CEILING),
                    rng.gen_range(-2.5..2.5),
                ),
                speed: rng.gen_range(0.5..2.5),
                scale: rng.gen_range(0.2..0.6),
                tumble: rng.gen_range(0.0..std::f32::consts::TAU),
            })
            .collect();
        Self {
            visible: false,
            particles,
        }
    }

    pub fn update(&mut self, active: bool, dt_sec: f32) {
        self.visible = active;
        if !active {
            return;
        }
        for p in &mut self.particles {
            p.position.y += p.speed * dt_sec;
            if p.position.y > STREAM_CEILING {
                p.position.y = STREAM_FLOOR;
            }
            p.tumble += dt_sec;
        }
    }

    pub fn emit(&self, out: &mut Vec<Sprite>) {
        if !self.visible {
            return;
        }
        for p in &self.particles {
            out.push(Sprite {
                position: p.position,
                scale: p.scale,
                color: Vec4::from((STREAM_COLOR, STREAM_ALPHA)),
                kind: SpriteKind::Shard,
                spin: p.tumble,
            });
        }
    }

    #[inline]
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.position)
    }
}

// -------------------------------------------------------------- chaos debris

const DEBRIS_ALPHA: f32 = 0.6;
const DEBRIS_SWAY: f32 = 1.0; // world units of sin/cos drift

struct DebrisParticle {
    anchor: Vec3,
    phase: f32,
    scale: f32,
}

/// Swarming fragment field. Used twice: red noise on the problem chapter and
/// gold dust on the finale. Hard-toggle.
pub struct ChaosDebris {
    visible: bool,
    color: Vec3,
    time: f32,
    particles: Vec<DebrisParticle>,
}

impl ChaosDebris {
    pub fn new(color: Vec3, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..DEBRIS_COUNT)
            .map(|i| DebrisParticle {
                anchor: Vec3::new(
                    rng.gen_range(-7.5..7.5),
                    rng.gen_range(-7.5..7.5),
                    rng.gen_range(-5.0..5.0),
                ),
                phase: i as f32,
                scale: rng.gen_range(0.0..0.5),
            })
            .collect();
        Self {
            visible: false,
            color,
            time: 0.0,
            particles,
        }
    }

    pub fn update(&mut self, active: bool, dt_sec: f32) {
        self.visible = active;
        if !active {
            return;
        }
        self.time += dt_sec;
    }

    pub fn emit(&self, out: &mut Vec<Sprite>) {
        if !self.visible {
            return;
        }
        for p in &self.particles {
            let t = self.time + p.phase;
            out.push(Sprite {
                position: p.anchor + Vec3::new(t.sin(), t.cos(), 0.0) * DEBRIS_SWAY,
                scale: p.scale,
                color: Vec4::from((self.color, DEBRIS_ALPHA)),
                kind: SpriteKind::Shard,
                spin: t,
            });
        }
    }
}

// ------------------------------------------------------------ the whole set

const DEBRIS_RED: Vec3 = Vec3::new(0.937, 0.267, 0.267);
const DEBRIS_GOLD: Vec3 = Vec3::new(0.984, 0.749, 0.141);

/// Every decoration in the deck, updated once per tick from the published
/// chapter index.
pub struct DecorationSet {
    pub debris_problem: ChaosDebris,
    pub satellites: Satellites,
    pub scanner: ScannerRing,
    pub shockwaves: Shockwaves,
    pub shell: TechShell,
    pub stream: DataStream,
    pub debris_finale: ChaosDebris,
}

impl DecorationSet {
    pub fn new(seed: u64) -> Self {
        Self {
            debris_problem: ChaosDebris::new(DEBRIS_RED, seed),
            satellites: Satellites::new(),
            scanner: ScannerRing::new(),
            shockwaves: Shockwaves::new(),
            shell: TechShell::new(),
            stream: DataStream::new(seed ^ 0x9E37_79B9_7F4A_7C15),
            debris_finale: ChaosDebris::new(DEBRIS_GOLD, seed.wrapping_add(1)),
        }
    }

    pub fn update(&mut self, chapter: usize, dt_sec: f32) {
        self.debris_problem.update(chapter == DEBRIS_CHAPTER, dt_sec);
        self.satellites.update(chapter == SATELLITES_CHAPTER, dt_sec);
        self.scanner.update(chapter == SCANNER_CHAPTER, dt_sec);
        self.shockwaves.update(chapter == SHOCKWAVES_CHAPTER, dt_sec);
        self.shell.update(chapter == SHELL_CHAPTER, dt_sec);
        self.stream.update(chapter == STREAM_CHAPTER, dt_sec);
        self.debris_finale
            .update(chapter == FINALE_DEBRIS_CHAPTER, dt_sec);
    }

    pub fn emit(&self, out: &mut Vec<Sprite>) {
        self.debris_problem.emit(out);
        self.satellites.emit(out);
        self.scanner.emit(out);
        self.shockwaves.emit(out);
        self.shell.emit(out);
        self.stream.emit(out);
        self.debris_finale.emit(out);
    }
}
