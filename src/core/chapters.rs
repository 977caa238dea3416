//! Chapter quantization and the per-chapter target table.
//!
//! A chapter is one full-viewport slide of the deck. The table below is the
//! whole visual script: what the morphing core, its material, and the camera
//! should settle into while each chapter is on screen. It is built once and
//! never mutated.

use super::constants::*;
use glam::Vec3;

/// Immutable visual destination for one chapter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChapterTarget {
    pub distort: f32,
    pub anim_speed: f32,
    pub color: Vec3,
    pub scale: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub camera_eye: Vec3,
}

const fn target(
    distort: f32,
    anim_speed: f32,
    color: Vec3,
    scale: f32,
    roughness: f32,
    metalness: f32,
    camera_eye: Vec3,
) -> ChapterTarget {
    ChapterTarget {
        distort,
        anim_speed,
        color,
        scale,
        roughness,
        metalness,
        camera_eye,
    }
}

// Accent palette, sRGB in [0,1]
const GOLD: Vec3 = Vec3::new(0.984, 0.749, 0.141);
const RED: Vec3 = Vec3::new(0.937, 0.267, 0.267);
const EMERALD: Vec3 = Vec3::new(0.063, 0.725, 0.506);
const VIOLET: Vec3 = Vec3::new(0.545, 0.361, 0.965);
const CYAN: Vec3 = Vec3::new(0.024, 0.714, 0.831);
const ORANGE: Vec3 = Vec3::new(0.976, 0.451, 0.086);
const DEEP_BLUE: Vec3 = Vec3::new(0.118, 0.227, 0.541);
const SLATE: Vec3 = Vec3::new(0.580, 0.639, 0.722);
const DARK_VIOLET: Vec3 = Vec3::new(0.298, 0.114, 0.584);

pub const CHAPTERS: [ChapterTarget; CHAPTER_COUNT] = [
    // 0 cover: liquid gold
    target(0.3, 2.0, GOLD, 2.2, 0.1, 0.9, Vec3::new(0.0, 0.0, 7.0)),
    // 1 problem: red chaos, camera pushed in
    target(0.8, 10.0, RED, 1.8, 0.4, 0.2, Vec3::new(0.0, 0.0, 6.0)),
    // 2 vision: calm green structure, side angle
    target(0.2, 1.0, EMERALD, 2.0, 0.1, 0.8, Vec3::new(4.0, 0.0, 8.0)),
    // 3 agents: violet, raised orbit view
    target(0.4, 3.0, VIOLET, 1.5, 0.2, 0.7, Vec3::new(0.0, 2.0, 9.0)),
    // 4 truth: frozen cyan crystal, close up for the scan
    target(0.0, 0.0, CYAN, 1.8, 0.0, 1.0, Vec3::new(0.0, 0.0, 6.0)),
    // 5 reach: orange pulse, wide for the shockwaves
    target(0.6, 8.0, ORANGE, 1.6, 0.2, 0.8, Vec3::new(0.0, 0.0, 10.0)),
    // 6 demo: deep blue tech shell, opposite side angle
    target(0.2, 2.0, DEEP_BLUE, 1.8, 0.3, 0.6, Vec3::new(-4.0, 0.0, 8.0)),
    // 7 value: stable silver, low angle looking up
    target(0.1, 0.5, SLATE, 2.0, 0.1, 0.9, Vec3::new(0.0, -2.0, 10.0)),
    // 8 roadmap: dark matter, warp backdrop
    target(0.5, 4.0, DARK_VIOLET, 1.5, 0.4, 0.5, Vec3::new(0.0, 0.0, 8.0)),
    // 9 access: back to gold
    target(0.3, 2.0, GOLD, 2.2, 0.1, 0.9, Vec3::new(0.0, 0.0, 8.0)),
];

/// Quantize a scroll offset to the nearest chapter index.
///
/// Each chapter occupies exactly one viewport height, so this is
/// `round(offset / height)`. Negative offsets (rubber-banding) and a
/// degenerate viewport both map to chapter 0.
#[inline]
pub fn chapter_for_offset(scroll_top: f64, viewport_h: f64) -> usize {
    if viewport_h <= 0.0 {
        return 0;
    }
    let idx = (scroll_top / viewport_h).round();
    if idx <= 0.0 {
        0
    } else {
        idx as usize
    }
}

/// Scroll offset that puts the given chapter exactly in view.
#[inline]
pub fn scroll_top_for_chapter(index: usize, viewport_h: f64) -> f64 {
    index as f64 * viewport_h
}

/// Target for a chapter index, falling back to the intro look for indices
/// past the configured table.
#[inline]
pub fn target_for(index: usize) -> &'static ChapterTarget {
    CHAPTERS.get(index).unwrap_or(&CHAPTERS[FALLBACK_CHAPTER])
}

#[inline]
pub fn star_speed_for(index: usize) -> f32 {
    if index == WARP_CHAPTER {
        STAR_SPEED_WARP
    } else {
        STAR_SPEED_IDLE
    }
}

#[inline]
pub fn last_chapter() -> usize {
    CHAPTER_COUNT - 1
}

// Keyboard navigation arithmetic. Unlike `go_to_chapter` itself these clamp
// to the configured range, so key repeat parks on the first/last slide.

#[inline]
pub fn next_chapter(current: usize) -> usize {
    (current + 1).min(last_chapter())
}

#[inline]
pub fn prev_chapter(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Digit-row shortcut: 1..9 select the first nine chapters, 0 the tenth.
#[inline]
pub fn chapter_for_digit(digit: char) -> Option<usize> {
    match digit {
        '1'..='9' => Some(digit as usize - '1' as usize),
        '0' => Some(last_chapter()),
        _ => None,
    }
}
