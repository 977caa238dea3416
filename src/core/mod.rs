pub mod chapters;
pub mod choreography;
pub mod constants;
pub mod decorations;
pub mod market;

pub use chapters::*;
pub use choreography::*;
pub use constants::*;
pub use decorations::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
