//! Parameter definitions with units and documented semantics.
//!
//! All tunable constants live here:
//! - Terrain shape (grid size, octaves, shaping, permutation table)
//! - Movement and turning rates
//! - Camera projection and window settings

mod camera;
mod render;
mod terrain;

// Re-export all types
pub use camera::CameraParams;
pub use render::RenderConfig;
pub use terrain::{MovementParams, Octave, TerrainParams, DEFAULT_OCTAVES, MAX_MAP_SIZE};
