//! Heightfield terrain generated from layered gradient noise.

mod mesh;
mod octaves;
mod system;

// Re-export public types
pub use mesh::{TerrainGrid, Vertex};
pub use octaves::{signed_pow, OctaveCompositor};
pub use system::TerrainSystem;
