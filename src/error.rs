//! Error types for terrain configuration.

use std::fmt;

/// Errors that can occur while validating parameters or building the grid
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// Grid must have at least 2 vertices per side to hold a single quad
    MapTooSmall(usize),
    /// Vertex count does not fit into 32-bit indices
    MapTooLarge(usize),
    /// Permutation table is not a permutation of 0..=255
    InvalidPermutation(String),
    /// No octaves configured
    NoOctaves,
    /// Octave divisor must be finite and > 0, amplitude finite
    InvalidOctave { divisor: f32, amplitude: f32 },
    /// A scalar parameter was NaN or infinite
    NonFinite(&'static str),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::MapTooSmall(size) => {
                write!(f, "map size must be at least 2, got {}", size)
            }
            TerrainError::MapTooLarge(size) => write!(
                f,
                "map size {} exceeds the 32-bit index range ({} vertices)",
                size,
                (*size as u128) * (*size as u128)
            ),
            TerrainError::InvalidPermutation(msg) => {
                write!(f, "invalid permutation table: {}", msg)
            }
            TerrainError::NoOctaves => write!(f, "at least one octave is required"),
            TerrainError::InvalidOctave { divisor, amplitude } => write!(
                f,
                "invalid octave {}:{} (divisor must be finite and positive, amplitude finite)",
                divisor, amplitude
            ),
            TerrainError::NonFinite(name) => write!(f, "{} must be a finite number", name),
        }
    }
}

impl std::error::Error for TerrainError {}

/// Result type alias for terrain operations
pub type Result<T> = std::result::Result<T, TerrainError>;
