//! Terrain generation and movement parameters.

use std::str::FromStr;

use crate::error::{Result, TerrainError};
use crate::noise::PermutationTable;

/// Largest side length whose vertex count still fits in `u32` indices
pub const MAX_MAP_SIZE: usize = 65_535;

/// One frequency/amplitude layer of the summed height signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octave {
    /// World units per noise lattice cell (larger = smoother, broader features)
    pub divisor: f32,

    /// Height contribution of a full-range noise sample (world units)
    pub amplitude: f32,
}

impl Octave {
    pub const fn new(divisor: f32, amplitude: f32) -> Self {
        Self { divisor, amplitude }
    }

    fn validate(&self) -> Result<()> {
        if !self.divisor.is_finite() || self.divisor <= 0.0 || !self.amplitude.is_finite() {
            return Err(TerrainError::InvalidOctave {
                divisor: self.divisor,
                amplitude: self.amplitude,
            });
        }
        Ok(())
    }
}

/// Parses `DIVISOR:AMPLITUDE`, e.g. `256:64`
impl FromStr for Octave {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (divisor, amplitude) = s
            .split_once(':')
            .ok_or_else(|| format!("expected DIVISOR:AMPLITUDE, got '{}'", s))?;

        let divisor = divisor
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("bad divisor '{}': {}", divisor, e))?;
        let amplitude = amplitude
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("bad amplitude '{}': {}", amplitude, e))?;

        Ok(Self::new(divisor, amplitude))
    }
}

/// Reference octave stack: each step quarters or halves the scale and halves the height
pub const DEFAULT_OCTAVES: [Octave; 6] = [
    Octave::new(256.0, 64.0),
    Octave::new(64.0, 32.0),
    Octave::new(32.0, 16.0),
    Octave::new(16.0, 8.0),
    Octave::new(8.0, 4.0),
    Octave::new(4.0, 2.0),
];

/// Heightfield generation parameters
#[derive(Debug, Clone)]
pub struct TerrainParams {
    /// Vertices per side of the square grid (map_size² vertices total)
    pub map_size: usize,

    /// Octaves summed per vertex, in order
    pub octaves: Vec<Octave>,

    /// Power applied to the octave sum to sharpen peaks
    pub shaping_exponent: f32,

    /// Subtracted after shaping to bring the surface down around y = 0
    pub vertical_bias: f32,

    /// Lattice hash table for the noise evaluator
    pub permutation: PermutationTable,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            map_size: 512,
            octaves: DEFAULT_OCTAVES.to_vec(),
            shaping_exponent: 1.2,
            vertical_bias: 140.0,
            permutation: PermutationTable::default(),
        }
    }
}

impl TerrainParams {
    /// Reject configurations the grid cannot be built from
    pub fn validate(&self) -> Result<()> {
        if self.map_size < 2 {
            return Err(TerrainError::MapTooSmall(self.map_size));
        }
        if self.map_size > MAX_MAP_SIZE {
            return Err(TerrainError::MapTooLarge(self.map_size));
        }
        if self.octaves.is_empty() {
            return Err(TerrainError::NoOctaves);
        }
        for octave in &self.octaves {
            octave.validate()?;
        }
        if !self.shaping_exponent.is_finite() {
            return Err(TerrainError::NonFinite("shaping exponent"));
        }
        if !self.vertical_bias.is_finite() {
            return Err(TerrainError::NonFinite("vertical bias"));
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.map_size * self.map_size
    }

    pub fn index_count(&self) -> usize {
        6 * (self.map_size - 1) * (self.map_size - 1)
    }
}

/// Planar movement and turning rates
#[derive(Debug, Clone)]
pub struct MovementParams {
    /// Translation speed (world units per second), also used for vertical flight
    pub speed_per_s: f32,

    /// Yaw/pitch rate for the arrow keys (degrees per second)
    pub turn_speed_deg_per_s: f32,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            speed_per_s: 10.0,
            turn_speed_deg_per_s: 100.0,
        }
    }
}

impl MovementParams {
    pub fn validate(&self) -> Result<()> {
        if !self.speed_per_s.is_finite() {
            return Err(TerrainError::NonFinite("movement speed"));
        }
        if !self.turn_speed_deg_per_s.is_finite() {
            return Err(TerrainError::NonFinite("turn speed"));
        }
        Ok(())
    }
}
