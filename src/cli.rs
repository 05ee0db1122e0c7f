//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::movement::WorldOffset;
use crate::params::{MovementParams, Octave, TerrainParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "perlin-terrain")]
#[command(about = "Fly over procedurally generated gradient-noise terrain", long_about = None)]
pub struct Args {
    /// Vertices per side of the terrain grid
    #[arg(long, value_name = "VERTICES", default_value_t = 512)]
    pub map_size: usize,

    /// Noise octave as DIVISOR:AMPLITUDE; repeat to replace the default six
    #[arg(long = "octave", value_name = "DIVISOR:AMPLITUDE")]
    pub octaves: Vec<Octave>,

    /// Exponent applied to the octave sum
    #[arg(long, default_value_t = 1.2)]
    pub exponent: f32,

    /// Height subtracted after shaping
    #[arg(long, default_value_t = 140.0, allow_negative_numbers = true)]
    pub bias: f32,

    /// Movement speed (world units per second)
    #[arg(long, default_value_t = 10.0)]
    pub speed: f32,

    /// Arrow-key turn rate (degrees per second)
    #[arg(long, default_value_t = 100.0)]
    pub turn_speed: f32,

    /// Starting offset along x in noise space
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_x: f32,

    /// Starting offset along z in noise space
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_z: f32,

    /// Write the starting heightmap to a PNG and exit without opening a window
    #[arg(long, value_name = "PATH")]
    pub export_heightmap: Option<PathBuf>,
}

impl Args {
    /// Terrain parameters with command-line overrides applied
    pub fn terrain_params(&self) -> TerrainParams {
        let mut params = TerrainParams {
            map_size: self.map_size,
            shaping_exponent: self.exponent,
            vertical_bias: self.bias,
            ..Default::default()
        };
        if !self.octaves.is_empty() {
            params.octaves = self.octaves.clone();
        }
        params
    }

    pub fn movement_params(&self) -> MovementParams {
        MovementParams {
            speed_per_s: self.speed,
            turn_speed_deg_per_s: self.turn_speed,
        }
    }

    pub fn start_offset(&self) -> WorldOffset {
        WorldOffset::new(self.offset_x, self.offset_z)
    }
}
