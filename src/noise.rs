//! Gradient noise for terrain heights.
//!
//! Perlin-style 2D noise over a doubled permutation table. Each lattice
//! corner hashes to one of eight gradient directions; the corner dot
//! products are blended with the quintic fade curve and remapped to [0, 1].

use ::noise::NoiseFn;

use crate::error::{Result, TerrainError};

/// Ken Perlin's reference permutation of 0..=255
pub const DEFAULT_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Permutation of 0..=255 stored twice end-to-end
///
/// The second copy lets `table[table[gx] + gz]` run without wrapping for
/// any `gx, gz` in `0..=256`.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    values: [u8; 512],
}

impl PermutationTable {
    /// Build a table from exactly 256 distinct values
    pub fn new(values: &[u8]) -> Result<Self> {
        if values.len() != 256 {
            return Err(TerrainError::InvalidPermutation(format!(
                "expected 256 entries, got {}",
                values.len()
            )));
        }

        let mut seen = [false; 256];
        for &value in values {
            if seen[value as usize] {
                return Err(TerrainError::InvalidPermutation(format!(
                    "value {} appears more than once",
                    value
                )));
            }
            seen[value as usize] = true;
        }

        Ok(Self::doubled(values))
    }

    fn doubled(values: &[u8]) -> Self {
        let mut doubled = [0u8; 512];
        doubled[..256].copy_from_slice(values);
        doubled[256..].copy_from_slice(values);
        Self { values: doubled }
    }

    /// The 256 source entries
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..256]
    }

    /// Double-indirection hash of a lattice corner (`gx`, `gz` in `0..=256`)
    #[inline]
    fn hash(&self, gx: usize, gz: usize) -> u8 {
        self.values[self.values[gx] as usize + gz]
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::doubled(&DEFAULT_PERMUTATION)
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.values[..8])
            .finish_non_exhaustive()
    }
}

/// One of the eight (unnormalized) lattice gradients
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gradient {
    PosXPosZ,
    NegXPosZ,
    PosXNegZ,
    NegXNegZ,
    PosX,
    PosZ,
    NegX,
    NegZ,
}

/// Gradient selected by the low three bits of a corner hash
const GRADIENTS_BY_HASH: [Gradient; 8] = [
    Gradient::PosXPosZ,
    Gradient::NegXPosZ,
    Gradient::PosXNegZ,
    Gradient::NegXNegZ,
    Gradient::PosX,
    Gradient::PosZ,
    Gradient::NegX,
    Gradient::NegZ,
];

impl Gradient {
    pub fn from_hash(hash: u8) -> Self {
        GRADIENTS_BY_HASH[(hash & 7) as usize]
    }

    /// Dot product with the corner-relative offset `(dx, dz)`
    #[inline]
    pub fn dot(self, dx: f32, dz: f32) -> f32 {
        match self {
            Gradient::PosXPosZ => dx + dz,
            Gradient::NegXPosZ => -dx + dz,
            Gradient::PosXNegZ => dx - dz,
            Gradient::NegXNegZ => -dx - dz,
            Gradient::PosX => dx,
            Gradient::PosZ => dz,
            Gradient::NegX => -dx,
            Gradient::NegZ => -dz,
        }
    }
}

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`
#[inline]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation of weight `w` between `a` and `b`
#[inline]
pub fn lerp(w: f32, a: f32, b: f32) -> f32 {
    a * (1.0 - w) + b * w
}

/// Deterministic 2D gradient noise over an injected permutation table
#[derive(Debug, Clone, Default)]
pub struct GradientNoise {
    table: PermutationTable,
}

impl GradientNoise {
    pub fn new(table: PermutationTable) -> Self {
        Self { table }
    }

    /// Sample noise at `(x, z)`
    ///
    /// Returns a value in [0, 1]; exactly 0.5 on every lattice point.
    pub fn evaluate(&self, x: f32, z: f32) -> f32 {
        let floor_x = x.floor();
        let floor_z = z.floor();

        // Lattice cell, wrapped to the 256-entry period
        let grid_x = (floor_x as i32 & 255) as usize;
        let grid_z = (floor_z as i32 & 255) as usize;

        let fx = x - floor_x;
        let fz = z - floor_z;

        let u = fade(fx);
        let v = fade(fz);

        let bottom_left = Gradient::from_hash(self.table.hash(grid_x, grid_z));
        let bottom_right = Gradient::from_hash(self.table.hash(grid_x + 1, grid_z));
        let top_left = Gradient::from_hash(self.table.hash(grid_x, grid_z + 1));
        let top_right = Gradient::from_hash(self.table.hash(grid_x + 1, grid_z + 1));

        let dot_bottom_left = bottom_left.dot(fx, fz);
        let dot_bottom_right = bottom_right.dot(fx - 1.0, fz);
        let dot_top_left = top_left.dot(fx, fz - 1.0);
        let dot_top_right = top_right.dot(fx - 1.0, fz - 1.0);

        let bottom = lerp(u, dot_bottom_left, dot_bottom_right);
        let top = lerp(u, dot_top_left, dot_top_right);

        0.5 * lerp(v, bottom, top) + 0.5
    }
}

impl NoiseFn<f64, 2> for GradientNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.evaluate(point[0] as f32, point[1] as f32) as f64
    }
}
