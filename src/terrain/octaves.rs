//! Multi-octave height synthesis.

use crate::error::Result;
use crate::movement::WorldOffset;
use crate::noise::GradientNoise;
use crate::params::{Octave, TerrainParams};

/// `sign(base) * |base|^exponent`
///
/// Fractional powers of a negative sum are undefined for real numbers; this
/// keeps the curve continuous and odd instead of producing NaN. Identical to
/// `powf` for non-negative bases.
#[inline]
pub fn signed_pow(base: f32, exponent: f32) -> f32 {
    base.signum() * base.abs().powf(exponent)
}

/// Sums noise octaves into a final terrain height
#[derive(Debug, Clone)]
pub struct OctaveCompositor {
    noise: GradientNoise,
    octaves: Vec<Octave>,
    shaping_exponent: f32,
    vertical_bias: f32,
}

impl OctaveCompositor {
    pub fn new(params: &TerrainParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            noise: GradientNoise::new(params.permutation.clone()),
            octaves: params.octaves.clone(),
            shaping_exponent: params.shaping_exponent,
            vertical_bias: params.vertical_bias,
        })
    }

    /// Height of grid vertex `(i, j)` seen from `offset`
    pub fn height(&self, i: usize, j: usize, offset: WorldOffset) -> f32 {
        self.height_at(i as f32 + offset.x, j as f32 + offset.z)
    }

    /// Height at an arbitrary world position
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        signed_pow(self.octave_sum(x, z), self.shaping_exponent) - self.vertical_bias
    }

    /// Weighted octave sum before shaping
    pub fn octave_sum(&self, x: f32, z: f32) -> f32 {
        self.octaves
            .iter()
            .map(|octave| {
                octave.amplitude * self.noise.evaluate(x / octave.divisor, z / octave.divisor)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_reference_formula() {
        let compositor = OctaveCompositor::new(&TerrainParams::default()).unwrap();
        let noise = GradientNoise::default();

        for &(i, j) in &[(0usize, 0usize), (17, 301), (255, 4), (511, 511)] {
            let x = i as f32 + 12.5;
            let z = j as f32 - 3.25;
            let sum = 64.0 * noise.evaluate(x / 256.0, z / 256.0)
                + 32.0 * noise.evaluate(x / 64.0, z / 64.0)
                + 16.0 * noise.evaluate(x / 32.0, z / 32.0)
                + 8.0 * noise.evaluate(x / 16.0, z / 16.0)
                + 4.0 * noise.evaluate(x / 8.0, z / 8.0)
                + 2.0 * noise.evaluate(x / 4.0, z / 4.0);

            // Default octaves keep the sum positive, where the signed power is plain powf
            assert!(sum > 0.0);
            let expected = sum.powf(1.2) - 140.0;

            let height = compositor.height(i, j, WorldOffset::new(12.5, -3.25));
            assert_eq!(height, expected);
        }
    }

    #[test]
    fn test_origin_lattice_height() {
        // Every octave samples a lattice point at the origin: sum = 126 * 0.5
        let compositor = OctaveCompositor::new(&TerrainParams::default()).unwrap();
        assert_eq!(compositor.octave_sum(0.0, 0.0), 63.0);
        assert_eq!(
            compositor.height(0, 0, WorldOffset::ZERO),
            63.0f32.powf(1.2) - 140.0
        );
    }

    #[test]
    fn test_periodic_over_full_table_period() {
        // Assumes every divisor divides 256, so the coarsest octave's
        // 256-cell period (256 * 256 world units) repeats all of them.
        let params = TerrainParams::default();
        assert!(params.octaves.iter().all(|o| 256.0 % o.divisor == 0.0));

        let period = 256.0 * 256.0;
        let compositor = OctaveCompositor::new(&params).unwrap();
        for &(i, j) in &[(0usize, 0usize), (3, 7), (100, 250), (511, 1)] {
            let base = compositor.height(i, j, WorldOffset::ZERO);
            let shifted = compositor.height(i, j, WorldOffset::new(period, period));
            assert_eq!(base, shifted, "vertex ({}, {})", i, j);
        }
    }

    #[test]
    fn test_negative_sum_stays_finite() {
        let params = TerrainParams {
            octaves: vec![Octave::new(1.0, -10.0)],
            vertical_bias: 0.0,
            ..Default::default()
        };
        let compositor = OctaveCompositor::new(&params).unwrap();

        // Lattice point: noise is 0.5, so the sum is -5
        let height = compositor.height(2, 3, WorldOffset::ZERO);
        assert!(height.is_finite());
        assert_eq!(height, -(5.0f32.powf(1.2)));
    }

    #[test]
    fn test_signed_pow() {
        assert_eq!(signed_pow(0.0, 1.2), 0.0);
        assert_eq!(signed_pow(2.0, 2.0), 4.0);
        assert_eq!(signed_pow(-2.0, 2.0), -4.0);
        assert!(signed_pow(-1e-3, 1.2).is_finite());
    }

    #[test]
    fn test_rejects_invalid_params() {
        let params = TerrainParams {
            octaves: Vec::new(),
            ..Default::default()
        };
        assert!(OctaveCompositor::new(&params).is_err());
    }
}
