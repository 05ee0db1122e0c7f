//! Terrain grid mesh with fixed topology and regenerated heights.

use bytemuck::{Pod, Zeroable};

use super::octaves::OctaveCompositor;
use crate::error::{Result, TerrainError};
use crate::movement::WorldOffset;
use crate::params::MAX_MAP_SIZE;

/// Vertex data for the terrain mesh (x = i, y = height, z = j)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Square heightfield grid
///
/// Vertex `(i, j)` lives at index `i * map_size + j`. The index list and the
/// x/z coordinates are built once; only the y components change.
pub struct TerrainGrid {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    map_size: usize,
    /// Heights are stale relative to the current world offset
    dirty: bool,
}

impl TerrainGrid {
    /// Build a flat `map_size × map_size` grid and its triangulation
    pub fn new(map_size: usize) -> Result<Self> {
        if map_size < 2 {
            return Err(TerrainError::MapTooSmall(map_size));
        }
        if map_size > MAX_MAP_SIZE {
            return Err(TerrainError::MapTooLarge(map_size));
        }

        let mut vertices = Vec::with_capacity(map_size * map_size);
        let mut indices = Vec::with_capacity(6 * (map_size - 1) * (map_size - 1));

        // Lattice points along the xz plane
        for i in 0..map_size {
            for j in 0..map_size {
                vertices.push(Vertex {
                    position: [i as f32, 0.0, j as f32],
                });
            }
        }

        // Two clockwise triangles per quad:
        //   (i,j) ---- (i,j+1)
        //     |       /   |
        //     |     /     |
        //   (i+1,j) -- (i+1,j+1)
        let size = map_size as u32;
        for i in 0..size - 1 {
            for j in 0..size - 1 {
                let top_left = i * size + j;
                let top_right = top_left + 1;
                let bottom_left = (i + 1) * size + j;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    top_right,
                    bottom_left,
                    bottom_left,
                    top_right,
                    bottom_right,
                ]);
            }
        }

        Ok(Self {
            vertices,
            indices,
            map_size,
            dirty: true,
        })
    }

    pub fn map_size(&self) -> usize {
        self.map_size
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Height of vertex `(i, j)`
    pub fn height(&self, i: usize, j: usize) -> f32 {
        self.vertices[i * self.map_size + j].position[1]
    }

    /// Heights in row-major order (`i * map_size + j`)
    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.vertices.iter().map(|v| v.position[1])
    }

    /// Lowest and highest vertex heights
    pub fn height_range(&self) -> (f32, f32) {
        self.heights()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), h| {
                (min.min(h), max.max(h))
            })
    }

    /// Recompute every height for `offset` if the grid is dirty
    ///
    /// Recomputes the whole field even though only the offset changed.
    ///
    /// # Returns
    /// `true` if heights were rewritten and must be re-uploaded
    pub fn regenerate(&mut self, compositor: &OctaveCompositor, offset: WorldOffset) -> bool {
        if !self.dirty {
            return false;
        }

        let map_size = self.map_size;
        for (idx, vertex) in self.vertices.iter_mut().enumerate() {
            let i = idx / map_size;
            let j = idx % map_size;
            vertex.position[1] = compositor.height(i, j, offset);
        }

        self.dirty = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TerrainParams;

    fn compositor() -> OctaveCompositor {
        OctaveCompositor::new(&TerrainParams::default()).unwrap()
    }

    #[test]
    fn test_terrain_grid_creation() {
        let grid = TerrainGrid::new(4).unwrap();

        assert_eq!(grid.vertices().len(), 16);
        assert_eq!(grid.indices().len(), 6 * 3 * 3);
        assert!(grid.is_dirty());

        // Fixed x/z, flat start
        assert_eq!(grid.vertices()[6].position, [1.0, 0.0, 2.0]);
        assert!(grid.heights().all(|h| h == 0.0));
    }

    #[test]
    fn test_index_list_well_formed() {
        let grid = TerrainGrid::new(4).unwrap();

        for tri in grid.indices().chunks(3) {
            assert!(tri.iter().all(|&i| i < 16));
            assert_ne!(tri[0], tri[1]);
            assert_ne!(tri[1], tri[2]);
            assert_ne!(tri[0], tri[2]);
        }

        // First quad
        assert_eq!(&grid.indices()[..6], &[0, 1, 4, 4, 1, 5]);
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        assert!(matches!(TerrainGrid::new(0), Err(TerrainError::MapTooSmall(0))));
        assert!(matches!(TerrainGrid::new(1), Err(TerrainError::MapTooSmall(1))));
        assert!(TerrainGrid::new(2).is_ok());
    }

    #[test]
    fn test_regenerate_fills_heights() {
        let compositor = compositor();
        let offset = WorldOffset::new(40.0, -7.5);
        let mut grid = TerrainGrid::new(8).unwrap();

        assert!(grid.regenerate(&compositor, offset));
        assert!(!grid.is_dirty());

        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(grid.height(i, j), compositor.height(i, j, offset));
                assert!(grid.height(i, j).is_finite());
            }
        }

        // Topology untouched
        assert_eq!(grid.vertices()[9].position[0], 1.0);
        assert_eq!(grid.vertices()[9].position[2], 1.0);
    }

    #[test]
    fn test_clean_grid_is_not_regenerated() {
        let compositor = compositor();
        let mut grid = TerrainGrid::new(8).unwrap();
        grid.regenerate(&compositor, WorldOffset::ZERO);
        let before: Vec<f32> = grid.heights().collect();

        // A different offset must not be sampled while the grid is clean
        assert!(!grid.regenerate(&compositor, WorldOffset::new(1000.0, 1000.0)));
        let after: Vec<f32> = grid.heights().collect();
        assert_eq!(before, after);

        grid.mark_dirty();
        assert!(grid.regenerate(&compositor, WorldOffset::new(1000.0, 1000.0)));
        let moved: Vec<f32> = grid.heights().collect();
        assert_ne!(before, moved);
    }

    #[test]
    fn test_height_range() {
        let compositor = compositor();
        let mut grid = TerrainGrid::new(16).unwrap();
        grid.regenerate(&compositor, WorldOffset::ZERO);

        let (min, max) = grid.height_range();
        assert!(min <= max);
        assert!(grid.heights().all(|h| h >= min && h <= max));
    }
}
