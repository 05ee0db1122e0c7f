//! Per-frame terrain update: movement, dirty tracking, regeneration.

use std::time::Instant;

use super::mesh::TerrainGrid;
use super::octaves::OctaveCompositor;
use crate::error::Result;
use crate::movement::{MovementInput, OffsetTracker, WorldOffset};
use crate::params::{MovementParams, TerrainParams};

/// Terrain state owned by the frame loop
pub struct TerrainSystem {
    grid: TerrainGrid,
    compositor: OctaveCompositor,
    tracker: OffsetTracker,
}

impl TerrainSystem {
    /// Validate parameters and build the grid (heights are generated on the first update)
    pub fn new(
        params: &TerrainParams,
        movement: &MovementParams,
        start: WorldOffset,
    ) -> Result<Self> {
        params.validate()?;
        movement.validate()?;

        let grid = TerrainGrid::new(params.map_size)?;
        let compositor = OctaveCompositor::new(params)?;

        log::info!(
            "Terrain grid {}x{} ({} vertices, {} indices, {} octaves)",
            params.map_size,
            params.map_size,
            params.vertex_count(),
            params.index_count(),
            params.octaves.len()
        );

        Ok(Self {
            grid,
            compositor,
            tracker: OffsetTracker::new(start, movement.speed_per_s),
        })
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn compositor(&self) -> &OctaveCompositor {
        &self.compositor
    }

    pub fn offset(&self) -> WorldOffset {
        self.tracker.offset()
    }

    /// Move the sampling offset; marks the grid dirty if any planar input was held
    pub fn apply_movement(&mut self, dt_s: f32, yaw_degrees: f32, input: &MovementInput) {
        if self.tracker.advance(dt_s, yaw_degrees, input) {
            self.grid.mark_dirty();
        }
    }

    /// Regenerate heights if stale
    ///
    /// # Returns
    /// `true` if the vertex buffer must be re-uploaded before drawing
    pub fn refresh(&mut self) -> bool {
        if !self.grid.is_dirty() {
            return false;
        }

        let start = Instant::now();
        let offset = self.tracker.offset();
        let regenerated = self.grid.regenerate(&self.compositor, offset);

        log::debug!(
            "Regenerated terrain at offset ({:.2}, {:.2}) in {:.2}ms",
            offset.x,
            offset.z,
            start.elapsed().as_secs_f64() * 1000.0
        );

        regenerated
    }

    /// Full frame step: apply movement, then regenerate if needed
    ///
    /// # Arguments
    /// * `dt_s` - Elapsed time since the previous frame (seconds)
    /// * `yaw_degrees` - Camera heading used for planar movement
    /// * `input` - Planar directions held this frame
    pub fn update(&mut self, dt_s: f32, yaw_degrees: f32, input: &MovementInput) -> bool {
        self.apply_movement(dt_s, yaw_degrees, input);
        self.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_system() -> TerrainSystem {
        let params = TerrainParams {
            map_size: 8,
            ..Default::default()
        };
        TerrainSystem::new(&params, &MovementParams::default(), WorldOffset::ZERO).unwrap()
    }

    #[test]
    fn test_first_update_generates() {
        let mut system = small_system();
        assert!(system.grid().is_dirty());
        assert!(system.update(0.016, 0.0, &MovementInput::default()));
        assert!(!system.grid().is_dirty());
    }

    #[test]
    fn test_idle_frames_do_not_regenerate() {
        let mut system = small_system();
        system.update(0.016, 0.0, &MovementInput::default());

        for _ in 0..5 {
            assert!(!system.update(0.016, 90.0, &MovementInput::default()));
        }
    }

    #[test]
    fn test_forward_marks_dirty_and_moves_offset() {
        let mut system = small_system();
        system.refresh();

        let input = MovementInput {
            forward: true,
            ..Default::default()
        };
        system.apply_movement(1.0, 0.0, &input);

        assert!(system.grid().is_dirty());
        assert_eq!(system.offset(), WorldOffset::new(10.0, 0.0));

        assert!(system.refresh());
        assert_eq!(
            system.grid().height(0, 0),
            system.compositor().height(0, 0, WorldOffset::new(10.0, 0.0))
        );
    }

    #[test]
    fn test_moving_samples_shifted_terrain() {
        let mut system = small_system();
        system.refresh();
        let ahead = system.grid().height(3, 2);

        // Stepping one unit along +x shows what vertex (i + 1) saw before
        let params = MovementParams {
            speed_per_s: 1.0,
            ..Default::default()
        };
        let mut moved = TerrainSystem::new(
            &TerrainParams {
                map_size: 8,
                ..Default::default()
            },
            &params,
            WorldOffset::ZERO,
        )
        .unwrap();
        let input = MovementInput {
            forward: true,
            ..Default::default()
        };
        moved.update(1.0, 0.0, &input);

        assert_eq!(moved.grid().height(2, 2), ahead);
    }

    #[test]
    fn test_rejects_bad_config() {
        let params = TerrainParams {
            map_size: 1,
            ..Default::default()
        };
        assert!(
            TerrainSystem::new(&params, &MovementParams::default(), WorldOffset::ZERO).is_err()
        );

        let movement = MovementParams {
            speed_per_s: f32::INFINITY,
            ..Default::default()
        };
        assert!(
            TerrainSystem::new(&TerrainParams::default(), &movement, WorldOffset::ZERO).is_err()
        );
    }
}
