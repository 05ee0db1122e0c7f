//! Planar movement through the noise domain.
//!
//! The mesh never moves: walking translates the point at which the noise is
//! sampled instead. Only planar input changes the offset; vertical flight and
//! turning belong to the camera.

/// Translation of the viewpoint in noise space (world units)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldOffset {
    pub x: f32,
    pub z: f32,
}

impl WorldOffset {
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

/// Planar directions held this frame (independent, combinable)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Accumulates the world offset from directional input
#[derive(Debug, Clone)]
pub struct OffsetTracker {
    offset: WorldOffset,
    speed_per_s: f32,
}

impl OffsetTracker {
    pub fn new(start: WorldOffset, speed_per_s: f32) -> Self {
        Self {
            offset: start,
            speed_per_s,
        }
    }

    pub fn offset(&self) -> WorldOffset {
        self.offset
    }

    /// Advance by `speed × dt` along the yaw heading
    ///
    /// Forward/back follow `yaw`, strafing follows `yaw - 90°`.
    ///
    /// # Returns
    /// `true` if any planar input was active, i.e. the terrain is now stale
    pub fn advance(&mut self, dt_s: f32, yaw_degrees: f32, input: &MovementInput) -> bool {
        let step = self.speed_per_s * dt_s;
        let heading = yaw_degrees.to_radians();
        let strafe = (yaw_degrees - 90.0).to_radians();

        if input.forward {
            self.offset.x += step * heading.cos();
            self.offset.z += step * heading.sin();
        }
        if input.back {
            self.offset.x -= step * heading.cos();
            self.offset.z -= step * heading.sin();
        }
        if input.left {
            self.offset.x += step * strafe.cos();
            self.offset.z += step * strafe.sin();
        }
        if input.right {
            self.offset.x -= step * strafe.cos();
            self.offset.z -= step * strafe.sin();
        }

        input.any()
    }
}
