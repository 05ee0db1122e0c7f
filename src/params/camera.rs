//! Fly camera projection and orientation limits.

/// Free-flying camera configuration
#[derive(Debug, Clone)]
pub struct CameraParams {
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    /// Must cover the grid diagonal (~724 for a 512 map)
    pub far_plane: f32,

    /// Initial eye height above y = 0 (world units)
    pub start_height: f32,

    /// Pitch is clamped to ±this value to keep the up vector well defined
    pub pitch_limit_degrees: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            start_height: 10.0,
            pitch_limit_degrees: 89.9,
        }
    }
}
