//! Free-flying camera with keyboard yaw/pitch and vertical flight.
//!
//! Planar movement is handled by the terrain offset, so the camera only ever
//! moves up and down; its yaw is shared with the offset tracker.

use glam::{Mat4, Vec3};

use crate::params::{CameraParams, MovementParams};

/// Camera-only controls held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraInput {
    pub ascend: bool,
    pub descend: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
}

/// Camera hovering over the centre of the terrain grid
pub struct FlyCamera {
    pub position: Vec3,
    /// Heading in degrees (0 = +X, 90 = +Z)
    pub yaw_degrees: f32,
    /// Elevation in degrees, clamped to ±`pitch_limit_degrees`
    pub pitch_degrees: f32,
    params: CameraParams,
}

impl FlyCamera {
    /// Place the camera above the middle of a `map_size` grid
    pub fn new(params: CameraParams, map_size: usize) -> Self {
        let centre = map_size as f32 / 2.0 - 0.5;
        Self {
            position: Vec3::new(centre, params.start_height, centre),
            yaw_degrees: 0.0,
            pitch_degrees: 0.0,
            params,
        }
    }

    /// Apply vertical flight and rotation for one frame
    pub fn update(&mut self, dt_s: f32, input: &CameraInput, movement: &MovementParams) {
        let climb = movement.speed_per_s * dt_s;
        if input.ascend {
            self.position.y += climb;
        }
        if input.descend {
            self.position.y -= climb;
        }

        let turn = movement.turn_speed_deg_per_s * dt_s;
        if input.pitch_up {
            self.pitch_degrees += turn;
        }
        if input.pitch_down {
            self.pitch_degrees -= turn;
        }
        if input.yaw_right {
            self.yaw_degrees += turn;
        }
        if input.yaw_left {
            self.yaw_degrees -= turn;
        }

        let limit = self.params.pitch_limit_degrees;
        self.pitch_degrees = self.pitch_degrees.clamp(-limit, limit);
    }

    /// Unit view direction from yaw and pitch
    pub fn direction(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        let pitch = self.pitch_degrees.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        let direction = self.direction();
        let right = direction.cross(Vec3::Y).normalize();
        let up = right.cross(direction).normalize();
        Mat4::look_at_rh(self.position, self.position + direction, up)
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, aspect_ratio: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.params.fov_degrees.to_radians(),
            aspect_ratio,
            self.params.near_plane,
            self.params.far_plane,
        );
        proj * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> FlyCamera {
        FlyCamera::new(CameraParams::default(), 512)
    }

    #[test]
    fn test_starts_over_grid_centre() {
        let camera = camera();
        assert_eq!(camera.position, Vec3::new(255.5, 10.0, 255.5));
        assert!((camera.direction() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_vertical_flight() {
        let mut camera = camera();
        let input = CameraInput {
            ascend: true,
            ..Default::default()
        };
        camera.update(0.5, &input, &MovementParams::default());
        assert_eq!(camera.position.y, 15.0);
        assert_eq!(camera.position.x, 255.5);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = camera();
        let input = CameraInput {
            pitch_up: true,
            ..Default::default()
        };
        camera.update(10.0, &input, &MovementParams::default());
        assert_eq!(camera.pitch_degrees, 89.9);

        let input = CameraInput {
            pitch_down: true,
            ..Default::default()
        };
        camera.update(10.0, &input, &MovementParams::default());
        assert_eq!(camera.pitch_degrees, -89.9);
    }

    #[test]
    fn test_yaw_turns_at_turn_speed() {
        let mut camera = camera();
        let input = CameraInput {
            yaw_right: true,
            ..Default::default()
        };
        camera.update(0.9, &input, &MovementParams::default());
        assert!((camera.yaw_degrees - 90.0).abs() < 1e-4);
        assert!((camera.direction() - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let mut camera = camera();
        camera.pitch_degrees = -30.0;
        camera.yaw_degrees = 217.0;

        let view_proj = camera.view_proj(1000.0 / 600.0);
        assert_ne!(view_proj, Mat4::IDENTITY);
        assert!(view_proj.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
