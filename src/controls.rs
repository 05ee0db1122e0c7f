//! Keyboard state: which controls are currently held.

use winit::keyboard::KeyCode;

use crate::camera::CameraInput;
use crate::movement::MovementInput;

/// A bindable action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
}

impl Control {
    pub fn from_keycode(value: KeyCode) -> Option<Self> {
        match value {
            KeyCode::KeyW => Some(Self::Forward),
            KeyCode::KeyS => Some(Self::Back),
            KeyCode::KeyA => Some(Self::StrafeLeft),
            KeyCode::KeyD => Some(Self::StrafeRight),
            KeyCode::Space => Some(Self::Ascend),
            KeyCode::ShiftLeft => Some(Self::Descend),
            KeyCode::ArrowUp => Some(Self::PitchUp),
            KeyCode::ArrowDown => Some(Self::PitchDown),
            KeyCode::ArrowLeft => Some(Self::YawLeft),
            KeyCode::ArrowRight => Some(Self::YawRight),
            _ => None,
        }
    }
}

/// Held controls, split into terrain movement and camera input each frame
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    movement: MovementInput,
    camera: CameraInput,
}

impl KeyState {
    /// Record a key press or release
    ///
    /// # Returns
    /// `true` if the key is bound to a control
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(control) = Control::from_keycode(key) else {
            return false;
        };

        let flag = match control {
            Control::Forward => &mut self.movement.forward,
            Control::Back => &mut self.movement.back,
            Control::StrafeLeft => &mut self.movement.left,
            Control::StrafeRight => &mut self.movement.right,
            Control::Ascend => &mut self.camera.ascend,
            Control::Descend => &mut self.camera.descend,
            Control::PitchUp => &mut self.camera.pitch_up,
            Control::PitchDown => &mut self.camera.pitch_down,
            Control::YawLeft => &mut self.camera.yaw_left,
            Control::YawRight => &mut self.camera.yaw_right,
        };
        *flag = pressed;
        true
    }

    /// Drop every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn movement_input(&self) -> MovementInput {
        self.movement
    }

    pub fn camera_input(&self) -> CameraInput {
        self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::default();
        assert!(keys.handle_key(KeyCode::KeyW, true));
        assert!(keys.handle_key(KeyCode::KeyD, true));
        assert!(keys.movement_input().forward);
        assert!(keys.movement_input().right);

        keys.handle_key(KeyCode::KeyW, false);
        assert!(!keys.movement_input().forward);
        assert!(keys.movement_input().any());
    }

    #[test]
    fn test_camera_keys_do_not_move_terrain() {
        let mut keys = KeyState::default();
        for key in [
            KeyCode::Space,
            KeyCode::ShiftLeft,
            KeyCode::ArrowUp,
            KeyCode::ArrowLeft,
        ] {
            assert!(keys.handle_key(key, true));
        }

        assert!(!keys.movement_input().any());
        let camera = keys.camera_input();
        assert!(camera.ascend && camera.descend && camera.pitch_up && camera.yaw_left);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut keys = KeyState::default();
        assert!(!keys.handle_key(KeyCode::KeyQ, true));
        assert_eq!(keys.movement_input(), MovementInput::default());
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyState::default();
        keys.handle_key(KeyCode::KeyA, true);
        keys.handle_key(KeyCode::ArrowRight, true);
        keys.release_all();
        assert_eq!(keys.movement_input(), MovementInput::default());
        assert_eq!(keys.camera_input(), CameraInput::default());
    }
}
