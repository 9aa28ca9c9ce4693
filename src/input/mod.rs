pub mod controller;
pub mod winit_adapter;

use serde::{Deserialize, Serialize};

use crate::camera::CameraMovement;

pub use controller::{Button, Controller};
pub use winit_adapter::WinitController;

/// Movement keys held during a frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementState {
    /// W/S/A/D mapped to forward/backward/left/right
    pub fn from_controller(controller: &impl Controller) -> Self {
        Self {
            forward: controller.is_down(Button::KeyW),
            backward: controller.is_down(Button::KeyS),
            left: controller.is_down(Button::KeyA),
            right: controller.is_down(Button::KeyD),
        }
    }

    /// Active directions in forward, backward, left, right order
    pub fn directions(&self) -> impl Iterator<Item = CameraMovement> {
        [
            (self.forward, CameraMovement::Forward),
            (self.backward, CameraMovement::Backward),
            (self.left, CameraMovement::Left),
            (self.right, CameraMovement::Right),
        ]
        .into_iter()
        .filter_map(|(held, direction)| held.then_some(direction))
    }

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }
}

/// Everything the camera consumes in one frame.
///
/// `mouse_delta` uses camera convention: positive y looks up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    pub movement: MovementState,
    pub delta_time: f32,
    pub mouse_delta: (f32, f32),
    pub scroll: f32,
}
