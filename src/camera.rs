use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{CameraError, Result};
use crate::settings::CameraSettings;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;

/// Discrete movement directions, relative to the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Free-fly camera driven by per-frame keyboard, mouse and scroll deltas.
///
/// `front` is derived from `yaw`/`pitch` (degrees); `right` and `up` are
/// derived from `front` and the fixed `world_up`. The three stay unit length
/// and mutually orthogonal after every update.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    settings: CameraSettings,
}

impl FirstPersonCamera {
    /// Camera with default tuning
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::with_settings(position, world_up, yaw, pitch, CameraSettings::default())
    }

    pub fn with_settings(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
        settings: CameraSettings,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            zoom: settings.zoom,
            settings,
        };
        camera.update_vectors();
        log::debug!(
            "camera at {:?}, yaw {:.1}, pitch {:.1}, front {:?}",
            camera.position,
            camera.yaw,
            camera.pitch,
            camera.front
        );
        camera
    }

    /// Right-handed look-at transform from `position` towards `position + front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// OpenGL-convention perspective transform using `zoom` as vertical FOV.
    /// A non-positive or non-finite aspect ratio is treated as 1.0.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        Mat4::perspective_rh_gl(
            self.zoom.to_radians(),
            aspect,
            self.settings.z_near,
            self.settings.z_far,
        )
    }

    /// Translate along `front` or `right` by `movement_speed * delta_time`.
    ///
    /// Fails with [`CameraError::InvalidArgument`] for a negative or NaN
    /// `delta_time`, leaving the position untouched.
    pub fn apply_movement(&mut self, direction: CameraMovement, delta_time: f32) -> Result<()> {
        if delta_time.is_nan() || delta_time < 0.0 {
            return Err(CameraError::InvalidArgument {
                name: "delta_time",
                value: delta_time,
            });
        }

        let velocity = self.settings.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
        Ok(())
    }

    /// Turn by a mouse delta. Positive `y_offset` looks up.
    ///
    /// Non-finite deltas are ignored. Yaw is kept in `[-180, 180)`.
    pub fn apply_mouse_delta(&mut self, x_offset: f32, y_offset: f32) {
        let sensitivity = self.settings.mouse_sensitivity;
        let (dx, dy) = (x_offset * sensitivity, y_offset * sensitivity);
        if !dx.is_finite() || !dy.is_finite() {
            log::warn!("ignoring non-finite mouse delta ({x_offset}, {y_offset})");
            return;
        }

        self.yaw = wrap_degrees(self.yaw + dx);
        let limit = self.settings.pitch_limit;
        self.pitch = (self.pitch + dy).clamp(-limit, limit);

        self.update_vectors();
    }

    /// Narrow (positive) or widen (negative) the field of view.
    /// A NaN offset is ignored; infinities saturate at the zoom bounds.
    pub fn apply_scroll(&mut self, y_offset: f32) {
        if y_offset.is_nan() {
            log::warn!("ignoring NaN scroll offset");
            return;
        }
        self.zoom = (self.zoom - y_offset).clamp(self.settings.zoom_min, self.settings.zoom_max);
    }

    // front first; right and up both depend on it
    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.settings.movement_speed = speed;
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.settings.mouse_sensitivity = sensitivity;
    }
}

fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}
