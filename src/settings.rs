use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CameraError, Result};

pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.5;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;
pub const DEFAULT_ZOOM_MIN: f32 = 1.0;
pub const DEFAULT_ZOOM_MAX: f32 = 45.0;
pub const DEFAULT_PITCH_LIMIT: f32 = 89.0;
pub const DEFAULT_Z_NEAR: f32 = 0.1;
pub const DEFAULT_Z_FAR: f32 = 100.0;

/// Tuning parameters for a [`FirstPersonCamera`](crate::camera::FirstPersonCamera).
///
/// Every field has a default, so a settings file only needs the values it
/// wants to change. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// World units per second
    pub movement_speed: f32,
    /// Degrees per unit of mouse delta
    pub mouse_sensitivity: f32,
    /// Initial field of view
    pub zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]`, bounds inclusive;
    /// must stay below 90
    pub pitch_limit: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            zoom_min: DEFAULT_ZOOM_MIN,
            zoom_max: DEFAULT_ZOOM_MAX,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
        }
    }
}

impl CameraSettings {
    /// Parse settings from JSON and validate them
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::debug!("loaded camera settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the bounds the camera relies on for its invariants
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("movement_speed", self.movement_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be finite and >= 0, got {value}")));
            }
        }

        if !self.zoom_min.is_finite() || self.zoom_min <= 0.0 {
            return Err(invalid(format!("zoom_min must be > 0, got {}", self.zoom_min)));
        }
        if !self.zoom_max.is_finite() || self.zoom_max >= 180.0 {
            return Err(invalid(format!("zoom_max must be < 180, got {}", self.zoom_max)));
        }
        if self.zoom_min > self.zoom_max {
            return Err(invalid(format!(
                "zoom_min ({}) exceeds zoom_max ({})",
                self.zoom_min, self.zoom_max
            )));
        }
        if !(self.zoom_min..=self.zoom_max).contains(&self.zoom) {
            return Err(invalid(format!(
                "zoom {} outside [{}, {}]",
                self.zoom, self.zoom_min, self.zoom_max
            )));
        }

        if !(self.pitch_limit > 0.0 && self.pitch_limit < 90.0) {
            return Err(invalid(format!(
                "pitch_limit must be in (0, 90), got {}",
                self.pitch_limit
            )));
        }

        if !(self.z_near > 0.0 && self.z_near.is_finite()) {
            return Err(invalid(format!("z_near must be > 0, got {}", self.z_near)));
        }
        if !(self.z_far > self.z_near && self.z_far.is_finite()) {
            return Err(invalid(format!(
                "z_far ({}) must be greater than z_near ({})",
                self.z_far, self.z_near
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> CameraError {
    CameraError::InvalidSettings(message)
}
