//! Scripted input traces: a recorded sequence of [`FrameInput`]s replayed
//! against a fresh camera without a window.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{FirstPersonCamera, DEFAULT_PITCH, DEFAULT_YAW};
use crate::error::{CameraError, Result};
use crate::frame;
use crate::input::FrameInput;
use crate::settings::CameraSettings;

/// Starting pose for a replay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    pub position: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
        }
    }
}

impl CameraPose {
    /// Reject poses the camera can't hold: non-finite values, a pitch
    /// beyond the clamp, or a `world_up` that is zero or parallel to front
    pub fn validate(&self, settings: &CameraSettings) -> Result<()> {
        if !self.position.is_finite() {
            return Err(invalid(format!("start position must be finite, got {}", self.position)));
        }
        if !self.yaw.is_finite() || !self.pitch.is_finite() {
            return Err(invalid(format!(
                "start yaw/pitch must be finite, got {}/{}",
                self.yaw, self.pitch
            )));
        }
        if self.pitch.abs() > settings.pitch_limit {
            return Err(invalid(format!(
                "start pitch {} exceeds pitch_limit {}",
                self.pitch, settings.pitch_limit
            )));
        }
        if !self.world_up.is_finite() || self.world_up.length_squared() == 0.0 {
            return Err(invalid(format!(
                "world_up must be finite and non-zero, got {}",
                self.world_up
            )));
        }
        // front can't be parallel to world_up, or right has no direction
        let oriented = FirstPersonCamera::new(Vec3::ZERO, self.world_up, self.yaw, self.pitch);
        if !oriented.right().is_finite() || !oriented.up().is_finite() {
            return Err(invalid(format!(
                "start orientation is parallel to world_up {}",
                self.world_up
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> CameraError {
    CameraError::InvalidSettings(message)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputTrace {
    pub start: CameraPose,
    pub settings: Option<CameraSettings>,
    pub frames: Vec<FrameInput>,
}

impl InputTrace {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let trace = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        log::debug!("loaded {} frames from {}", trace.frames.len(), path.display());
        Ok(trace)
    }

    /// Fresh camera at the trace's start pose
    pub fn camera(&self) -> Result<FirstPersonCamera> {
        let settings = self.settings.unwrap_or_default();
        settings.validate()?;
        self.start.validate(&settings)?;
        let CameraPose {
            position,
            world_up,
            yaw,
            pitch,
        } = self.start;
        Ok(FirstPersonCamera::with_settings(position, world_up, yaw, pitch, settings))
    }
}

/// Camera state after one replayed frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub position: Vec3,
    pub front: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub view: [[f32; 4]; 4],
    pub movement_skipped: bool,
}

/// Run every frame of `trace` through [`frame::step`]
pub fn replay(trace: &InputTrace, aspect_ratio: f32) -> Result<Vec<FrameReport>> {
    let mut camera = trace.camera()?;

    let reports = trace
        .frames
        .iter()
        .zip(0u64..)
        .map(|(input, number)| {
            let output = frame::step(&mut camera, input, aspect_ratio);
            FrameReport {
                frame: number,
                position: camera.position(),
                front: camera.front(),
                yaw: camera.yaw(),
                pitch: camera.pitch(),
                zoom: output.fov,
                view: output.view.to_cols_array_2d(),
                movement_skipped: output.movement_skipped,
            }
        })
        .collect();

    Ok(reports)
}
