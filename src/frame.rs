use std::time::Instant;

use glam::Mat4;

use crate::camera::FirstPersonCamera;
use crate::error::CameraError;
use crate::input::FrameInput;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started
    pub time: f32,
    /// Seconds since the previous tick
    pub delta: f32,
}

/// Minimal frame clock - tracks frame count and delta time
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_tick: Instant,
}

impl FrameClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            frame_number: 0,
            start_time: start,
            last_tick: start,
        }
    }

    /// Advance to now
    pub fn tick(&mut self) -> FrameInfo {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. An instant earlier than the last tick yields a
    /// zero delta rather than a negative one.
    pub fn tick_at(&mut self, now: Instant) -> FrameInfo {
        let delta = now.saturating_duration_since(self.last_tick).as_secs_f32();
        let time = now.saturating_duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo {
            number: self.frame_number,
            time,
            delta,
        };

        self.frame_number += 1;
        if now > self.last_tick {
            self.last_tick = now;
        }
        info
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// What the renderer needs after a frame's input has been applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub view: Mat4,
    pub projection: Mat4,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Movement was rejected (bad delta time) and skipped for this frame
    pub movement_skipped: bool,
}

/// Apply one frame of input to the camera.
///
/// Movement uses the orientation from before this frame's mouse delta.
/// A rejected movement is logged and skipped; mouse and scroll still apply.
pub fn step(camera: &mut FirstPersonCamera, input: &FrameInput, aspect_ratio: f32) -> FrameOutput {
    let movement_skipped = match apply_held_movement(camera, input) {
        Ok(()) => false,
        Err(err) => {
            log::warn!("skipping frame movement: {err}");
            true
        }
    };

    let (dx, dy) = input.mouse_delta;
    if dx != 0.0 || dy != 0.0 {
        camera.apply_mouse_delta(dx, dy);
    }
    if input.scroll != 0.0 {
        camera.apply_scroll(input.scroll);
    }

    log::trace!(
        "frame: position {:?}, yaw {:.2}, pitch {:.2}, zoom {:.2}",
        camera.position(),
        camera.yaw(),
        camera.pitch(),
        camera.zoom()
    );

    FrameOutput {
        view: camera.view_matrix(),
        projection: camera.projection_matrix(aspect_ratio),
        fov: camera.zoom(),
        movement_skipped,
    }
}

fn apply_held_movement(
    camera: &mut FirstPersonCamera,
    input: &FrameInput,
) -> Result<(), CameraError> {
    for direction in input.movement.directions() {
        camera.apply_movement(direction, input.delta_time)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_clock_counts_frames() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let first = clock.tick_at(start + Duration::from_millis(16));
        let second = clock.tick_at(start + Duration::from_millis(48));

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert_eq!(clock.frame_count(), 2);
        assert!((first.delta - 0.016).abs() < 1e-6);
        assert!((second.delta - 0.032).abs() < 1e-6);
        assert!((second.time - 0.048).abs() < 1e-6);
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start + Duration::from_millis(100));

        let info = clock.tick_at(start);
        assert_eq!(info.delta, 0.0);
        assert_eq!(info.time, 0.0);
    }

    #[test]
    fn test_clock_tick_measures_real_time() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(10));
        let info = clock.tick();
        assert!(info.delta >= 0.009);
    }
}
