use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};
use super::{FrameInput, MovementState};

/// Pixels per scroll "line" for touchpads reporting pixel deltas
pub const PIXELS_PER_LINE: f32 = 20.0;

pub const INITIAL_VIEWPORT_WIDTH: u32 = 800;
pub const INITIAL_VIEWPORT_HEIGHT: u32 = 600;

/// Adapter that accumulates Winit events between frames and hands the
/// camera one [`FrameInput`] per frame via [`sample`](Self::sample).
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Last cursor position; `None` until the first sample arrives
    mouse_position: Option<(f32, f32)>,
    /// Screen-space motion since the last sample (y grows downward)
    mouse_delta: (f32, f32),
    /// Scroll lines since the last sample
    scroll_delta: f32,
    viewport: (u32, u32),
}

impl WinitController {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            mouse_position: None,
            mouse_delta: (0.0, 0.0),
            scroll_delta: 0.0,
            viewport: (INITIAL_VIEWPORT_WIDTH, INITIAL_VIEWPORT_HEIGHT),
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
                };
                self.scroll(lines);
            }
            WindowEvent::Resized(size) => self.resized(size.width, size.height),
            WindowEvent::Focused(false) => {
                self.release_all();
                self.forget_cursor();
            }
            WindowEvent::CursorLeft { .. } => self.forget_cursor(),
            _ => {}
        }
    }

    /// Raw pointer motion, for hosts that grab and hide the cursor.
    ///
    /// Feed either this or `CursorMoved` for look input, not both, or the
    /// same motion is counted twice.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    pub fn press(&mut self, button: Button) {
        self.pressed_keys.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed_keys.remove(&button);
    }

    /// Drop every held button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Treat the next cursor sample as the first one again
    pub fn forget_cursor(&mut self) {
        self.mouse_position = None;
    }

    /// Absolute cursor position in window pixels. The first sample only
    /// records the position so the camera doesn't jump on entry.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((last_x, last_y)) = self.mouse_position {
            self.mouse_delta.0 += x - last_x;
            self.mouse_delta.1 += y - last_y;
        }
        self.mouse_position = Some((x, y));
    }

    /// Relative motion in screen convention (y down)
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Scroll in lines; positive scrolls away from the user
    pub fn scroll(&mut self, lines: f32) {
        self.scroll_delta += lines;
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        log::debug!("viewport resized to {width}x{height}");
        self.viewport = (width, height);
    }

    /// Snapshot this frame's input and reset the accumulated deltas
    pub fn sample(&mut self, delta_time: f32) -> FrameInput {
        let input = FrameInput {
            movement: MovementState::from_controller(&*self),
            delta_time,
            // screen y grows downward, camera pitch grows upward
            mouse_delta: (self.mouse_delta.0, -self.mouse_delta.1),
            scroll: self.scroll_delta,
        };
        self.reset_deltas();
        input
    }

    /// Reset per-frame state (mouse and scroll deltas)
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Escape is held
    pub fn exit_requested(&self) -> bool {
        self.is_down(Button::Escape)
    }

    /// Width over height of the last reported viewport; 1.0 while minimised
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.viewport;
        if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    /// Accumulated screen-space mouse delta since last reset
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => self.press(button),
            ElementState::Released => self.release(button),
        }
    }

    /// Map Winit KeyCode to Button; arrow keys mirror WASD
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Button::KeyW),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Button::KeyA),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Button::KeyS),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Button::KeyD),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
