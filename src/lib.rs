pub mod camera;
pub mod cli;
pub mod error;
pub mod frame;
pub mod input;
pub mod settings;
pub mod trace;
pub mod types;

pub use camera::{CameraMovement, FirstPersonCamera};
pub use error::CameraError;
pub use frame::{step, FrameClock, FrameInfo, FrameOutput};
pub use input::{FrameInput, MovementState, WinitController};
pub use settings::CameraSettings;
pub use types::CameraUniform;
