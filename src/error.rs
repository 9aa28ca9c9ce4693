use thiserror::Error;

/// Errors produced by the camera and its configuration loaders
#[derive(Debug, Error)]
pub enum CameraError {
    /// An operation received an argument outside its domain
    /// (currently only a negative or NaN frame delta)
    #[error("invalid argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: f32 },

    /// Settings failed validation
    #[error("invalid camera settings: {0}")]
    InvalidSettings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CameraError>;
