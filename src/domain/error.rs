//! Domain error types

use thiserror::Error;

/// Errors that can occur while enumerating, reconciling or persisting devices
#[derive(Error, Debug)]
pub enum IoConfigError {
    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Device registry error: {0}")]
    Registry(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid selection: index {index} is outside 0..{limit}")]
    InvalidSelection { index: usize, limit: usize },
}

/// Result type alias for device configuration operations
pub type IoConfigResult<T> = Result<T, IoConfigError>;
