//! Error types for spinner configuration and lifecycle.
//!
//! Control operations (`start`, `message`, `stop`, `stop_with_error`) never
//! return errors: invalid indices and redundant stops are absorbed as no-ops.
//! Only configuration loading and teardown can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown color: {0}")]
    InvalidColor(String),
}

#[derive(Error, Debug)]
pub enum SpinnerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render loop panicked before restoring the terminal")]
    RenderLoopPanicked,
}
