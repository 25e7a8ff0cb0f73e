//! Error types for insamo-core

use thiserror::Error;

/// Core error types
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unrecognized device code prefix: {0}")]
    UnknownDevicePrefix(String),

    #[error("No valid devices configured")]
    NoValidDevices,
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
