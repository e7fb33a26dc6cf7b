//! Error types for window telemetry

use thiserror::Error;

/// Result type alias for window telemetry
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Main error type for window telemetry
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A construction or query parameter is outside its allowed range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A window with the same name is already registered
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
