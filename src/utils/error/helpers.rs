//! Helper functions for creating specific error types

use super::types::TelemetryError;

/// Helper functions for creating specific errors
impl TelemetryError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn already_registered<S: Into<String>>(name: S) -> Self {
        Self::AlreadyRegistered(name.into())
    }

    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::NotFound(name.into())
    }

    /// Whether the error was raised by parameter validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
