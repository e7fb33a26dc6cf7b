//! Error handling for window telemetry
//!
//! This module defines the error type shared by the primitives, the registry
//! and the configuration layer.

mod helpers;
mod types;

pub use types::{Result, TelemetryError};
