//! Error types for leave request extraction.
//!
//! Date extraction itself is total and never fails; these errors only
//! surface at the edges (configuration loading and message handling).

use thiserror::Error;

/// Main error type for leave-extract operations.
#[derive(Error, Debug)]
pub enum LeaveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Message is required")]
    EmptyMessage,
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown leave type: {0}")]
    UnknownLeaveType(String),
}

/// Result type alias for leave-extract operations.
pub type Result<T> = std::result::Result<T, LeaveError>;
