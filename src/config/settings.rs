//! Configuration settings for leave-extract.

use crate::error::{ConfigError, Result};
use crate::leave::LeaveType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub message: MessageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("leave-extract.toml"),
            PathBuf::from("config.toml"),
            dirs::config_dir()
                .map(|p| p.join("leave-extract/config.toml"))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|p| p.join(".leave-extract/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.extraction.max_input_len == Some(0) {
            return Err(ConfigError::Invalid("max_input_len must be > 0".to_string()).into());
        }

        let threshold = self.message.intent_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Invalid(format!(
                "intent_threshold must be within 0..=1, got {}",
                threshold
            ))
            .into());
        }

        self.message.default_leave_type()?;

        if self.message.day_type.trim().is_empty() {
            return Err(ConfigError::Invalid("day_type must not be empty".to_string()).into());
        }

        Ok(())
    }
}

/// Date extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Run the natural-language fallback when no structural pattern matches
    pub fallback_enabled: bool,
    /// Optional cap on input bytes; longer input is truncated before extraction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_input_len: Option<usize>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fallback_enabled: true,
            max_input_len: None,
        }
    }
}

/// Message handling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Intent predictions below this confidence are treated as unknown
    pub intent_threshold: f32,
    /// Leave type used when the message names none (keyword such as "casual" or "sl")
    pub default_leave_type: String,
    /// Day type reported for leave requests
    pub day_type: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            intent_threshold: 0.6,
            default_leave_type: "casual".to_string(),
            day_type: "Full Day".to_string(),
        }
    }
}

impl MessageConfig {
    /// Resolve the configured default leave type.
    pub fn default_leave_type(&self) -> Result<LeaveType> {
        self.default_leave_type
            .parse()
            .map_err(|_| ConfigError::UnknownLeaveType(self.default_leave_type.clone()).into())
    }
}
