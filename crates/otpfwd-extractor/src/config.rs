//! Configuration for the extraction pipeline

use serde::{Deserialize, Serialize};

use crate::ExtractorError;

/// Upper bound allowed for `max_text_length`
const MAX_TEXT_LENGTH_LIMIT: usize = 16 * 1024 * 1024;

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Messages longer than this (in bytes) are rejected as oversized; unset means no cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_text_length: Option<usize>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        match self.max_text_length {
            Some(0) => Err(ExtractorError::Config(
                "max_text_length must be greater than 0".to_string(),
            )),
            Some(max) if max > MAX_TEXT_LENGTH_LIMIT => Err(ExtractorError::Config(format!(
                "max_text_length cannot exceed {}",
                MAX_TEXT_LENGTH_LIMIT
            ))),
            _ => Ok(()),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
