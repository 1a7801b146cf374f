//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};

/// Configuration for the spam gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Reject denylisted messages (disable only for debugging)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Phrases rejected in addition to the built-in denylist
    #[serde(default)]
    pub extra_phrases: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extra_phrases: Vec::new(),
        }
    }
}

impl GateConfig {
    /// A gate that lets every message through
    pub fn permissive() -> Self {
        Self {
            enabled: false,
            extra_phrases: Vec::new(),
        }
    }

    /// Default gate plus additional denylisted phrases
    pub fn with_extra_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            extra_phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GatekeeperError> {
        toml::from_str(toml_str)
            .map_err(|e| GatekeeperError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, GatekeeperError> {
        toml::to_string_pretty(self)
            .map_err(|e| GatekeeperError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

fn default_true() -> bool {
    true
}
