//! Country module - reference records and resolved country triples

use crate::text::title_case;
use serde::{Deserialize, Serialize};

/// Name reported when no country could be resolved
pub const DEFAULT_COUNTRY_NAME: &str = "Unknown";

/// Flag reported when no country could be resolved
pub const DEFAULT_FLAG: &str = "🌍";

/// Dial code reported when no dial code could be resolved
pub const DEFAULT_DIAL_CODE: &str = "Unknown";

/// One entry of the country table
///
/// Records are created once when the table is loaded and never mutated.
/// `key` is the canonical lowercase country name and is unique within a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Canonical lowercase key (e.g. `"united states"`)
    pub key: String,

    /// Regional-indicator flag glyph (e.g. `"🇺🇸"`)
    pub flag: Option<String>,

    /// International dialing code including the `+` (e.g. `"+1"`)
    pub dial_code: Option<String>,

    /// Optional alternative name matched case-insensitively by name lookups
    pub name: Option<String>,
}

impl CountryRecord {
    /// Create a record with a flag and dial code
    pub fn new(key: impl Into<String>, flag: impl Into<String>, dial_code: impl Into<String>) -> Self {
        Self {
            key: key.into().to_lowercase(),
            flag: Some(flag.into()),
            dial_code: Some(dial_code.into()),
            name: None,
        }
    }

    /// Attach an alternative display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Title-cased key, used wherever the country is shown to a reader
    pub fn display_name(&self) -> String {
        title_case(&self.key)
    }

    /// Whether `candidate` names this record (key or alternative name, ignoring case)
    pub fn answers_to(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        let candidate = candidate.to_lowercase();
        if self.key.to_lowercase() == candidate {
            return true;
        }
        self.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase() == candidate)
    }

    /// Resolved triple for this record, filling gaps with the defaults
    pub fn to_info(&self) -> CountryInfo {
        CountryInfo {
            name: self.display_name(),
            flag: self.flag.clone().unwrap_or_else(|| DEFAULT_FLAG.to_string()),
            dial_code: self
                .dial_code
                .clone()
                .unwrap_or_else(|| DEFAULT_DIAL_CODE.to_string()),
        }
    }
}

/// A resolved country: display name, flag and dial code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryInfo {
    /// Display name (title-cased)
    pub name: String,

    /// Flag glyph, `🌍` when unknown
    pub flag: String,

    /// Dial code, `Unknown` when unknown
    pub dial_code: String,
}

impl CountryInfo {
    /// The `Unknown` / `🌍` / `Unknown` triple
    pub fn unknown() -> Self {
        Self {
            name: DEFAULT_COUNTRY_NAME.to_string(),
            flag: DEFAULT_FLAG.to_string(),
            dial_code: DEFAULT_DIAL_CODE.to_string(),
        }
    }

    /// Whether a country name has been resolved
    pub fn is_resolved(&self) -> bool {
        self.name != DEFAULT_COUNTRY_NAME
    }

    /// Whether the dial code is known
    pub fn has_dial_code(&self) -> bool {
        self.dial_code != DEFAULT_DIAL_CODE
    }

    /// `"<flag> <name>"`
    pub fn display(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }
}

impl Default for CountryInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

impl std::fmt::Display for CountryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.flag, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_info() {
        let record = CountryRecord::new("united states", "🇺🇸", "+1");
        let info = record.to_info();
        assert_eq!(info.name, "United States");
        assert_eq!(info.flag, "🇺🇸");
        assert_eq!(info.dial_code, "+1");
    }

    #[test]
    fn test_record_missing_fields_use_defaults() {
        let record = CountryRecord {
            key: "atlantis".to_string(),
            flag: None,
            dial_code: None,
            name: None,
        };
        let info = record.to_info();
        assert_eq!(info.name, "Atlantis");
        assert_eq!(info.flag, DEFAULT_FLAG);
        assert_eq!(info.dial_code, DEFAULT_DIAL_CODE);
    }

    #[test]
    fn test_answers_to_key_and_alias() {
        let record = CountryRecord::new("uk", "🇬🇧", "+44").with_name("United Kingdom");
        assert!(record.answers_to("UK"));
        assert!(record.answers_to("united kingdom"));
        assert!(!record.answers_to("England"));
        assert!(!record.answers_to(""));
    }

    #[test]
    fn test_unknown_info() {
        let info = CountryInfo::unknown();
        assert!(!info.is_resolved());
        assert!(!info.has_dial_code());
        assert_eq!(info.display(), "🌍 Unknown");
        assert_eq!(info.to_string(), info.display());
    }
}
