//! Result module - what the pipeline hands to the forwarding shell

use crate::CountryInfo;
use serde::{Deserialize, Serialize};

/// Number reported when no phone number could be captured
pub const NUMBER_NOT_FOUND: &str = "Not Found";

/// Country block of an extraction result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryField {
    /// `"<flag> <name>"`
    pub display: String,

    /// Country name (title-cased) or `Unknown`
    pub name: String,

    /// Flag glyph or `🌍`
    pub flag: String,

    /// Dial code or `Unknown`
    pub dial_code: String,
}

impl From<CountryInfo> for CountryField {
    fn from(info: CountryInfo) -> Self {
        Self {
            display: info.display(),
            name: info.name,
            flag: info.flag,
            dial_code: info.dial_code,
        }
    }
}

/// Structured, privacy-masked summary of one accepted OTP message
///
/// Has no identity beyond the message it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The passcode, digits only
    pub otp_code: String,

    /// Resolved origin country
    pub country: CountryField,

    /// Redacted phone number, or `Not Found`
    pub masked_number: String,

    /// Service label (e.g. `WhatsApp`, `General Service`)
    pub service: String,

    /// Identifier of the passcode pattern that matched
    pub matched_pattern_id: String,
}

/// Why a message must not be forwarded
///
/// These are expected outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// A denylisted phrase occurred in the text
    Spam {
        /// The phrase that matched
        phrase: String,
    },

    /// No passcode pattern matched
    NoPasscode,

    /// The text is longer than the configured maximum
    Oversized {
        /// Length of the text in bytes
        len: usize,
        /// Configured maximum in bytes
        max: usize,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Spam { phrase } => write!(f, "spam (matched '{}')", phrase),
            Rejection::NoPasscode => write!(f, "no passcode found"),
            Rejection::Oversized { len, max } => {
                write!(f, "message too long: {} bytes (max: {})", len, max)
            }
        }
    }
}

/// Outcome of classifying one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Classification {
    /// Forward this result
    Accepted(ExtractionResult),

    /// Drop the message
    Rejected(Rejection),
}

impl Classification {
    /// The extraction result, if the message was accepted
    pub fn accepted(&self) -> Option<&ExtractionResult> {
        match self {
            Classification::Accepted(result) => Some(result),
            Classification::Rejected(_) => None,
        }
    }

    /// Consume into the extraction result, if the message was accepted
    pub fn into_accepted(self) -> Option<ExtractionResult> {
        match self {
            Classification::Accepted(result) => Some(result),
            Classification::Rejected(_) => None,
        }
    }

    /// The rejection reason, if the message was rejected
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Classification::Accepted(_) => None,
            Classification::Rejected(reason) => Some(reason),
        }
    }

    /// Whether the message must be dropped
    pub fn is_rejected(&self) -> bool {
        matches!(self, Classification::Rejected(_))
    }
}
