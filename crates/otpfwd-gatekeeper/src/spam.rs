//! Denylist-based spam rejection

use crate::GateConfig;
use tracing::debug;

/// Phrases that disqualify a message (matched as lowercase substrings)
pub const DEFAULT_DENYLIST: &[&str] = &[
    "welcome",
    "hey there",
    "joined",
    "left",
    "group link",
    "bot link",
    "https://t.me/",
    "subscribe to get otp",
    "premium otp",
    "click here",
    "join now",
    "channel for otp",
    "admin here",
    "https://discord.gg/",
    "http://",
    "https://",
];

/// Stateless spam filter run before any extraction
///
/// Any denylisted phrase anywhere in the lower-cased text rejects the message;
/// the order of phrases is irrelevant.
#[derive(Debug, Clone)]
pub struct SpamGate {
    enabled: bool,
    phrases: Vec<String>,
}

impl SpamGate {
    /// Create a gate from configuration
    pub fn new(config: &GateConfig) -> Self {
        let phrases = DEFAULT_DENYLIST
            .iter()
            .map(|p| p.to_string())
            .chain(
                config
                    .extra_phrases
                    .iter()
                    .map(|p| p.trim().to_lowercase())
                    .filter(|p| !p.is_empty()),
            )
            .collect();

        Self {
            enabled: config.enabled,
            phrases,
        }
    }

    /// Return the first denylisted phrase found in `text`, if any
    pub fn check(&self, text: &str) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        let lower = text.to_lowercase();
        let hit = self
            .phrases
            .iter()
            .find(|phrase| lower.contains(phrase.as_str()))
            .map(String::as_str);
        if let Some(phrase) = hit {
            debug!("Denylisted phrase '{}' found", phrase);
        }
        hit
    }

    /// Whether `text` must be dropped as spam
    pub fn is_spam(&self, text: &str) -> bool {
        self.check(text).is_some()
    }

    /// The active denylist
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Default for SpamGate {
    fn default() -> Self {
        Self::new(&GateConfig::default())
    }
}
