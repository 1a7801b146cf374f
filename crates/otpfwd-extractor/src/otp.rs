//! Passcode extraction
//!
//! Six prioritized patterns, from labeled codes down to bare digit runs. A
//! candidate that looks like a phone number is vetoed so that the next pattern
//! gets a chance.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::rules::{Rule, RuleSet};

/// Minimum digit count for a candidate to be considered phone-shaped
const PHONE_SHAPE_MIN_DIGITS: usize = 9;

static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,4}\d{6,}").expect("Invalid phone shape regex"));

/// Passcode patterns in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OtpRule {
    /// Label token such as `OTP:` or `code-` followed by 4-8 digits
    Labeled,
    /// `123456 is your ... code`
    IsYourCode,
    /// `G-123456` or `Google Code: 123456`
    Google,
    /// Messenger name followed by a 6 or 7 digit code, possibly split
    Messenger,
    /// Six digits not adjacent to other digits
    #[serde(rename = "standalone-6")]
    Standalone6,
    /// Four digits not adjacent to other digits
    #[serde(rename = "standalone-4")]
    Standalone4,
}

impl OtpRule {
    /// All rules in priority order
    pub const ALL: [OtpRule; 6] = [
        OtpRule::Labeled,
        OtpRule::IsYourCode,
        OtpRule::Google,
        OtpRule::Messenger,
        OtpRule::Standalone6,
        OtpRule::Standalone4,
    ];

    /// Stable identifier reported in results
    pub fn id(&self) -> &'static str {
        match self {
            OtpRule::Labeled => "labeled",
            OtpRule::IsYourCode => "is-your-code",
            OtpRule::Google => "google",
            OtpRule::Messenger => "messenger",
            OtpRule::Standalone6 => "standalone-6",
            OtpRule::Standalone4 => "standalone-4",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            OtpRule::Labeled => {
                r"(?i)(?:otp|code|pin|verify|verification|secret|رمز|কড|kód|codice|código)\s*[:\s-]*\s*(\d{4,8})"
            }
            OtpRule::IsYourCode => {
                r"(?i)(\d{4,8})\s*(?:is your|হৈছে আপোনাৰ)\s*(?:facebook|whatsapp|verification)?\s*code"
            }
            OtpRule::Google => r"(?i)\b(?:G-|Google\s*Code:\s*)(\d{6})\b",
            OtpRule::Messenger => r"(?i)(?:whatsapp|facebook|fb|wa).{0,64}?(\d{3}[-\s]?\d{3,4})\b",
            OtpRule::Standalone6 => r"(?:^|\D)(\d{6})(?:\D|$)",
            OtpRule::Standalone4 => r"(?:^|\D)(\d{4})(?:\D|$)",
        }
    }
}

impl std::fmt::Display for OtpRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// An accepted passcode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpMatch {
    /// Passcode with separators removed
    pub code: String,
    /// Pattern that produced it
    pub rule: OtpRule,
}

/// Finds the passcode in a message
#[derive(Debug)]
pub struct OtpExtractor {
    rules: RuleSet<(), OtpMatch>,
}

impl OtpExtractor {
    /// Create an extractor with the standard patterns
    pub fn new() -> Self {
        Self::with_patterns(OtpRule::ALL.map(|rule| (rule, rule.pattern())))
    }

    /// Create an extractor from `(rule, pattern)` pairs in priority order
    pub(crate) fn with_patterns<'a>(patterns: impl IntoIterator<Item = (OtpRule, &'a str)>) -> Self {
        let rules = patterns
            .into_iter()
            .map(|(rule, pattern)| {
                Rule::new(rule.id(), pattern, move |caps, _: &()| accept_candidate(rule, caps))
            })
            .collect();

        Self {
            rules: RuleSet::new(rules),
        }
    }

    /// Extract the first validated passcode
    pub fn extract(&self, text: &str) -> Option<OtpMatch> {
        self.rules.first_match(text, &()).map(|found| found.value)
    }
}

impl Default for OtpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn accept_candidate(rule: OtpRule, caps: &Captures<'_>) -> Option<OtpMatch> {
    let code: String = caps
        .get(1)?
        .as_str()
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    if is_phone_shaped(&code) {
        return None;
    }

    Some(OtpMatch { code, rule })
}

/// Whether a cleaned candidate looks like a phone number rather than a passcode
pub fn is_phone_shaped(candidate: &str) -> bool {
    candidate.chars().count() >= PHONE_SHAPE_MIN_DIGITS && PHONE_SHAPE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<OtpMatch> {
        OtpExtractor::default().extract(text)
    }

    fn code(text: &str) -> Option<String> {
        extract(text).map(|m| m.code)
    }

    #[test]
    fn test_labeled_codes() {
        assert_eq!(code("OTP: 123456").as_deref(), Some("123456"));
        assert_eq!(code("code-4821").as_deref(), Some("4821"));
        assert_eq!(code("pin 99120").as_deref(), Some("99120"));
        assert_eq!(extract("Verification 55512").unwrap().rule, OtpRule::Labeled);
    }

    #[test]
    fn test_labeled_non_latin() {
        assert_eq!(code("رمز 7788").as_deref(), Some("7788"));
        assert_eq!(code("Su código: 246810").as_deref(), Some("246810"));
    }

    #[test]
    fn test_is_your_code() {
        let found = extract("482913 is your Facebook code").unwrap();
        assert_eq!(found.code, "482913");
        assert_eq!(found.rule, OtpRule::IsYourCode);
    }

    #[test]
    fn test_google() {
        let found = extract("G-771204 Use this to sign in").unwrap();
        assert_eq!(found.code, "771204");
        assert_eq!(found.rule, OtpRule::Google);
    }

    #[test]
    fn test_messenger_split_code() {
        let found = extract("Your WhatsApp code is 123-456").unwrap();
        assert_eq!(found.code, "123456");
        assert_eq!(found.rule, OtpRule::Messenger);
    }

    #[test]
    fn test_standalone_runs() {
        let found = extract("Use 918273 to continue").unwrap();
        assert_eq!(found.rule, OtpRule::Standalone6);
        assert_eq!(found.code, "918273");

        let found = extract("Enter 5521 now").unwrap();
        assert_eq!(found.rule, OtpRule::Standalone4);
        assert_eq!(found.code, "5521");
    }

    #[test]
    fn test_standalone_ignores_longer_runs() {
        assert_eq!(code("ref 1234567 then 654321").as_deref(), Some("654321"));
    }

    #[test]
    fn test_long_number_is_not_a_passcode() {
        assert!(extract("Your balance is 4921056391287").is_none());
    }

    #[test]
    fn test_labeled_capture_stops_at_eight_digits() {
        let found = extract("otp 8801712345").unwrap();
        assert_eq!(found.rule, OtpRule::Labeled);
        assert_eq!(found.code, "88017123");
    }

    #[test]
    fn test_phone_guard() {
        assert!(is_phone_shaped("8801712345"));
        assert!(is_phone_shaped("123456789"));
        assert!(!is_phone_shaped("12345678"));
        assert!(!is_phone_shaped(""));
    }

    #[test]
    fn test_phone_shaped_capture_falls_through_to_next_pattern() {
        let extractor = OtpExtractor::with_patterns([
            (OtpRule::Labeled, r"(?i)otp\s*(\d{9,})"),
            (OtpRule::Standalone4, OtpRule::Standalone4.pattern()),
        ]);
        let found = extractor.extract("otp 8801712345678 pin 4821").unwrap();
        assert_eq!(found.rule, OtpRule::Standalone4);
        assert_eq!(found.code, "4821");

        assert!(extractor.extract("otp 8801712345678").is_none());
    }

    #[test]
    fn test_split_separators_are_removed_before_the_guard() {
        let extractor = OtpExtractor::with_patterns([
            (OtpRule::Messenger, r"(?i)wa\s*(\d{3}[-\s]\d{3}[-\s]\d{4})"),
            (OtpRule::Standalone6, OtpRule::Standalone6.pattern()),
        ]);
        let found = extractor.extract("wa 880-171-2345 or 246810").unwrap();
        assert_eq!(found.rule, OtpRule::Standalone6);
        assert_eq!(found.code, "246810");
    }

    #[test]
    fn test_no_digits() {
        assert!(extract("").is_none());
        assert!(extract("hello there").is_none());
        assert!(extract("🇸🇩").is_none());
    }

    #[test]
    fn test_rule_ids() {
        let ids: Vec<_> = OtpExtractor::new().rules.ids().collect();
        assert_eq!(ids, OtpRule::ALL.map(|rule| rule.id()));
        assert_eq!(
            serde_json::to_string(&OtpRule::Standalone6).unwrap(),
            "\"standalone-6\""
        );
        assert_eq!(OtpRule::IsYourCode.to_string(), "is-your-code");
    }
}
