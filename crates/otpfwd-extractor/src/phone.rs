//! Phone number masking and capture

use std::sync::LazyLock;

use otpfwd_domain::NUMBER_NOT_FOUND;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Replacement for the hidden middle of a number
pub const MASK: &str = "****";

/// Inputs shorter than this are returned unchanged
const MIN_MASKABLE_LEN: usize = 7;

/// Two-digit country calling codes; 1 and 7 are single-digit, the rest three
const TWO_DIGIT_CALLING_CODES: &[&str] = &[
    "20", "27", "30", "31", "32", "33", "34", "36", "39", "40", "41", "43", "44", "45", "46",
    "47", "48", "49", "51", "52", "53", "54", "55", "56", "57", "58", "60", "61", "62", "63",
    "64", "65", "66", "81", "82", "84", "86", "90", "91", "92", "93", "94", "95", "98",
];

static LABELED_MASKED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Number|Phone|মোবাইল|Tel|T:)\s*[:\s]*(\d+\*{3,}\d+)")
        .expect("Invalid labeled masked number regex")
});

static LABELED_RAW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Number|Phone|মোবাইল|Tel|T:)\s*[:\s]*(\+?\d{7,15})")
        .expect("Invalid labeled number regex")
});

static BARE_MASKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2,}\*{3,}\d{2,}").expect("Invalid masked number regex"));

static BARE_INTERNATIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\d{7,15}").expect("Invalid international number regex"));

/// Length of the E.164 country calling code at the start of `digits`
///
/// Only the leading digits are inspected; the result is 1, 2 or 3.
pub fn calling_code_len(digits: &str) -> usize {
    match digits.as_bytes().first() {
        Some(b'1') | Some(b'7') => 1,
        _ if digits
            .get(..2)
            .is_some_and(|lead| TWO_DIGIT_CALLING_CODES.contains(&lead)) =>
        {
            2
        }
        _ => 3,
    }
}

/// Hide the middle third of a phone number
///
/// Spaces and hyphens are removed first. With a leading `+` the country
/// calling code is kept in the clear and only the subscriber part is masked.
///
/// ```
/// use otpfwd_extractor::phone::mask;
///
/// assert_eq!(mask("+249112233445"), "+249112****445");
/// assert_eq!(mask("12345"), "12345");
/// ```
pub fn mask(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();
    if cleaned.chars().count() < MIN_MASKABLE_LEN {
        return cleaned;
    }

    if let Some(rest) = cleaned.strip_prefix('+') {
        let leading_digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if leading_digits > 0 {
            let prefix_len = calling_code_len(rest).min(leading_digits).min(4);
            // ASCII digits only, so the byte offset is a char boundary
            let (code, main) = rest.split_at(prefix_len);
            if main.chars().count() <= 4 {
                return cleaned;
            }
            return format!("+{}{}", code, mask_middle_third(main));
        }
    }

    mask_middle_third(&cleaned)
}

fn mask_middle_third(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let cut = chars.len() / 3;
    let end = chars.len() - cut;

    let mut out = String::with_capacity(s.len() + MASK.len());
    out.extend(&chars[..cut]);
    out.push_str(MASK);
    out.extend(&chars[end..]);
    out
}

/// A phone number found in message text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CapturedNumber {
    /// Already masked by the sender, kept verbatim
    AlreadyMasked(String),
    /// A full number, stored masked
    Masked(String),
    /// Nothing recognizable
    NotFound,
}

impl CapturedNumber {
    /// Display value; `"Not Found"` when nothing was captured
    pub fn display(&self) -> &str {
        match self {
            CapturedNumber::AlreadyMasked(number) | CapturedNumber::Masked(number) => number,
            CapturedNumber::NotFound => NUMBER_NOT_FOUND,
        }
    }

    /// Whether a number was captured
    pub fn is_found(&self) -> bool {
        !matches!(self, CapturedNumber::NotFound)
    }
}

impl std::fmt::Display for CapturedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}

/// Find the recipient number in a message
///
/// Labeled fields win over bare numbers, and a number the sender already
/// masked is never masked again.
pub fn capture_number(text: &str) -> CapturedNumber {
    if let Some(caps) = LABELED_MASKED.captures(text) {
        return CapturedNumber::AlreadyMasked(caps[1].to_string());
    }
    if let Some(caps) = LABELED_RAW.captures(text) {
        return CapturedNumber::Masked(mask(&caps[1]));
    }
    if let Some(found) = BARE_MASKED.find(text) {
        return CapturedNumber::AlreadyMasked(found.as_str().to_string());
    }
    if let Some(found) = BARE_INTERNATIONAL.find(text) {
        return CapturedNumber::Masked(mask(found.as_str()));
    }
    CapturedNumber::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mask_with_three_digit_code() {
        assert_eq!(mask("+249112233445"), "+249112****445");
        assert_eq!(mask("+880 1712-345678"), "+880171****678");
    }

    #[test]
    fn test_mask_with_short_codes() {
        assert_eq!(mask("+14155552671"), "+1415****671");
        assert_eq!(mask("+447911123456"), "+44791****456");
        assert_eq!(mask("+79161234567"), "+7916****567");
    }

    #[test]
    fn test_mask_without_plus() {
        assert_eq!(mask("01712345678"), "017****678");
        assert_eq!(mask("1234567"), "12****67");
    }

    #[test]
    fn test_mask_short_inputs_unchanged() {
        assert_eq!(mask("12345"), "12345");
        assert_eq!(mask("12 34"), "1234");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_mask_short_subscriber_part() {
        // +249 leaves four subscriber digits
        assert_eq!(mask("+2491234"), "+2491234");
    }

    #[test]
    fn test_mask_plus_without_digits() {
        assert_eq!(mask("+abcdefgh"), "+ab****fgh");
    }

    #[test]
    fn test_mask_multibyte() {
        assert_eq!(mask("১২৩৪৫৬৭৮৯"), "১২৩****৭৮৯");
    }

    #[test]
    fn test_calling_code_len() {
        assert_eq!(calling_code_len("14155552671"), 1);
        assert_eq!(calling_code_len("79161234567"), 1);
        assert_eq!(calling_code_len("447911123456"), 2);
        assert_eq!(calling_code_len("919876543210"), 2);
        assert_eq!(calling_code_len("249112233445"), 3);
        assert_eq!(calling_code_len("8801712345678"), 3);
        assert_eq!(calling_code_len(""), 3);
    }

    #[test]
    fn test_capture_labeled_masked_is_verbatim() {
        let found = capture_number("Number: 88017****678 OTP 1234");
        assert_eq!(found, CapturedNumber::AlreadyMasked("88017****678".to_string()));
    }

    #[test]
    fn test_capture_labeled_raw_is_masked() {
        let found = capture_number("Phone +249112233445\nCode 1234");
        assert_eq!(found.display(), "+249112****445");
    }

    #[test]
    fn test_capture_bare_numbers() {
        assert_eq!(
            capture_number("sent to 2491***445 ok"),
            CapturedNumber::AlreadyMasked("2491***445".to_string())
        );
        assert_eq!(
            capture_number("from +14155552671").display(),
            "+1415****671"
        );
    }

    #[test]
    fn test_capture_not_found() {
        let found = capture_number("Your code is 123456");
        assert!(!found.is_found());
        assert_eq!(found.to_string(), "Not Found");
    }

    proptest! {
        #[test]
        fn prop_mask_never_panics(raw in "\\PC{0,40}") {
            let _ = mask(&raw);
        }

        #[test]
        fn prop_mask_keeps_ends(digits in "[0-9]{7,15}") {
            let masked = mask(&digits);
            prop_assert!(masked.contains(MASK));
            let cut = digits.len() / 3;
            prop_assert!(masked.starts_with(&digits[..cut]));
            prop_assert!(masked.ends_with(&digits[digits.len() - cut..]));
        }

        #[test]
        fn prop_masked_capture_is_never_remasked(text in "\\PC{0,60}") {
            if let CapturedNumber::Masked(number) = capture_number(&text) {
                prop_assert!(number.matches('*').count() <= MASK.len());
            }
        }
    }
}
