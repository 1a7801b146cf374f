//! Caption cleanup for forwarded media

use regex::Regex;
use std::sync::LazyLock;

static CAPTION_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@\w+|t\.me/\S+|telegram\.me/\S+|OTP\s*:\s*JOIN HERE|https?\S+")
        .expect("Invalid caption noise regex")
});

/// Strips mentions, invite links and URLs from media captions
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptionSanitizer;

impl CaptionSanitizer {
    /// Create a sanitizer
    pub fn new() -> Self {
        Self
    }

    /// Remove noise from `caption`; `None` when nothing meaningful is left
    pub fn clean(&self, caption: &str) -> Option<String> {
        let cleaned = CAPTION_NOISE.replace_all(caption, "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_mentions_and_links() {
        let sanitizer = CaptionSanitizer::new();
        let cleaned = sanitizer
            .clean("Fresh numbers @otp_admin t.me/otpgroup https://example.com/x")
            .unwrap();
        assert_eq!(cleaned.trim_end(), "Fresh numbers");
    }

    #[test]
    fn test_removes_join_banner() {
        let sanitizer = CaptionSanitizer::new();
        assert_eq!(
            sanitizer.clean("Sudan list\nOTP : join here").as_deref(),
            Some("Sudan list")
        );
    }

    #[test]
    fn test_empty_result_is_none() {
        let sanitizer = CaptionSanitizer::new();
        assert_eq!(sanitizer.clean("@someone https://t.me/abc"), None);
        assert_eq!(sanitizer.clean(""), None);
    }
}
