//! Service classification by keyword

use std::collections::BTreeSet;

use regex::Regex;
use tracing::debug;

/// Label used when nothing identifies the service
pub const GENERAL_SERVICE: &str = "General Service";

/// Service labels and the whole-word keywords that identify them, in declared order
pub const SERVICE_KEYWORDS: &[(&str, &[&str])] = &[
    ("WhatsApp", &["whatsapp", "wa"]),
    ("Facebook", &["facebook", "fb"]),
    ("Telegram", &["telegram"]),
    ("Instagram", &["instagram"]),
    ("Google", &["google", "g-"]),
    ("IMO", &["imo"]),
    ("Signal", &["signal"]),
    ("VK", &["vk"]),
    ("Twitter", &["twitter"]),
    ("Apple", &["apple"]),
    ("Microsoft", &["microsoft"]),
    ("Snapchat", &["snapchat"]),
    ("Discord", &["discord"]),
    ("TikTok", &["tiktok"]),
    ("PayPal", &["paypal"]),
    ("Amazon", &["amazon"]),
    ("Netflix", &["netflix"]),
    ("Binance", &["binance"]),
    ("HBO Max", &["hbo max"]),
    ("Viber", &["viber"]),
    ("LINE", &["line"]),
    ("WeChat", &["wechat"]),
    ("Skype", &["skype"]),
    ("Roblox", &["roblox"]),
    ("Steam", &["steam"]),
    ("Epic Games", &["epic games"]),
    ("Garena", &["garena"]),
    ("Free Fire", &["free fire"]),
    ("PUBG", &["pubg"]),
    ("Banking/Finance", &["banking", "bank"]),
    ("Email Service", &["email", "mail"]),
    ("OLX", &["olx"]),
    ("Uber", &["uber"]),
    ("Careem", &["careem"]),
    ("Talabat", &["talabat"]),
    ("Foodpanda", &["foodpanda"]),
    ("bKash", &["bkash"]),
    ("Nagad", &["nagad"]),
    ("Rocket", &["rocket"]),
    ("Daraz", &["daraz"]),
    ("Pathao", &["pathao"]),
    ("Shopee", &["shopee"]),
    ("Lazada", &["lazada"]),
    ("eBay", &["ebay"]),
    ("Stripe", &["stripe"]),
    ("Coinbase", &["coinbase"]),
    ("Bybit", &["bybit"]),
    ("KuCoin", &["kucoin"]),
    ("OKX", &["okx"]),
];

/// Labels that win outright when several match, with the literal that must appear
pub const PRIORITY: &[(&str, &str)] = &[
    ("WhatsApp", "whatsapp"),
    ("Facebook", "facebook"),
    ("Google", "google"),
];

/// Phrase fallbacks tried in order when no keyword matched
pub const GENERIC_FALLBACKS: &[(&[&str], &str)] = &[
    (
        &["your verification code", "your login code"],
        "General Verification",
    ),
    (&["your security code", "security alert"], "Security Code"),
    (&["your password reset"], "Password Reset"),
];

/// Names the service a message belongs to
#[derive(Debug)]
pub struct ServiceClassifier {
    matchers: Vec<(&'static str, Regex)>,
}

impl ServiceClassifier {
    /// Compile the keyword table
    ///
    /// # Panics
    ///
    /// Panics only if the built-in keyword table produces an invalid pattern.
    pub fn new() -> Self {
        let matchers = SERVICE_KEYWORDS
            .iter()
            .map(|(label, keywords)| {
                let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
                let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
                let regex = Regex::new(&pattern)
                    .unwrap_or_else(|e| panic!("Invalid keyword pattern for '{}': {}", label, e));
                (*label, regex)
            })
            .collect();
        Self { matchers }
    }

    /// Every label whose keywords occur in `text`, in declared order
    pub fn matched_labels(&self, text: &str) -> Vec<&'static str> {
        self.matchers
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(label, _)| *label)
            .collect()
    }

    /// Service label for `text`
    pub fn classify(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let matched = self.matched_labels(&lowered);

        if !matched.is_empty() {
            for (label, trigger) in PRIORITY {
                if matched.contains(label) && lowered.contains(trigger) {
                    debug!("Service '{}' chosen by priority", label);
                    return (*label).to_string();
                }
            }
            let distinct: BTreeSet<&str> = matched.into_iter().collect();
            return distinct.into_iter().collect::<Vec<_>>().join(", ");
        }

        GENERIC_FALLBACKS
            .iter()
            .find(|(phrases, _)| phrases.iter().any(|p| lowered.contains(p)))
            .map_or(GENERAL_SERVICE, |(_, label)| *label)
            .to_string()
    }
}

impl Default for ServiceClassifier {
    fn default() -> Self {
        Self::new()
    }
}
