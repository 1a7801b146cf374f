//! otpfwd Gatekeeper
//!
//! Decides which inbound messages are allowed into the extraction pipeline.
//!
//! The Gatekeeper provides:
//! - Spam rejection (onboarding, join-link and advertisement phrases)
//! - Caption sanitizing for forwarded media (mentions, invite links, URLs)
//!
//! # Examples
//!
//! ```
//! use otpfwd_gatekeeper::{GateConfig, SpamGate};
//!
//! let gate = SpamGate::new(&GateConfig::default());
//! assert!(gate.is_spam("Welcome! Join https://t.me/xyz for OTP"));
//! assert!(!gate.is_spam("Your WhatsApp code is 123-456"));
//! ```

#![warn(missing_docs)]

mod caption;
mod config;
mod error;
mod spam;

pub use caption::CaptionSanitizer;
pub use config::GateConfig;
pub use error::GatekeeperError;
pub use spam::{SpamGate, DEFAULT_DENYLIST};
