//! otpfwd Extractor
//!
//! Turns a raw OTP message into a privacy-masked [`ExtractionResult`] or a
//! [`Rejection`].
//!
//! # Architecture
//!
//! ```text
//! Text → SpamGate → OtpExtractor → CountryResolver ┐
//!                                  capture_number   ├→ ExtractionResult
//!                                  ServiceClassifier ┘
//! ```
//!
//! `OtpExtractor` and `CountryResolver` are both built on the ordered
//! first-match driver in [`rules`].
//!
//! # Example Usage
//!
//! ```
//! use otpfwd_extractor::Pipeline;
//! use otpfwd_store::CountryTable;
//!
//! let pipeline = Pipeline::with_defaults(CountryTable::builtin());
//! let result = pipeline
//!     .classify("Country: Sudan 🇸🇩\nNumber: +249112233445\nYour WhatsApp code is 123-456")
//!     .into_accepted()
//!     .unwrap();
//!
//! assert_eq!(result.otp_code, "123456");
//! assert_eq!(result.country.display, "🇸🇩 Sudan");
//! assert_eq!(result.masked_number, "+249112****445");
//! assert_eq!(result.service, "WhatsApp");
//! ```
//!
//! [`ExtractionResult`]: otpfwd_domain::ExtractionResult
//! [`Rejection`]: otpfwd_domain::Rejection

#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;

pub mod country;
pub mod otp;
pub mod phone;
pub mod rules;
pub mod service;


pub use config::ExtractorConfig;
pub use country::CountryResolver;
pub use error::ExtractorError;
pub use otp::{OtpExtractor, OtpMatch, OtpRule};
pub use phone::{capture_number, mask, CapturedNumber};
pub use pipeline::Pipeline;
pub use service::ServiceClassifier;
