//! otpfwd Domain Layer
//!
//! Core value objects and trait interfaces shared by every otpfwd crate.
//! Nothing in here performs I/O or holds mutable state.
//!
//! ## Key Concepts
//!
//! - **CountryRecord**: one entry of the persisted country table
//! - **CountryInfo**: a resolved (name, flag, dial code) triple, `Unknown` by default
//! - **ExtractionResult**: the privacy-masked summary of an accepted OTP message
//! - **Rejection**: why a message must not be forwarded
//! - **CountryDirectory**: lookup seam implemented by the storage layer
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency
//! - Pure data and helpers; matching logic lives in `otpfwd-extractor`
//! - Storage implementations live in `otpfwd-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod country;
pub mod result;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use country::{CountryInfo, CountryRecord, DEFAULT_COUNTRY_NAME, DEFAULT_DIAL_CODE, DEFAULT_FLAG};
pub use result::{Classification, CountryField, ExtractionResult, Rejection, NUMBER_NOT_FOUND};
pub use text::title_case;
pub use traits::CountryDirectory;
