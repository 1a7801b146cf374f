//! Error types for the extractor

use thiserror::Error;

/// Errors raised while building an extraction pipeline
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Invalid extractor configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid spam gate configuration
    #[error(transparent)]
    Gate(#[from] otpfwd_gatekeeper::GatekeeperError),
}
