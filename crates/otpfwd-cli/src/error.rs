//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Country table error
    #[error("Country table error: {0}")]
    Store(#[from] otpfwd_store::StoreError),

    /// Pipeline construction error
    #[error("Extractor error: {0}")]
    Extractor(#[from] otpfwd_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Background classification task failed
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
