//! Error types shared by the resolver, configuration and CLI.

use thiserror::Error;

/// Errors produced by flag resolution and its supporting layers.
#[derive(Debug, Error)]
pub enum FlagError {
    /// No artwork could be obtained for the code. Recovered inside
    /// [`FlagResolver::resolve`](crate::flags::FlagResolver::resolve) by
    /// falling back to a placeholder.
    #[error("No artwork for '{code}': {reason}")]
    AssetUnavailable { code: String, reason: String },

    /// The code is unknown to both the directory and the artwork source.
    #[error("Unknown country code: {0}")]
    InvalidCode(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlagError {
    pub(crate) fn unavailable(code: &str, reason: impl Into<String>) -> Self {
        Self::AssetUnavailable {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlagError>;
