//! Error types for the price checker.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific errors for application operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog file is not where we expect it
    #[error("Catalog not found: {0}. Make sure you've cloned the repository correctly.")]
    CatalogNotFound(PathBuf),

    /// Tabular input or output could not be read or written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// User entered an OS name outside the supported set
    #[error("Unknown OS \"{0}\" (expected GrapheneOS, CalyxOS, eOS or LineageOS)")]
    InvalidOsName(String),

    /// Network request failed or returned a non-success status
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid or malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
