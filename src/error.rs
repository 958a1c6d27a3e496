//! Error types for rights-badge.

use thiserror::Error;

/// Result type for rights-badge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving a rights statement badge.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a well-formed rights statement vocabulary URI.
    #[error("Invalid rights statement URI: {0}")]
    InvalidUri(String),

    /// The metadata request failed (connection, timeout or non-success status).
    #[error("Failed to fetch statement metadata: {0}")]
    Fetch(String),

    /// The metadata response could not be interpreted as statement metadata.
    #[error("Malformed statement metadata: {0}")]
    MalformedMetadata(String),

    /// The badge style setting is not one of the supported styles.
    #[error("Unknown badge style: {0}")]
    UnknownStyle(String),

    /// The badge color setting is not one of the supported colors.
    #[error("Unknown badge color: {0}")]
    UnknownColor(String),
}
