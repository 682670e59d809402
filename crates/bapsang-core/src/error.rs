//! Error types for the Bapsang site

use thiserror::Error;

/// Main error type for Bapsang core operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Submission endpoint could not be reached or returned garbage
    #[error("Submission transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Submission endpoint URL is malformed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
