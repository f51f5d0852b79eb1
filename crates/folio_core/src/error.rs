//! Error types for manifest loading.

use thiserror::Error;

/// Errors that can occur while retrieving or decoding the manifest.
///
/// None of these are fatal: the gallery logs them and keeps an empty catalog.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} while fetching {url}")]
    Http {
        /// Response status code
        status: u16,
        /// Requested location
        url: String,
    },

    /// The body was not a valid manifest document
    #[error("Malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O error when reading a manifest from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Create a network error with a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}
