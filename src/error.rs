//! Error types for the catalog and audio collaborators

use thiserror::Error;

/// Errors surfaced by the session engines' collaborators.
///
/// Every variant is recoverable by a new user intent (re-search, scroll
/// again, re-open the track); none is fatal to the process. The engines
/// catch these at their boundary, log them, and translate them into a
/// state update instead of propagating them to the presentation layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or HTTP-level failure while talking to the catalog.
    #[error("transport error: {0}")]
    Transport(String),

    /// The catalog returned a payload that could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The preview URL could not be opened as a playable resource.
    #[error("resource open error: {0}")]
    ResourceOpen(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
