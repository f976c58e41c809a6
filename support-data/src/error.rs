//! Errors raised around the transform: loading snapshots and building URLs.
//!
//! The tree transforms themselves are total and never produce these.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend replied with something other than a JSON object.
    #[error("support data must be a JSON object, found {found}")]
    InvalidSnapshot { found: &'static str },

    /// The messaging host could not deliver a request or its reply.
    #[error("messaging failed: {0}")]
    Messaging(String),

    /// A report or navigation URL did not parse.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
