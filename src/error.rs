//! Feed builder error types

use thiserror::Error;

/// Errors raised at the edges of the feed builder
///
/// Rendering itself never fails: missing fields render as empty strings.
/// Only writing the rendered document out and decoding loose JSON records
/// can go wrong.
#[derive(Error, Debug)]
pub enum FeedError {
    /// IO error while writing a rendered document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON record document could not be decoded
    #[error("Invalid record JSON: {0}")]
    Json(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Json(err.to_string())
    }
}

/// Result type alias using FeedError
pub type Result<T> = std::result::Result<T, FeedError>;
