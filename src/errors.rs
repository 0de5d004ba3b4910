//! Error types for rapid_gist
//!
//! The text pipeline itself degrades gracefully (empty input yields empty
//! output); errors surface only at the analyzer boundary, where caller
//! contracts and the remote transport live.

use thiserror::Error;

/// Errors produced at the analyzer boundary.
#[derive(Debug, Error)]
pub enum GistError {
    /// A caller-supplied argument is outside the supported range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote analysis service could not be reached or answered with a
    /// transport-level failure.
    #[error("remote analysis unavailable: {0}")]
    UnavailableService(String),

    /// The remote analysis service answered, but the payload could not be
    /// decoded into an [`Analysis`](crate::types::Analysis).
    #[error("malformed remote response: {0}")]
    MalformedResponse(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GistError>;
