//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Upload attempted without a selected domain or image. Refused locally;
    /// never written to the store's error field.
    #[error("{0}")]
    Validation(String),

    /// Media access denied. Surfaced as an immediate alert, not stored.
    #[error("Media access denied: {0}")]
    Permission(String),

    /// Non-success HTTP status from the analysis endpoint. The message is the
    /// response body text, or a generic fallback when the body is empty.
    #[error("{0}")]
    Upload(String),

    /// Response body was not a JSON object.
    #[error("Invalid analysis response: {0}")]
    Parse(String),

    /// Transport-level failure (connectivity, DNS, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// In-flight upload abandoned by the user.
    #[error("Upload cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal prompt I/O failure.
    #[error("Input error: {0}")]
    Input(String),
}
