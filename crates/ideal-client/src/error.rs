//! Error type for the gateway client.

use thiserror::Error;

/// Errors produced by the gateway client.
///
/// Codec, transport, protocol and authentication failures stay distinct
/// variants so callers can tell a malformed response from a declined
/// operation or a forged callback. Nothing is retried here; retry policy
/// belongs to whoever owns the call.
#[derive(Debug, Error)]
pub enum Error {
    /// Generating or parsing markup failed, or a response was missing an
    /// expected element.
    #[error("codec error: {0}")]
    Codec(#[from] markup::Error),

    /// The HTTP round trip failed; forwarded untouched.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway endpoint could not be parsed as a URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The gateway answered with an explicit error payload.
    #[error("gateway error {code}: {description}")]
    Gateway {
        /// The gateway's error code.
        code: String,
        /// The gateway's human-readable description.
        description: String,
    },

    /// A response element was present but not of the expected shape.
    #[error("response element {path} has an unexpected shape")]
    Shape {
        /// Key path of the offending element, joined with '/'.
        path: String,
    },

    /// Checksum data must be a flat object of leaf values.
    #[error("checksum data must be an object of plain values")]
    ChecksumInput,

    /// An inbound callback carried a checksum that does not match the
    /// recomputed digest.
    #[error("callback checksum mismatch: expected {expected}, got {provided}")]
    ChecksumMismatch {
        /// Digest recomputed from the callback fields.
        expected: String,
        /// Digest the callback carried.
        provided: String,
    },
}

/// Shorthand Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
