//! Error type for the markup codec.

use thiserror::Error;

/// Errors produced while generating or parsing gateway markup.
///
/// Every variant carries enough detail to act on: a byte offset into the
/// input, the tag names involved, or the key path that was being walked.
/// The codec never substitutes a default value for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // === Generator ===
    /// The root of a generated document must be an object.
    #[error("root node must be an object")]
    RootNotObject,

    // === Parser ===
    /// Input was empty (or whitespace only) after trimming.
    #[error("input is empty")]
    EmptyInput,

    /// Input ended in the middle of a production.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof {
        /// Byte offset where input ran out.
        offset: usize,
    },

    /// An unexpected character where the grammar required something else.
    #[error("unexpected character '{found}' at byte {offset}, expected {expected}")]
    UnexpectedChar {
        /// Byte offset of the offending character.
        offset: usize,
        /// The character found.
        found: char,
        /// What the grammar required at this point.
        expected: &'static str,
    },

    /// A closing tag did not match the element it should close.
    #[error("closing tag </{found}> does not match <{expected}> at {path}")]
    ClosingTagMismatch {
        /// Key path of the open element, joined with '/'.
        path: String,
        /// Name of the element being closed.
        expected: String,
        /// Name found in the closing tag.
        found: String,
    },

    /// Nesting exceeded the depth limit for untrusted input.
    #[error("nesting deeper than {limit} levels at byte {offset}")]
    DepthLimit {
        /// Maximum permitted depth.
        limit: usize,
        /// Byte offset where the limit was hit.
        offset: usize,
    },

    // === Tree navigation ===
    /// A fixed key path into a parsed response hit a missing segment.
    #[error("response is missing expected element at {path}")]
    MissingPath {
        /// The path that failed, joined with '/'.
        path: String,
    },
}

/// Shorthand Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
