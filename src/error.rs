//! Error taxonomy for the rendering pipeline.
//!
//! Malformed markdown is deliberately not an error: unmatched,
//! adjacent, or escaped delimiters resolve into literal text. The only
//! failure modes are an absent input and an absent tag name.

use thiserror::Error;

/// Failures surfaced by the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Input text was absent. Fatal to the call; no partial output.
    #[error("input text is absent")]
    NullInput,

    /// The tag name passed to the name-to-tag mapping was absent.
    #[error("invalid tag name")]
    InvalidName,
}
