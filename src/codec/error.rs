//! Codec error types.

use derive_more::{Display, Error, From};

use crate::puzzle::ValidationError;

/// A token could not be turned back into a puzzle.
///
/// The loader recovers from every variant by falling back to the default
/// puzzle.
#[derive(Debug, Display, Error)]
pub enum DecodingError {
    /// The token was empty after trimming.
    #[display("puzzle token is empty")]
    EmptyToken,

    /// The outer text encoding is not base64.
    #[display("puzzle token is not valid base64: {source}")]
    InvalidBase64 {
        /// Underlying decoder error.
        source: base64::DecodeError,
    },

    /// A `%` was not followed by two hex digits.
    #[display("malformed percent escape at byte {position}")]
    InvalidEscape {
        /// Byte offset of the offending `%`.
        position: usize,
    },

    /// The unescaped bytes are not UTF-8.
    #[display("puzzle token does not decode to UTF-8 text")]
    InvalidUtf8,

    /// The payload is not the expected JSON record.
    #[display("puzzle data is not valid JSON: {source}")]
    MalformedJson {
        /// Underlying parser error.
        source: serde_json::Error,
    },

    /// The record does not hold exactly four categories.
    #[display("expected 4 categories, found {found}")]
    CategoryCount {
        /// Number of categories in the record.
        found: usize,
    },

    /// A category tuple is not `[name, word, word, word, word]`.
    #[display("category {} has {found} fields, expected 5", index + 1)]
    CategoryArity {
        /// Zero-based category position.
        index: usize,
        /// Number of strings in the tuple.
        found: usize,
    },
}

/// A puzzle could not be serialized.
///
/// Unreachable for puzzles built from the public types, but surfaced rather
/// than emitting a corrupt token.
#[derive(Debug, Display, Error, From)]
#[display("failed to encode puzzle: {source}")]
pub struct EncodingError {
    source: serde_json::Error,
}

/// Sharing an authored puzzle failed.
#[derive(Debug, Display, Error, From)]
pub enum AuthoringError {
    /// The puzzle breaks an authoring rule.
    #[display("invalid puzzle: {source}")]
    Invalid {
        /// The rule that failed.
        source: ValidationError,
    },

    /// The puzzle passed validation but could not be encoded.
    #[display("{source}")]
    Encoding {
        /// Encoder failure.
        source: EncodingError,
    },
}
