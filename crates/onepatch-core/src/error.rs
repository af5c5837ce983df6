//! Error types for preset decoding.

use thiserror::Error;

/// Errors that can occur while decoding a preset or bank.
///
/// Encoding never fails: every [`Preset`](crate::Preset) built through the
/// public API already satisfies the invariants the writers rely on.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A chunk, container or effect magic did not match.
    #[error("malformed header: expected '{expected}', found '{found}'")]
    MalformedHeader {
        /// The magic that was required at this position.
        expected: String,
        /// The four bytes actually found, rendered as text.
        found: String,
    },

    /// The preset was saved by a plugin version older than we can read.
    #[error("unsupported version {version} (minimum supported is {minimum})")]
    UnsupportedVersion {
        /// Version stored in the file.
        version: u32,
        /// Oldest version this crate can decode.
        minimum: u32,
    },

    /// The buffer ended before a fixed-size field was complete.
    #[error("truncated buffer: needed {needed} bytes, {available} available")]
    TruncatedBuffer {
        /// Bytes required by the field being read.
        needed: usize,
        /// Bytes remaining in the buffer.
        available: usize,
    },

    /// A plist or XML document is not a kHs ONE container.
    #[error("unrecognized container: {0}")]
    UnrecognizedContainer(String),

    /// A Reason patch lacks a derived key needed to rebuild a parameter.
    #[error("missing transfer parameter: {0}")]
    MissingTransferParameter(String),

    /// A Reason patch names a property that is neither in the schema nor a derived key.
    #[error("unexpected parameter: {0}")]
    UnexpectedParameter(String),

    /// A parameter value could not be parsed or is not a finite number.
    #[error("invalid value '{value}' for parameter '{parameter}'")]
    InvalidValue {
        /// Name of the parameter being set.
        parameter: String,
        /// The rejected value as text.
        value: String,
    },

    /// The AU `vstdata` payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The document is not well-formed XML.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

impl DecodeError {
    /// Create a header mismatch error from the expected and found magic bytes.
    pub fn malformed_header(expected: &[u8; 4], found: u32) -> Self {
        DecodeError::MalformedHeader {
            expected: String::from_utf8_lossy(expected).into_owned(),
            found: String::from_utf8_lossy(&found.to_be_bytes()).into_owned(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(parameter: impl Into<String>, value: impl ToString) -> Self {
        DecodeError::InvalidValue {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }
}
