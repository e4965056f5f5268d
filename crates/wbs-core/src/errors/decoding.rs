// ABOUTME: Decoding failures for response envelopes, result bodies and notification callbacks
// ABOUTME: Signals a contract violation by the remote side rather than a caller mistake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use thiserror::Error;

/// A response did not have the shape the call expects
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodingError {
    /// The HTTP body is not a JSON envelope
    #[error("response is not a valid envelope (HTTP {http_status}): {source}")]
    InvalidEnvelope {
        /// HTTP status of the response
        http_status: u16,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A field the success body must carry is absent
    #[error("response is missing `{field}`")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A list the caller needs one entry of is empty
    #[error("`{field}` is empty")]
    EmptyList {
        /// Name of the empty list
        field: &'static str,
    },

    /// A field is present but does not decode into its record
    #[error("`{field}` has an unexpected shape: {source}")]
    Malformed {
        /// Name of the malformed field
        field: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A scalar could not be parsed
    #[error("invalid value for `{field}`: {value}")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// Offending raw value
        value: String,
    },
}
