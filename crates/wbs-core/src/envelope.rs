// ABOUTME: Response envelope decoding for the WBS API
// ABOUTME: Turns `{status, body, error}` into the body, the success sentinel, or a ServiceError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use serde::Deserialize;
use serde_json::Value;

use crate::constants::status;
use crate::errors::{DecodingError, ServiceError};

/// Returned in place of a body when a call succeeds without one
pub const SUCCESS_SENTINEL: Value = Value::Bool(true);

/// Decoded top-level response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// Zero on success, a service code otherwise
    pub status: i64,
    /// Payload, present only on success and not always then
    #[serde(default)]
    pub body: Option<Value>,
    /// Free-text error, present only on failure
    #[serde(default)]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    /// Parse raw response bytes
    ///
    /// # Errors
    ///
    /// Returns `DecodingError::InvalidEnvelope` if the bytes are not a JSON
    /// object with an integer `status`
    pub fn decode(http_status: u16, bytes: &[u8]) -> Result<Self, DecodingError> {
        serde_json::from_slice(bytes)
            .map_err(|source| DecodingError::InvalidEnvelope { http_status, source })
    }

    /// Whether the service reported success
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == status::SUCCESS
    }

    /// Translate the envelope into the call outcome
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` when `status` is non-zero
    pub fn into_result(self) -> Result<Value, ServiceError> {
        if !self.is_success() {
            return Err(ServiceError::from_status(self.status, self.error));
        }
        Ok(self.body.unwrap_or(SUCCESS_SENTINEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_with_body() {
        let envelope = ResponseEnvelope::decode(200, br#"{"status":0,"body":{"a":1}}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_success_without_body_is_sentinel() {
        let envelope = ResponseEnvelope::decode(200, br#"{"status":0}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), SUCCESS_SENTINEL);
    }

    #[test]
    fn test_known_failure() {
        let envelope = ResponseEnvelope::decode(200, br#"{"status":286}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.code(), Some(286));
        assert_eq!(err.message(), "No such subscription was found");
    }

    #[test]
    fn test_not_json() {
        let err = ResponseEnvelope::decode(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(
            err,
            DecodingError::InvalidEnvelope {
                http_status: 502,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_status() {
        assert!(ResponseEnvelope::decode(200, br#"{"body":{}}"#).is_err());
    }
}
