// ABOUTME: Remote failure reported by the service through a non-zero envelope status
// ABOUTME: Maps known status codes to fixed messages and keeps the raw error text otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use thiserror::Error;

use crate::constants::status;

/// The service answered, but refused the call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
    code: Option<i64>,
    status: i64,
}

impl ServiceError {
    /// Build the error for a non-zero envelope status
    ///
    /// Known codes take their message from the status table and keep the
    /// code. Anything else keeps the envelope's `error` text and no code.
    #[must_use]
    pub fn from_status(status: i64, error: Option<String>) -> Self {
        match status::message_for(status) {
            Some(message) => Self {
                message: message.to_owned(),
                code: Some(status),
                status,
            },
            None => Self {
                message: error.unwrap_or_else(|| format!("unmapped status {status}")),
                code: None,
                status,
            },
        }
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Mapped status code, `None` when the status is not in the table
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        self.code
    }

    /// Raw envelope status, mapped or not
    #[must_use]
    pub const fn status(&self) -> i64 {
        self.status
    }

    /// The service is throttling this consumer
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.code == Some(status::TOO_MANY_REQUESTS)
    }

    /// Credentials or signature were rejected
    #[must_use]
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self.code,
            Some(status::CREDENTIALS_MISMATCH | status::INVALID_SIGNATURE)
        )
    }
}
