// ABOUTME: Local configuration and argument errors raised before any network call
// ABOUTME: Covers missing credentials, invalid endpoint arguments and unusable base URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use thiserror::Error;

/// Caller-side mistakes detected before a request is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// One of the five credentials is empty
    #[error("missing required credential: {field}")]
    MissingCredential {
        /// Name of the empty credential field
        field: &'static str,
    },

    /// An endpoint argument failed validation
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        parameter: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The configured base URL cannot be used as a request root
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl {
        /// URL as configured
        url: String,
        /// Parser or scheme complaint
        reason: String,
    },
}

impl ConfigurationError {
    /// Create an "invalid argument" error
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Fail with `InvalidArgument` when `value` is empty or blank
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming `parameter` when `value` has no content
    pub fn require_non_empty(parameter: &'static str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(Self::invalid_argument(parameter, "must not be empty"));
        }
        Ok(())
    }
}
