// ABOUTME: Credential configuration for the WBS client
// ABOUTME: Five required credentials validated up front, loadable from environment or serde documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use crate::constants::DEFAULT_BASE_URL;
use crate::errors::ConfigurationError;

/// Placeholder printed instead of secrets
const REDACTED: &str = "[REDACTED]";

/// Credentials and endpoint of one client
///
/// Every field defaults to empty when deserialized, so a document that
/// leaves one out is rejected by [`WbsConfig::validate`] with the field's
/// name instead of failing to parse.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WbsConfig {
    /// `OAuth1` consumer key (application identifier)
    pub consumer_key: String,
    /// `OAuth1` consumer secret
    pub consumer_secret: String,
    /// `OAuth1` access token
    pub access_token: String,
    /// `OAuth1` token secret
    pub token_secret: String,
    /// Service user id the token belongs to
    pub user_id: String,
    /// Root of every request
    pub base_url: String,
}

impl Default for WbsConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            consumer_secret: String::new(),
            access_token: String::new(),
            token_secret: String::new(),
            user_id: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl WbsConfig {
    /// Configuration against the default base URL
    #[must_use]
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        token_secret: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            token_secret: token_secret.into(),
            user_id: user_id.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Replace the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads `WBS_CONSUMER_KEY`, `WBS_CONSUMER_SECRET`, `WBS_ACCESS_TOKEN`,
    /// `WBS_TOKEN_SECRET`, `WBS_USER_ID` and optionally `WBS_BASE_URL`.
    /// Unset credentials stay empty and fail validation at construction.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            consumer_key: env::var("WBS_CONSUMER_KEY").unwrap_or_default(),
            consumer_secret: env::var("WBS_CONSUMER_SECRET").unwrap_or_default(),
            access_token: env::var("WBS_ACCESS_TOKEN").unwrap_or_default(),
            token_secret: env::var("WBS_TOKEN_SECRET").unwrap_or_default(),
            user_id: env::var("WBS_USER_ID").unwrap_or_default(),
            base_url: env::var("WBS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Check that all five credentials are present
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` naming the first empty field, in the order
    /// consumer key, consumer secret, access token, token secret, user id
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let required = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("token_secret", &self.token_secret),
            ("user_id", &self.user_id),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigurationError::MissingCredential { field: *field }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for WbsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WbsConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &REDACTED)
            .field("access_token", &REDACTED)
            .field("token_secret", &REDACTED)
            .field("user_id", &self.user_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}
