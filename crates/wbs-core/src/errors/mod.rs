// ABOUTME: Unified error type for the WBS client with configuration, service and decoding kinds
// ABOUTME: Transport failures from reqwest pass through unchanged behind the transport-errors feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

//! # Error Types
//!
//! - `ConfigurationError` - raised locally before any network I/O
//! - `ServiceError` - the service answered with a non-zero status
//! - `DecodingError` - the response could not be turned into the expected shape
//! - `WbsError::Transport` - connection, TLS and timeout failures from the HTTP client

mod configuration;
mod decoding;
mod service;

pub use configuration::ConfigurationError;
pub use decoding::DecodingError;
pub use service::ServiceError;

use thiserror::Error;

/// Result alias used across the client
pub type WbsResult<T> = Result<T, WbsError>;

/// Every failure a client call can surface
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WbsError {
    /// Missing credentials or invalid caller arguments
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Non-zero status in the response envelope
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Response body was not the expected JSON
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    /// HTTP transport failure, propagated as-is
    #[cfg(feature = "transport-errors")]
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl WbsError {
    /// Whether this error was raised locally before any request was made
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// The service error, if the remote side rejected the call
    #[must_use]
    pub const fn as_service(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }

    /// The decoding error, if the response had an unexpected shape
    #[must_use]
    pub const fn as_decoding(&self) -> Option<&DecodingError> {
        match self {
            Self::Decoding(err) => Some(err),
            _ => None,
        }
    }
}
