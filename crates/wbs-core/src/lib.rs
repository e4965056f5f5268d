// ABOUTME: Core types and constants for the WBS health data client
// ABOUTME: Foundation crate with error handling, the status-code table, envelope decoding and records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

#![deny(unsafe_code)]

//! # WBS Core
//!
//! Foundation crate providing the shared types of the WBS client. Nothing here
//! performs I/O; the client crate drives the network and hands decoded JSON to
//! the constructors defined here.
//!
//! ## Modules
//!
//! - **errors**: `WbsError` and its configuration, service and decoding kinds
//! - **constants**: status-code table, endpoint paths, actions and application ids
//! - **envelope**: the `{status, body, error}` response envelope
//! - **models**: immutable result records (user, activities, measures, subscriptions)

/// Unified error handling for configuration, service and decoding failures
pub mod errors;

/// Status codes, endpoint paths and notification application ids
pub mod constants;

/// Response envelope decoding and status translation
pub mod envelope;

/// Result records built from successful response bodies
pub mod models;

pub use envelope::{ResponseEnvelope, SUCCESS_SENTINEL};
pub use errors::{ConfigurationError, DecodingError, ServiceError, WbsError, WbsResult};
