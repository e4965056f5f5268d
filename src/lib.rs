// ABOUTME: Main library entry point for the WBS health data client
// ABOUTME: OAuth1-signed requests, typed endpoint methods and notification subscriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

#![deny(unsafe_code)]

//! # WBS Client
//!
//! Client for the WBS health-tracking API. Every call is a GET signed with
//! OAuth1 in the query string; the JSON envelope that comes back is decoded
//! and its numeric status translated into a typed outcome.
//!
//! ## Architecture
//!
//! - **Config**: the five credentials, validated before anything else happens
//! - **`OAuth1`**: HMAC-SHA1 query-string signer
//! - **Client**: the request executor every endpoint goes through
//! - **Endpoints**: user, activity, measures and notification methods
//! - **Params**: query parameters, the activity date policy and measure queries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wbs_client::{WbsClient, WbsConfig, WbsResult};
//!
//! #[tokio::main]
//! async fn main() -> WbsResult<()> {
//!     let client = WbsClient::new(WbsConfig::from_env())?;
//!
//!     let user = client.get_user().await?;
//!     println!("Hello {}", user.firstname.unwrap_or_default());
//!
//!     let week = client
//!         .get_activity(Some("2020-01-01"), Some("2020-01-07"))
//!         .await?;
//!     println!("{} days of activity", week.len());
//!
//!     Ok(())
//! }
//! ```

/// Request executor and client construction
pub mod client;

/// Credential configuration
pub mod config;

/// Endpoint methods over the executor
pub mod endpoints;

/// Shared HTTP client with connection pooling
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// `OAuth1` HMAC-SHA1 query-string signing
pub mod oauth1;

/// Query parameters, activity date ranges and measure queries
pub mod params;

// Re-export the core crate so callers need a single dependency
pub use wbs_core::{constants, envelope, errors, models};

pub use client::WbsClient;
pub use config::WbsConfig;
pub use http_client::{initialize_shared_client, shared_client, HttpClientConfig};
pub use oauth1::OAuth1Signer;
pub use params::{ActivityRange, MeasureQuery, QueryParams};
pub use wbs_core::constants::{appli, DEFAULT_APPLI, DEFAULT_BASE_URL};
pub use wbs_core::models::{
    Activity, ActivityCollection, Measure, MeasureCategory, MeasureCollection, MeasureGroup,
    MeasureType, Notification, Subscription, SubscriptionCollection, User,
};
pub use wbs_core::{
    ConfigurationError, DecodingError, ResponseEnvelope, ServiceError, WbsError, WbsResult,
    SUCCESS_SENTINEL,
};
