// ABOUTME: Shared helpers for WBS client integration tests
// ABOUTME: Mock server setup, canned envelopes and inspection of received query strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `wbs_client`

use serde_json::{json, Value};
use std::collections::HashMap;
use wbs_client::{WbsClient, WbsConfig};
use wiremock::{MockServer, Request, ResponseTemplate};

pub const USER_ID: &str = "29";

/// Credentials pointing at `server`
pub fn test_config(server: &MockServer) -> WbsConfig {
    WbsConfig::new(
        "consumer_key",
        "consumer_secret",
        "access_token",
        "token_secret",
        USER_ID,
    )
    .with_base_url(format!("{}/", server.uri()))
}

/// Client talking to `server` through the shared HTTP client
pub fn test_client(server: &MockServer) -> WbsClient {
    WbsClient::new(test_config(server)).expect("test configuration is complete")
}

/// HTTP 200 carrying a `{status, body}` envelope
pub fn envelope(status: i64, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "status": status, "body": body }))
}

/// HTTP 200 carrying a status-only envelope
pub fn bare_envelope(status: i64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "status": status }))
}

/// Query parameters of a received request
pub fn query_of(request: &Request) -> HashMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

/// Query parameters of the only request `server` received
pub async fn single_query(server: &MockServer) -> HashMap<String, String> {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    query_of(&requests[0])
}

/// Number of requests `server` received
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map_or(0, |requests| requests.len())
}
