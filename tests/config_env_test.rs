// ABOUTME: Tests for environment-driven configuration of the client and its HTTP layer
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use wbs_client::logging::{LogFormat, LoggingConfig};
use wbs_client::{ConfigurationError, HttpClientConfig, WbsClient, WbsConfig, WbsError, DEFAULT_BASE_URL};

const CREDENTIAL_VARS: [(&str, &str); 5] = [
    ("WBS_CONSUMER_KEY", "env_key"),
    ("WBS_CONSUMER_SECRET", "env_secret"),
    ("WBS_ACCESS_TOKEN", "env_token"),
    ("WBS_TOKEN_SECRET", "env_token_secret"),
    ("WBS_USER_ID", "42"),
];

fn set_credentials() {
    for (name, value) in CREDENTIAL_VARS {
        env::set_var(name, value);
    }
}

fn clear_all() {
    for (name, _) in CREDENTIAL_VARS {
        env::remove_var(name);
    }
    for name in [
        "WBS_BASE_URL",
        "WBS_HTTP_TIMEOUT_SECS",
        "WBS_HTTP_CONNECT_TIMEOUT_SECS",
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_SPANS",
    ] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_config_from_env() {
    clear_all();
    set_credentials();

    let config = WbsConfig::from_env();
    assert_eq!(config.consumer_key, "env_key");
    assert_eq!(config.token_secret, "env_token_secret");
    assert_eq!(config.user_id, "42");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(config.validate().is_ok());

    clear_all();
}

#[test]
#[serial]
fn test_base_url_override_from_env() {
    clear_all();
    set_credentials();
    env::set_var("WBS_BASE_URL", "https://staging.example.com/api");

    let client = WbsClient::new(WbsConfig::from_env()).unwrap();
    assert_eq!(client.base_url().as_str(), "https://staging.example.com/api/");
    assert_eq!(client.user_id(), "42");

    clear_all();
}

#[test]
#[serial]
fn test_missing_env_credential_is_named() {
    clear_all();
    set_credentials();
    env::remove_var("WBS_ACCESS_TOKEN");

    let err = WbsClient::new(WbsConfig::from_env()).unwrap_err();
    assert!(matches!(
        err,
        WbsError::Configuration(ConfigurationError::MissingCredential {
            field: "access_token"
        })
    ));
    assert!(err.to_string().contains("access_token"));

    clear_all();
}

#[test]
#[serial]
fn test_http_timeouts_from_env() {
    clear_all();
    env::set_var("WBS_HTTP_TIMEOUT_SECS", "5");
    env::set_var("WBS_HTTP_CONNECT_TIMEOUT_SECS", "not-a-number");

    let config = HttpClientConfig::from_env();
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.connect_timeout_secs, HttpClientConfig::default().connect_timeout_secs);

    clear_all();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_all();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_spans);

    clear_all();
}
