// ABOUTME: WBS API client construction and the signed request executor
// ABOUTME: Single choke point that injects userid/action, signs, sends and decodes every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::WbsConfig;
use crate::constants::params as param_names;
use crate::envelope::ResponseEnvelope;
use crate::errors::{ConfigurationError, WbsResult};
use crate::http_client::shared_client;
use crate::oauth1::OAuth1Signer;
use crate::params::QueryParams;

/// HTTP method of every call
const METHOD: &str = "GET";

/// Client for one user's data
///
/// Holds only read-only state after construction, so one instance can be
/// shared across tasks without locking.
#[derive(Debug, Clone)]
pub struct WbsClient {
    config: WbsConfig,
    base_url: Url,
    signer: OAuth1Signer,
    http: Client,
}

impl WbsClient {
    /// Create a client on the shared HTTP connection pool
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if a credential is missing or the base URL
    /// is unusable. Nothing is sent over the network.
    pub fn new(config: WbsConfig) -> WbsResult<Self> {
        config.validate()?;
        Self::build(config, shared_client().clone())
    }

    /// Create a client on a caller-supplied HTTP client
    ///
    /// # Errors
    ///
    /// Same as [`WbsClient::new`]
    pub fn with_http_client(config: WbsConfig, http: Client) -> WbsResult<Self> {
        config.validate()?;
        Self::build(config, http)
    }

    fn build(config: WbsConfig, http: Client) -> WbsResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let signer = OAuth1Signer::new(
            &config.consumer_key,
            &config.consumer_secret,
            &config.access_token,
            &config.token_secret,
        );

        Ok(Self {
            config,
            base_url,
            signer,
            http,
        })
    }

    /// User the client acts for
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.config.user_id
    }

    /// Root every path is resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send one signed GET and decode its envelope
    ///
    /// `userid` is always added to `params`, and `action` when non-empty.
    /// Returns the envelope `body`, or [`SUCCESS_SENTINEL`] when a successful
    /// response carries none.
    ///
    /// [`SUCCESS_SENTINEL`]: crate::SUCCESS_SENTINEL
    ///
    /// # Errors
    ///
    /// - `Service` when the envelope status is non-zero
    /// - `Decoding` when the body is not a JSON envelope
    /// - `Transport` when the request itself fails
    #[instrument(skip_all, fields(path = %path, action = %action))]
    pub async fn execute(&self, path: &str, action: &str, mut params: QueryParams) -> WbsResult<Value> {
        params.insert(param_names::USER_ID, &self.config.user_id);
        if !action.is_empty() {
            params.insert(param_names::ACTION, action);
        }

        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ConfigurationError::invalid_argument("path", err.to_string()))?;

        let oauth_params = self.signer.sign(METHOD, url.as_str(), &params);
        let query: Vec<(&str, &str)> = params
            .iter()
            .chain(oauth_params.iter().map(|(k, v)| (*k, v.as_str())))
            .collect();

        debug!(url = %url, param_count = params.len(), "Sending signed request");

        let response = self.http.get(url).query(&query).send().await?;
        let http_status = response.status().as_u16();
        let bytes = response.bytes().await?;

        let envelope = ResponseEnvelope::decode(http_status, &bytes)?;
        debug!(http_status, status = envelope.status, "Received response envelope");

        Ok(envelope.into_result()?)
    }
}

/// Parse the base URL and make sure relative paths resolve beneath it
fn parse_base_url(raw: &str) -> Result<Url, ConfigurationError> {
    let invalid = |reason: String| ConfigurationError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
