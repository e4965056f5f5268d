// ABOUTME: OAuth1 HMAC-SHA1 request signing for query-string authentication
// ABOUTME: Builds the RFC 5849 signature base string and the oauth_* parameters to append
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

//! `OAuth1` signer
//!
//! The service authenticates every call with `OAuth1` parameters carried in
//! the query string, not in an `Authorization` header. The signer produces
//! those parameters for one request:
//!
//! 1. collect the request parameters and the `oauth_*` protocol parameters
//! 2. percent-encode keys and values (RFC 3986 unreserved set), sort, join
//! 3. sign `METHOD&enc(base_url)&enc(joined)` with HMAC-SHA1 keyed by
//!    `enc(consumer_secret)&enc(token_secret)`

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use ring::hmac;
use std::fmt;

use crate::params::QueryParams;

/// Signature method advertised in `oauth_signature_method`
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Protocol version advertised in `oauth_version`
pub const OAUTH_VERSION: &str = "1.0";

/// Length of generated nonces
const NONCE_LEN: usize = 32;

/// Signs requests with one consumer/token pair
#[derive(Clone)]
pub struct OAuth1Signer {
    consumer_key: String,
    token: String,
    signing_key: String,
}

impl OAuth1Signer {
    /// Create a signer from the consumer pair and the token pair
    #[must_use]
    pub fn new(consumer_key: &str, consumer_secret: &str, token: &str, token_secret: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_owned(),
            token: token.to_owned(),
            signing_key: format!("{}&{}", encode(consumer_secret), encode(token_secret)),
        }
    }

    /// `oauth_*` query parameters for a request, with a fresh nonce and timestamp
    #[must_use]
    pub fn sign(&self, method: &str, base_url: &str, params: &QueryParams) -> Vec<(&'static str, String)> {
        self.sign_with(method, base_url, params, &generate_nonce(), Utc::now().timestamp())
    }

    /// `oauth_*` query parameters for a request with a caller-chosen nonce and timestamp
    ///
    /// `base_url` is the request URL without its query string.
    #[must_use]
    pub fn sign_with(
        &self,
        method: &str,
        base_url: &str,
        params: &QueryParams,
        nonce: &str,
        timestamp: i64,
    ) -> Vec<(&'static str, String)> {
        let mut oauth_params = vec![
            ("oauth_consumer_key", self.consumer_key.clone()),
            ("oauth_nonce", nonce.to_owned()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_owned()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_token", self.token.clone()),
            ("oauth_version", OAUTH_VERSION.to_owned()),
        ];

        let base_string = signature_base_string(
            method,
            base_url,
            params
                .iter()
                .chain(oauth_params.iter().map(|(k, v)| (*k, v.as_str()))),
        );
        let signature = self.signature(&base_string);

        oauth_params.push(("oauth_signature", signature));
        oauth_params
    }

    fn signature(&self, base_string: &str) -> String {
        let key = hmac::Key::new(
            hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            self.signing_key.as_bytes(),
        );
        let tag = hmac::sign(&key, base_string.as_bytes());
        STANDARD.encode(tag.as_ref())
    }
}

impl fmt::Debug for OAuth1Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth1Signer")
            .field("consumer_key", &self.consumer_key)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Percent-encode with the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`)
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// `METHOD&enc(base_url)&enc(sorted, encoded parameters)`
pub(crate) fn signature_base_string<'a>(
    method: &str,
    base_url: &str,
    params: impl Iterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut encoded: Vec<(String, String)> = params.map(|(k, v)| (encode(k), encode(v))).collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_url),
        encode(&normalized)
    )
}
