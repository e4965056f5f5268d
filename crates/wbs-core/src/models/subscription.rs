// ABOUTME: Notification subscription records decoded from notify list and get bodies
// ABOUTME: Missing callback or application id are filled from the request that produced them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Deref;

use super::decode_list;
use crate::errors::DecodingError;

/// One webhook registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// URL the service calls back
    #[serde(rename = "callbackurl")]
    pub callback_url: Option<String>,
    /// Comment given at subscription time
    pub comment: Option<String>,
    /// Notification application id
    pub appli: Option<u32>,
    /// Expiry as a Unix timestamp
    pub expires: Option<i64>,
}

impl Subscription {
    /// Build from a notify/get body
    ///
    /// The service does not echo the callback URL or application id on this
    /// call, so the ones the caller asked about are recorded instead.
    ///
    /// # Errors
    ///
    /// Returns `DecodingError` if the body is not a subscription object
    pub fn from_body(body: &Value, callback_url: &str, appli: u32) -> Result<Self, DecodingError> {
        if !body.is_object() {
            return Err(DecodingError::MissingField {
                field: "subscription",
            });
        }

        let mut subscription = Self::deserialize(body).map_err(|source| {
            DecodingError::Malformed {
                field: "subscription",
                source,
            }
        })?;
        subscription
            .callback_url
            .get_or_insert_with(|| callback_url.to_owned());
        subscription.appli.get_or_insert(appli);
        Ok(subscription)
    }

    /// Expiry time, when reported
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
    }
}

/// Subscriptions in the order the service listed them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SubscriptionCollection {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionCollection {
    /// Build from a notify/list body (`{"profiles": [...]}`)
    ///
    /// Entries without an application id get `appli`, the one that was listed.
    ///
    /// # Errors
    ///
    /// Returns `DecodingError` if `profiles` is absent or malformed
    pub fn from_body(body: &Value, appli: u32) -> Result<Self, DecodingError> {
        let mut subscriptions: Vec<Subscription> = decode_list(body, "profiles")?;
        for subscription in &mut subscriptions {
            subscription.appli.get_or_insert(appli);
        }
        Ok(Self { subscriptions })
    }

    /// Build directly from a JSON array of subscription objects
    ///
    /// # Errors
    ///
    /// Returns `DecodingError::Malformed` if `list` is not such an array
    pub fn from_list(list: &Value) -> Result<Self, DecodingError> {
        let subscriptions = Vec::<Subscription>::deserialize(list).map_err(|source| {
            DecodingError::Malformed {
                field: "profiles",
                source,
            }
        })?;
        Ok(Self { subscriptions })
    }

    /// Whether any entry points at `callback_url`
    #[must_use]
    pub fn contains_callback(&self, callback_url: &str) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.callback_url.as_deref() == Some(callback_url))
    }

    /// Consume the collection
    #[must_use]
    pub fn into_vec(self) -> Vec<Subscription> {
        self.subscriptions
    }
}

impl Deref for SubscriptionCollection {
    type Target = [Subscription];

    fn deref(&self) -> &Self::Target {
        &self.subscriptions
    }
}

impl IntoIterator for SubscriptionCollection {
    type Item = Subscription;
    type IntoIter = std::vec::IntoIter<Subscription>;

    fn into_iter(self) -> Self::IntoIter {
        self.subscriptions.into_iter()
    }
}

impl<'a> IntoIterator for &'a SubscriptionCollection {
    type Item = &'a Subscription;
    type IntoIter = std::slice::Iter<'a, Subscription>;

    fn into_iter(self) -> Self::IntoIter {
        self.subscriptions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_preserves_length_and_order() {
        let list = json!([
            {"callbackurl": "https://a.example/cb", "comment": "a", "appli": 1},
            {"callbackurl": "https://b.example/cb", "comment": "b", "appli": 4},
            {"callbackurl": "https://c.example/cb", "comment": "c", "appli": 16}
        ]);

        let collection = SubscriptionCollection::from_list(&list).unwrap();
        assert_eq!(collection.len(), 3);
        let comments: Vec<_> = collection
            .iter()
            .filter_map(|s| s.comment.as_deref())
            .collect();
        assert_eq!(comments, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_body_fills_appli() {
        let body = json!({
            "profiles": [{"callbackurl": "https://a.example/cb", "comment": "a", "expires": 2_147_483_647}]
        });

        let collection = SubscriptionCollection::from_body(&body, 4).unwrap();
        assert_eq!(collection[0].appli, Some(4));
        assert!(collection.contains_callback("https://a.example/cb"));
        assert!(collection[0].expires_at().is_some());
    }

    #[test]
    fn test_missing_profiles() {
        assert!(matches!(
            SubscriptionCollection::from_body(&json!(true), 1),
            Err(DecodingError::MissingField { field: "profiles" })
        ));
    }

    #[test]
    fn test_single_subscription_uses_request_fields() {
        let body = json!({"comment": "scale", "expires": 1_600_000_000});

        let subscription = Subscription::from_body(&body, "https://a.example/cb", 1).unwrap();
        assert_eq!(
            subscription.callback_url.as_deref(),
            Some("https://a.example/cb")
        );
        assert_eq!(subscription.appli, Some(1));
        assert_eq!(subscription.comment.as_deref(), Some("scale"));
    }

    #[test]
    fn test_single_subscription_rejects_sentinel() {
        assert!(Subscription::from_body(&json!(true), "https://a.example/cb", 1).is_err());
    }
}
