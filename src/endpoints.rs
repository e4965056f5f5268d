// ABOUTME: Endpoint methods of the WBS API layered over the request executor
// ABOUTME: User profile, activity, measures and notification subscription management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use serde_json::Value;
use tracing::instrument;

use crate::client::WbsClient;
use crate::constants::{actions, params as param_names, paths, DEFAULT_APPLI};
use crate::errors::{ConfigurationError, WbsResult};
use crate::models::{
    ActivityCollection, MeasureCollection, Subscription, SubscriptionCollection, User,
};
use crate::params::{ActivityRange, QueryParams};

impl WbsClient {
    /// Profile of the configured user
    ///
    /// # Errors
    ///
    /// Returns `Service`/`Transport` errors from the call, or `Decoding` if the
    /// body has no `users` entry
    #[instrument(skip(self))]
    pub async fn get_user(&self) -> WbsResult<User> {
        let body = self
            .execute(paths::USER, actions::GET_BY_USER_ID, QueryParams::new())
            .await?;
        Ok(User::from_body(&body)?)
    }

    /// Activity summaries for a day, a range, or everything
    ///
    /// `start` and `end` are `YYYY-MM-DD`. No dates fetches everything, only
    /// `start` fetches that day, both fetch the inclusive range.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` for an end without a start or a malformed date,
    /// before any request is sent
    pub async fn get_activity(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> WbsResult<ActivityCollection> {
        let range = ActivityRange::from_dates(start, end)?;
        self.get_activity_range(range).await
    }

    /// Activity summaries for an already validated range
    ///
    /// # Errors
    ///
    /// Returns `Service`/`Transport` errors from the call, or `Decoding` if the
    /// body is neither an activity nor an activity list
    #[instrument(skip(self))]
    pub async fn get_activity_range(&self, range: ActivityRange) -> WbsResult<ActivityCollection> {
        let mut params = QueryParams::new();
        range.apply(&mut params);

        let body = self
            .execute(paths::ACTIVITY, actions::GET_ACTIVITY, params)
            .await?;
        Ok(ActivityCollection::from_body(&body)?)
    }

    /// Measure groups, filtered by any extra parameters
    ///
    /// Accepts a [`QueryParams`] or a [`MeasureQuery`](crate::MeasureQuery).
    ///
    /// # Errors
    ///
    /// Returns `Service`/`Transport` errors from the call, or `Decoding` if the
    /// body has no `measuregrps`
    pub async fn get_measures(&self, params: impl Into<QueryParams>) -> WbsResult<MeasureCollection> {
        let body = self
            .execute(paths::MEASURE, actions::GET_MEASURES, params.into())
            .await?;
        Ok(MeasureCollection::from_body(&body)?)
    }

    /// Register `callback` for notifications of `appli` (default 1)
    ///
    /// Returns the raw executor result, usually [`SUCCESS_SENTINEL`](crate::SUCCESS_SENTINEL).
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `callback` or `comment` is empty, before any
    /// request is sent
    #[instrument(skip(self))]
    pub async fn subscribe(
        &self,
        callback: &str,
        comment: &str,
        appli: Option<u32>,
    ) -> WbsResult<Value> {
        ConfigurationError::require_non_empty("callback", callback)?;
        ConfigurationError::require_non_empty("comment", comment)?;

        let params = QueryParams::new()
            .with(param_names::CALLBACK_URL, callback)
            .with(param_names::COMMENT, comment)
            .with(param_names::APPLI, appli.unwrap_or(DEFAULT_APPLI));

        self.execute(paths::NOTIFY, actions::SUBSCRIBE, params).await
    }

    /// Remove the subscription of `callback` for `appli` (default 1)
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `callback` is empty, before any request is sent
    #[instrument(skip(self))]
    pub async fn unsubscribe(&self, callback: &str, appli: Option<u32>) -> WbsResult<Value> {
        ConfigurationError::require_non_empty("callback", callback)?;

        let params = QueryParams::new()
            .with(param_names::CALLBACK_URL, callback)
            .with(param_names::APPLI, appli.unwrap_or(DEFAULT_APPLI));

        self.execute(paths::NOTIFY, actions::REVOKE, params).await
    }

    /// Subscriptions registered for `appli` (default 1)
    ///
    /// # Errors
    ///
    /// Returns `Service`/`Transport` errors from the call, or `Decoding` if the
    /// body has no `profiles`
    #[instrument(skip(self))]
    pub async fn list_subscriptions(&self, appli: Option<u32>) -> WbsResult<SubscriptionCollection> {
        let appli = appli.unwrap_or(DEFAULT_APPLI);
        let params = QueryParams::new().with(param_names::APPLI, appli);

        let body = self.execute(paths::NOTIFY, actions::LIST, params).await?;
        Ok(SubscriptionCollection::from_body(&body, appli)?)
    }

    /// The subscription of `callback` for `appli` (default 1)
    ///
    /// An unknown callback is reported by the service as status 286 and
    /// surfaces as a `Service` error.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `callback` is empty, before any request is sent
    #[instrument(skip(self))]
    pub async fn is_subscribed(&self, callback: &str, appli: Option<u32>) -> WbsResult<Subscription> {
        ConfigurationError::require_non_empty("callback", callback)?;
        let appli = appli.unwrap_or(DEFAULT_APPLI);

        let params = QueryParams::new()
            .with(param_names::CALLBACK_URL, callback)
            .with(param_names::APPLI, appli);

        let body = self.execute(paths::NOTIFY, actions::GET, params).await?;
        Ok(Subscription::from_body(&body, callback, appli)?)
    }
}
