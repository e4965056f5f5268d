// ABOUTME: Result records built from successful WBS response bodies
// ABOUTME: User profile, activity summaries, measure groups, subscriptions and incoming notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

//! Result records
//!
//! Every record is a value object built once by a `from_body` constructor
//! and never mutated. Collections are ordered as the service returned them.

/// Daily activity summaries
pub mod activity;
/// Body measures and their type codes
pub mod measure;
/// Incoming notification callbacks
pub mod notification;
/// Notification subscriptions
pub mod subscription;
/// User profile
pub mod user;

pub use activity::{Activity, ActivityCollection};
pub use measure::{Measure, MeasureCategory, MeasureCollection, MeasureGroup, MeasureType};
pub use notification::Notification;
pub use subscription::{Subscription, SubscriptionCollection};
pub use user::User;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::DecodingError;

/// Take `field` out of `body` and decode it as a list of `T`
pub(crate) fn decode_list<T>(body: &Value, field: &'static str) -> Result<Vec<T>, DecodingError>
where
    T: for<'de> Deserialize<'de>,
{
    let list = body
        .get(field)
        .ok_or(DecodingError::MissingField { field })?;
    Vec::<T>::deserialize(list).map_err(|source| DecodingError::Malformed { field, source })
}
