// ABOUTME: User profile record decoded from the `users` list of a getbyuserid body
// ABOUTME: The most recent entry (last in the list) is the one returned to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::decode_list;
use crate::errors::DecodingError;

/// Profile of one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Service user id
    pub id: i64,
    /// First name
    pub firstname: Option<String>,
    /// Last name
    pub lastname: Option<String>,
    /// Short display name
    pub shortname: Option<String>,
    /// 0 for male, 1 for female
    pub gender: Option<i64>,
    /// Body fat computation method
    pub fatmethod: Option<i64>,
    /// Birth date as a Unix timestamp
    pub birthdate: Option<i64>,
    /// Whether the profile is public (bitmask)
    pub ispublic: Option<i64>,
}

impl User {
    /// Build the user from a getbyuserid body
    ///
    /// # Errors
    ///
    /// Returns `DecodingError` if `users` is absent, malformed or empty
    pub fn from_body(body: &Value) -> Result<Self, DecodingError> {
        decode_list::<Self>(body, "users")?
            .pop()
            .ok_or(DecodingError::EmptyList { field: "users" })
    }

    /// Birth date, when present and in range
    #[must_use]
    pub fn birth_date(&self) -> Option<DateTime<Utc>> {
        self.birthdate
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
    }
}
