// ABOUTME: Incoming notification callback decoding
// ABOUTME: Parses the query string the service sends to a subscribed callback URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

//! Notification callbacks
//!
//! When new data is available the service requests the subscribed callback
//! URL with `userid`, `startdate`, `enddate` and `appli` in the query string.
//! The receiving application answers it and then fetches the data for the
//! reported window with the client.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::form_urlencoded;

use crate::constants::params;
use crate::errors::DecodingError;

/// One push notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// User whose data changed
    pub user_id: String,
    /// Start of the changed window
    pub start: DateTime<Utc>,
    /// End of the changed window
    pub end: DateTime<Utc>,
    /// Application id of the changed data
    pub appli: u32,
}

impl Notification {
    /// Parse a callback query string (with or without the leading `?`)
    ///
    /// # Errors
    ///
    /// Returns `DecodingError` when a field is missing or not numeric
    pub fn from_query(query: &str) -> Result<Self, DecodingError> {
        let mut user_id = None;
        let mut start = None;
        let mut end = None;
        let mut appli = None;

        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                params::USER_ID => user_id = Some(value.into_owned()),
                "startdate" => start = Some(parse_timestamp("startdate", &value)?),
                "enddate" => end = Some(parse_timestamp("enddate", &value)?),
                params::APPLI => {
                    appli = Some(value.parse::<u32>().map_err(|_| {
                        DecodingError::InvalidValue {
                            field: params::APPLI,
                            value: value.clone().into_owned(),
                        }
                    })?);
                }
                _ => {}
            }
        }

        Ok(Self {
            user_id: user_id.ok_or(DecodingError::MissingField {
                field: params::USER_ID,
            })?,
            start: start.ok_or(DecodingError::MissingField { field: "startdate" })?,
            end: end.ok_or(DecodingError::MissingField { field: "enddate" })?,
            appli: appli.ok_or(DecodingError::MissingField {
                field: params::APPLI,
            })?,
        })
    }
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, DecodingError> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
        .ok_or_else(|| DecodingError::InvalidValue {
            field,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_callback() {
        let notification =
            Notification::from_query("?userid=29&startdate=1577836800&enddate=1577923200&appli=1")
                .unwrap();

        assert_eq!(notification.user_id, "29");
        assert_eq!(notification.start.timestamp(), 1_577_836_800);
        assert_eq!(notification.end.timestamp(), 1_577_923_200);
        assert_eq!(notification.appli, 1);
    }

    #[test]
    fn test_missing_field() {
        assert!(matches!(
            Notification::from_query("userid=29&startdate=1&enddate=2"),
            Err(DecodingError::MissingField { field: "appli" })
        ));
    }

    #[test]
    fn test_non_numeric_date() {
        assert!(matches!(
            Notification::from_query("userid=29&startdate=today&enddate=2&appli=1"),
            Err(DecodingError::InvalidValue {
                field: "startdate",
                ..
            })
        ));
    }
}
