// ABOUTME: Daily activity summaries decoded from getactivity bodies
// ABOUTME: Accepts both the single-day object shape and the `activities` list shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Deref;

use super::decode_list;
use crate::errors::DecodingError;

/// Activity summary for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Day the summary covers
    pub date: NaiveDate,
    /// IANA timezone of the day
    pub timezone: Option<String>,
    /// Step count
    pub steps: Option<u64>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Active calories
    pub calories: Option<f64>,
    /// Total calories including basal metabolism
    pub totalcalories: Option<f64>,
    /// Floors climbed, in meters of elevation
    pub elevation: Option<f64>,
    /// Seconds of light activity
    pub soft: Option<u64>,
    /// Seconds of moderate activity
    pub moderate: Option<u64>,
    /// Seconds of intense activity
    pub intense: Option<u64>,
}

impl Activity {
    /// Seconds spent at moderate or intense effort
    #[must_use]
    pub fn active_seconds(&self) -> u64 {
        self.moderate
            .unwrap_or(0)
            .saturating_add(self.intense.unwrap_or(0))
    }
}

/// Activity summaries in the order the service returned them
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
}

impl ActivityCollection {
    /// Build from a getactivity body
    ///
    /// A single-day query answers with one activity object; ranged and
    /// unbounded queries answer with `{"activities": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `DecodingError` when the body matches neither shape
    pub fn from_body(body: &Value) -> Result<Self, DecodingError> {
        if body.get("activities").is_some() {
            return Ok(Self {
                activities: decode_list(body, "activities")?,
            });
        }

        if body.get("date").is_some() {
            let activity = Activity::deserialize(body).map_err(|source| {
                DecodingError::Malformed {
                    field: "activity",
                    source,
                }
            })?;
            return Ok(Self {
                activities: vec![activity],
            });
        }

        Err(DecodingError::MissingField {
            field: "activities",
        })
    }

    /// Consume the collection
    #[must_use]
    pub fn into_vec(self) -> Vec<Activity> {
        self.activities
    }
}

impl Deref for ActivityCollection {
    type Target = [Activity];

    fn deref(&self) -> &Self::Target {
        &self.activities
    }
}

impl IntoIterator for ActivityCollection {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActivityCollection {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_day_shape() {
        let body = json!({
            "date": "2020-01-01",
            "steps": 4200,
            "distance": 3100.5,
            "moderate": 600,
            "intense": 120,
            "timezone": "Europe/Paris"
        });

        let collection = ActivityCollection::from_body(&body).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0].steps, Some(4200));
        assert_eq!(collection[0].active_seconds(), 720);
    }

    #[test]
    fn test_list_shape_preserves_order() {
        let body = json!({
            "activities": [
                {"date": "2020-01-02", "steps": 2},
                {"date": "2020-01-01", "steps": 1}
            ]
        });

        let collection = ActivityCollection::from_body(&body).unwrap();
        let dates: Vec<String> = collection.iter().map(|a| a.date.to_string()).collect();
        assert_eq!(dates, vec!["2020-01-02", "2020-01-01"]);
    }

    #[test]
    fn test_unrecognised_shape() {
        assert!(matches!(
            ActivityCollection::from_body(&json!({"other": 1})),
            Err(DecodingError::MissingField {
                field: "activities"
            })
        ));
        assert!(matches!(
            ActivityCollection::from_body(&json!({"date": "yesterday"})),
            Err(DecodingError::Malformed {
                field: "activity",
                ..
            })
        ));
    }

    #[test]
    fn test_active_seconds_saturates() {
        let body = json!({
            "date": "2020-01-01",
            "moderate": u64::MAX,
            "intense": 600
        });

        let collection = ActivityCollection::from_body(&body).unwrap();
        assert_eq!(collection[0].active_seconds(), u64::MAX);
    }
}
