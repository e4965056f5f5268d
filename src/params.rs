// ABOUTME: Query parameter map, activity date policy and measure query builder
// ABOUTME: Validates caller input into ConfigurationError before any request is built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::constants::params as param_names;
use crate::errors::ConfigurationError;
use crate::models::{MeasureCategory, MeasureType};

/// Wire format of activity dates
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query string parameters of one request, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Value of `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` is set
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Display> Extend<(K, V)> for QueryParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Which days a getactivity call covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityRange {
    /// Every day the service has
    All,
    /// A single day (`date`)
    Day(NaiveDate),
    /// An inclusive range (`startdateymd` / `enddateymd`)
    Span {
        /// First day
        start: NaiveDate,
        /// Last day
        end: NaiveDate,
    },
}

impl ActivityRange {
    /// Apply the date policy to optional `YYYY-MM-DD` strings
    ///
    /// No dates fetches everything, a start alone fetches that day, start and
    /// end fetch the range. Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an end without a start, a date that is
    /// not `YYYY-MM-DD`, or an end before its start
    pub fn from_dates(start: Option<&str>, end: Option<&str>) -> Result<Self, ConfigurationError> {
        let start = start.map(str::trim).filter(|s| !s.is_empty());
        let end = end.map(str::trim).filter(|s| !s.is_empty());

        match (start, end) {
            (None, None) => Ok(Self::All),
            (Some(start), None) => Ok(Self::Day(parse_date("start", start)?)),
            (None, Some(_)) => Err(ConfigurationError::invalid_argument(
                "end",
                "an end date requires a start date",
            )),
            (Some(start), Some(end)) => {
                let start = parse_date("start", start)?;
                let end = parse_date("end", end)?;
                if end < start {
                    return Err(ConfigurationError::invalid_argument(
                        "end",
                        format!("{end} is before start date {start}"),
                    ));
                }
                Ok(Self::Span { start, end })
            }
        }
    }

    /// Write the date parameters for this range
    pub fn apply(&self, query: &mut QueryParams) {
        match self {
            Self::All => {}
            Self::Day(day) => query.insert(param_names::DATE, day.format(DATE_FORMAT)),
            Self::Span { start, end } => {
                query.insert(param_names::START_DATE_YMD, start.format(DATE_FORMAT));
                query.insert(param_names::END_DATE_YMD, end.format(DATE_FORMAT));
            }
        }
    }
}

fn parse_date(parameter: &'static str, value: &str) -> Result<NaiveDate, ConfigurationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|err| {
        ConfigurationError::invalid_argument(
            parameter,
            format!("`{value}` is not a YYYY-MM-DD date ({err})"),
        )
    })
}

/// Filters for a getmeas call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasureQuery {
    meastype: Option<MeasureType>,
    category: Option<MeasureCategory>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    last_update: Option<DateTime<Utc>>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl MeasureQuery {
    /// No filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only this measure type
    #[must_use]
    pub fn meastype(mut self, meastype: MeasureType) -> Self {
        self.meastype = Some(meastype);
        self
    }

    /// Only real readings or only objectives
    #[must_use]
    pub fn category(mut self, category: MeasureCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Groups captured in `[start, end]`
    #[must_use]
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Groups created or modified since `since`
    #[must_use]
    pub fn updated_since(mut self, since: DateTime<Utc>) -> Self {
        self.last_update = Some(since);
        self
    }

    /// At most `limit` groups
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip the first `offset` groups
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl From<MeasureQuery> for QueryParams {
    fn from(query: MeasureQuery) -> Self {
        let mut params = Self::new();
        if let Some(meastype) = query.meastype {
            params.insert("meastype", meastype.code());
        }
        if let Some(category) = query.category {
            params.insert("category", category.code());
        }
        if let Some(start) = query.start {
            params.insert("startdate", start.timestamp());
        }
        if let Some(end) = query.end {
            params.insert("enddate", end.timestamp());
        }
        if let Some(last_update) = query.last_update {
            params.insert("lastupdate", last_update.timestamp());
        }
        if let Some(limit) = query.limit {
            params.insert("limit", limit);
        }
        if let Some(offset) = query.offset {
            params.insert("offset", offset);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_activity_policy() {
        assert_eq!(ActivityRange::from_dates(None, None), Ok(ActivityRange::All));
        assert_eq!(
            ActivityRange::from_dates(Some(""), Some("")),
            Ok(ActivityRange::All)
        );
        assert_eq!(
            ActivityRange::from_dates(Some("2020-01-01"), None),
            Ok(ActivityRange::Day(date("2020-01-01")))
        );
        assert_eq!(
            ActivityRange::from_dates(Some("2020-01-01"), Some("2020-01-07")),
            Ok(ActivityRange::Span {
                start: date("2020-01-01"),
                end: date("2020-01-07"),
            })
        );
    }

    #[test]
    fn test_activity_policy_rejections() {
        assert!(matches!(
            ActivityRange::from_dates(None, Some("2020-01-07")),
            Err(ConfigurationError::InvalidArgument {
                parameter: "end",
                ..
            })
        ));
        assert!(matches!(
            ActivityRange::from_dates(Some("01/01/2020"), None),
            Err(ConfigurationError::InvalidArgument {
                parameter: "start",
                ..
            })
        ));
        assert!(matches!(
            ActivityRange::from_dates(Some("2020-01-07"), Some("2020-01-01")),
            Err(ConfigurationError::InvalidArgument {
                parameter: "end",
                ..
            })
        ));
    }

    #[test]
    fn test_activity_params() {
        let mut query = QueryParams::new();
        ActivityRange::Span {
            start: date("2020-01-01"),
            end: date("2020-01-07"),
        }
        .apply(&mut query);

        assert_eq!(query.get("startdateymd"), Some("2020-01-01"));
        assert_eq!(query.get("enddateymd"), Some("2020-01-07"));
        assert!(!query.contains_key("date"));
    }

    #[test]
    fn test_measure_query_params() {
        let start = DateTime::from_timestamp(1_577_836_800, 0).unwrap();
        let end = DateTime::from_timestamp(1_578_441_600, 0).unwrap();
        let params: QueryParams = MeasureQuery::new()
            .meastype(MeasureType::Weight)
            .category(MeasureCategory::Real)
            .between(start, end)
            .limit(10)
            .into();

        assert_eq!(params.get("meastype"), Some("1"));
        assert_eq!(params.get("category"), Some("1"));
        assert_eq!(params.get("startdate"), Some("1577836800"));
        assert_eq!(params.get("enddate"), Some("1578441600"));
        assert_eq!(params.get("limit"), Some("10"));
        assert!(!params.contains_key("offset"));
    }

    #[test]
    fn test_query_params_accept_ints_and_strings() {
        let params: QueryParams = [("b", "two"), ("a", "one")].into_iter().collect();
        let params = params.with("appli", 16);

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "appli", "b"]);
        assert_eq!(params.get("appli"), Some("16"));
    }
}
