// ABOUTME: Body measure groups decoded from getmeas bodies
// ABOUTME: Typed measure and category codes with scaled real values and pagination hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

//! Body measures
//!
//! A getmeas body carries `measuregrps`: groups of measures taken together
//! (one weigh-in, one blood pressure reading). Each measure stores an integer
//! `value` and a base-10 exponent `unit`, so 7205 with unit -2 is 72.05.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Deref;

use super::decode_list;
use crate::errors::DecodingError;

// Measure type codes
const TYPE_WEIGHT: i64 = 1;
const TYPE_HEIGHT: i64 = 4;
const TYPE_FAT_FREE_MASS: i64 = 5;
const TYPE_FAT_RATIO: i64 = 6;
const TYPE_FAT_MASS: i64 = 8;
const TYPE_DIASTOLIC: i64 = 9;
const TYPE_SYSTOLIC: i64 = 10;
const TYPE_HEART_PULSE: i64 = 11;
const TYPE_SPO2: i64 = 54;

/// What a measure quantifies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MeasureType {
    /// Weight (kg)
    Weight,
    /// Height (m)
    Height,
    /// Fat-free mass (kg)
    FatFreeMass,
    /// Fat ratio (%)
    FatRatio,
    /// Fat mass weight (kg)
    FatMass,
    /// Diastolic blood pressure (mmHg)
    DiastolicBloodPressure,
    /// Systolic blood pressure (mmHg)
    SystolicBloodPressure,
    /// Heart pulse (bpm)
    HeartPulse,
    /// Blood oxygen saturation (%)
    SpO2,
    /// A code this client does not name
    Other(i64),
}

impl MeasureType {
    /// Numeric code used on the wire
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Weight => TYPE_WEIGHT,
            Self::Height => TYPE_HEIGHT,
            Self::FatFreeMass => TYPE_FAT_FREE_MASS,
            Self::FatRatio => TYPE_FAT_RATIO,
            Self::FatMass => TYPE_FAT_MASS,
            Self::DiastolicBloodPressure => TYPE_DIASTOLIC,
            Self::SystolicBloodPressure => TYPE_SYSTOLIC,
            Self::HeartPulse => TYPE_HEART_PULSE,
            Self::SpO2 => TYPE_SPO2,
            Self::Other(code) => code,
        }
    }
}

impl From<i64> for MeasureType {
    fn from(code: i64) -> Self {
        match code {
            TYPE_WEIGHT => Self::Weight,
            TYPE_HEIGHT => Self::Height,
            TYPE_FAT_FREE_MASS => Self::FatFreeMass,
            TYPE_FAT_RATIO => Self::FatRatio,
            TYPE_FAT_MASS => Self::FatMass,
            TYPE_DIASTOLIC => Self::DiastolicBloodPressure,
            TYPE_SYSTOLIC => Self::SystolicBloodPressure,
            TYPE_HEART_PULSE => Self::HeartPulse,
            TYPE_SPO2 => Self::SpO2,
            other => Self::Other(other),
        }
    }
}

impl From<MeasureType> for i64 {
    fn from(kind: MeasureType) -> Self {
        kind.code()
    }
}

/// Whether a group is a real reading or a user goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MeasureCategory {
    /// Measured by a device or entered as a reading
    Real,
    /// Objective set by the user
    Objective,
    /// A code this client does not name
    Other(i64),
}

impl MeasureCategory {
    /// Numeric code used on the wire
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Real => 1,
            Self::Objective => 2,
            Self::Other(code) => code,
        }
    }
}

impl From<i64> for MeasureCategory {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Real,
            2 => Self::Objective,
            other => Self::Other(other),
        }
    }
}

impl From<MeasureCategory> for i64 {
    fn from(category: MeasureCategory) -> Self {
        category.code()
    }
}

/// One scaled measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    /// Unscaled integer value
    pub value: i64,
    /// Base-10 exponent applied to `value`
    pub unit: i32,
    /// Measure type
    #[serde(rename = "type")]
    pub kind: MeasureType,
}

impl Measure {
    /// `value * 10^unit`
    #[must_use]
    pub fn real_value(&self) -> f64 {
        self.value as f64 * 10_f64.powi(self.unit)
    }
}

/// Measures taken together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureGroup {
    /// Group id
    pub grpid: i64,
    /// How the group was captured (device, manual entry, ...)
    pub attrib: Option<i64>,
    /// Capture time as a Unix timestamp
    pub date: i64,
    /// Real reading or objective
    pub category: MeasureCategory,
    /// Measures of the group
    pub measures: Vec<Measure>,
}

impl MeasureGroup {
    /// Capture time
    #[must_use]
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    /// First measure of the given type in this group
    #[must_use]
    pub fn measure(&self, kind: MeasureType) -> Option<&Measure> {
        self.measures.iter().find(|m| m.kind == kind)
    }
}

/// Measure groups with the body's bookkeeping fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MeasureCollection {
    groups: Vec<MeasureGroup>,
    updatetime: Option<i64>,
    timezone: Option<String>,
    more: bool,
    offset: Option<i64>,
}

impl MeasureCollection {
    /// Build from a getmeas body
    ///
    /// # Errors
    ///
    /// Returns `DecodingError` if `measuregrps` is absent or malformed
    pub fn from_body(body: &Value) -> Result<Self, DecodingError> {
        let groups = decode_list(body, "measuregrps")?;

        // `more` is 0/1 on the wire, occasionally a JSON bool
        let more = match body.get("more") {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
            _ => false,
        };

        Ok(Self {
            groups,
            updatetime: body.get("updatetime").and_then(Value::as_i64),
            timezone: body
                .get("timezone")
                .and_then(Value::as_str)
                .map(str::to_owned),
            more,
            offset: body.get("offset").and_then(Value::as_i64),
        })
    }

    /// Server time of the response
    #[must_use]
    pub const fn updatetime(&self) -> Option<i64> {
        self.updatetime
    }

    /// Timezone of the user
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Whether another page is available
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.more
    }

    /// Offset to request the next page with
    #[must_use]
    pub const fn next_offset(&self) -> Option<i64> {
        self.offset
    }

    /// Every measure of one type, in group order
    pub fn measures_of(&self, kind: MeasureType) -> impl Iterator<Item = &Measure> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.measures.iter())
            .filter(move |m| m.kind == kind)
    }

    /// Consume the collection
    #[must_use]
    pub fn into_vec(self) -> Vec<MeasureGroup> {
        self.groups
    }
}

impl Deref for MeasureCollection {
    type Target = [MeasureGroup];

    fn deref(&self) -> &Self::Target {
        &self.groups
    }
}

impl IntoIterator for MeasureCollection {
    type Item = MeasureGroup;
    type IntoIter = std::vec::IntoIter<MeasureGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a MeasureCollection {
    type Item = &'a MeasureGroup;
    type IntoIter = std::slice::Iter<'a, MeasureGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
