// ABOUTME: Base URL, endpoint paths and action names of the WBS API
// ABOUTME: Each endpoint method pairs one path with one action from this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

/// Default root of every request
pub const DEFAULT_BASE_URL: &str = "http://wbsapi.withings.net/";

/// Endpoint paths, relative to the base URL
pub mod paths {
    /// User profile
    pub const USER: &str = "user";
    /// Activity summaries (v2 API)
    pub const ACTIVITY: &str = "v2/measure";
    /// Body measures
    pub const MEASURE: &str = "measure";
    /// Notification subscriptions
    pub const NOTIFY: &str = "notify";
}

/// Values of the `action` query parameter
pub mod actions {
    /// Profile of the authenticated user
    pub const GET_BY_USER_ID: &str = "getbyuserid";
    /// Daily activity summaries
    pub const GET_ACTIVITY: &str = "getactivity";
    /// Measure groups
    pub const GET_MEASURES: &str = "getmeas";
    /// Register a callback
    pub const SUBSCRIBE: &str = "subscribe";
    /// Remove a callback
    pub const REVOKE: &str = "revoke";
    /// List callbacks
    pub const LIST: &str = "list";
    /// Look up one callback
    pub const GET: &str = "get";
}

/// Query parameter names shared by several endpoints
pub mod params {
    /// User the request is made for
    pub const USER_ID: &str = "userid";
    /// Endpoint action
    pub const ACTION: &str = "action";
    /// Notification callback URL
    pub const CALLBACK_URL: &str = "callbackurl";
    /// Notification comment
    pub const COMMENT: &str = "comment";
    /// Notification application id
    pub const APPLI: &str = "appli";
    /// Single activity day
    pub const DATE: &str = "date";
    /// First activity day of a range
    pub const START_DATE_YMD: &str = "startdateymd";
    /// Last activity day of a range
    pub const END_DATE_YMD: &str = "enddateymd";
}

/// Notification application ids (`appli`)
pub mod appli {
    /// Weight and body composition
    pub const WEIGHT: u32 = 1;
    /// Blood pressure and heart rate
    pub const BLOOD_PRESSURE: u32 = 4;
    /// Activity
    pub const ACTIVITY: u32 = 16;
    /// Sleep
    pub const SLEEP: u32 = 44;
}

/// Application id used when the caller does not name one
pub const DEFAULT_APPLI: u32 = appli::WEIGHT;
