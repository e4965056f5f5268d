// ABOUTME: Constants for the WBS API organised by concern
// ABOUTME: Status-code table plus endpoint paths, actions and notification application ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

/// Status codes and their messages
pub mod status;

/// Base URL, paths, actions and parameter names
pub mod endpoints;

pub use endpoints::{actions, appli, params, paths, DEFAULT_APPLI, DEFAULT_BASE_URL};
