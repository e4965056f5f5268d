// ABOUTME: Fixed table of service status codes and their human-readable messages
// ABOUTME: Looked up by the envelope decoder when a call reports a non-zero status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

//! Service status codes
//!
//! Every response envelope carries a numeric `status`. Zero means success;
//! the codes below are the failures the service documents.

/// Operation was successful
pub const SUCCESS: i64 = 0;

/// `userid` absent or incorrect
pub const INVALID_USER_ID: i64 = 247;

/// `userid` does not match the OAuth credentials
pub const CREDENTIALS_MISMATCH: i64 = 250;

/// Subscription not found
pub const SUBSCRIPTION_NOT_FOUND: i64 = 286;

/// Callback URL absent or incorrect
pub const INVALID_CALLBACK_URL: i64 = 293;

/// No subscription matched the revoke request
pub const SUBSCRIPTION_NOT_DELETED: i64 = 294;

/// Comment absent or incorrect
pub const INVALID_COMMENT: i64 = 304;

/// Notification quota reached
pub const TOO_MANY_NOTIFICATIONS: i64 = 305;

/// OAuth signature rejected
pub const INVALID_SIGNATURE: i64 = 342;

/// Callback URL unreachable
pub const CALLBACK_URL_NOT_FOUND: i64 = 343;

/// Rate limit hit
pub const TOO_MANY_REQUESTS: i64 = 601;

/// Unspecified unknown error
pub const UNSPECIFIED_ERROR: i64 = 2554;

/// Unknown error
pub const UNKNOWN_ERROR: i64 = 2555;

/// Code-to-message table, in code order
pub const STATUS_MESSAGES: &[(i64, &str)] = &[
    (SUCCESS, "Operation was successful"),
    (INVALID_USER_ID, "The userid provided is absent, or incorrect"),
    (
        CREDENTIALS_MISMATCH,
        "The provided userid and/or OAuth credentials do not match",
    ),
    (SUBSCRIPTION_NOT_FOUND, "No such subscription was found"),
    (
        INVALID_CALLBACK_URL,
        "The callback URL is either absent or incorrect",
    ),
    (
        SUBSCRIPTION_NOT_DELETED,
        "No such subscription could be deleted",
    ),
    (INVALID_COMMENT, "The comment is either absent or incorrect"),
    (
        TOO_MANY_NOTIFICATIONS,
        "Too many notifications are already set",
    ),
    (INVALID_SIGNATURE, "The signature (using OAuth) is invalid"),
    (
        CALLBACK_URL_NOT_FOUND,
        "The notification callback URL does not exist",
    ),
    (TOO_MANY_REQUESTS, "Too many requests"),
    (UNSPECIFIED_ERROR, "An unspecified unknown error occurred"),
    (UNKNOWN_ERROR, "An unknown error occurred"),
];

/// Message for a status code, `None` when the code is not in the table
#[must_use]
pub fn message_for(code: i64) -> Option<&'static str> {
    STATUS_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        let codes: Vec<i64> = STATUS_MESSAGES.iter().map(|(code, _)| *code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert_eq!(codes.len(), 13);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(message_for(601), Some("Too many requests"));
        assert_eq!(
            message_for(2554),
            Some("An unspecified unknown error occurred")
        );
        assert_eq!(message_for(9999), None);
    }
}
