// ABOUTME: Subcommand implementations for wbs-cli
// ABOUTME: Each command calls one client endpoint and prints the typed result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors

use anyhow::{Context, Result};
use chrono::DateTime;
use serde::Serialize;
use tracing::info;
use wbs_client::{MeasureQuery, MeasureType, Notification, WbsClient};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render result")?;
    println!("{rendered}");
    Ok(())
}

pub async fn user(client: &WbsClient) -> Result<()> {
    let user = client.get_user().await.context("getbyuserid failed")?;
    print_json(&user)
}

pub async fn activity(client: &WbsClient, start: Option<&str>, end: Option<&str>) -> Result<()> {
    let activities = client
        .get_activity(start, end)
        .await
        .context("getactivity failed")?;
    info!(days = activities.len(), "Fetched activity");
    print_json(&activities)
}

pub async fn measures(
    client: &WbsClient,
    meastype: Option<i64>,
    last_update: Option<i64>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<()> {
    let mut query = MeasureQuery::new();
    if let Some(code) = meastype {
        query = query.meastype(MeasureType::from(code));
    }
    if let Some(timestamp) = last_update {
        let since = DateTime::from_timestamp(timestamp, 0)
            .with_context(|| format!("Timestamp {timestamp} is out of range"))?;
        query = query.updated_since(since);
    }
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    if let Some(offset) = offset {
        query = query.offset(offset);
    }

    let measures = client.get_measures(query).await.context("getmeas failed")?;
    if measures.has_more() {
        info!(next_offset = ?measures.next_offset(), "More measure groups available");
    }
    print_json(&measures)
}

pub async fn subscribe(
    client: &WbsClient,
    callback: &str,
    comment: &str,
    appli: Option<u32>,
) -> Result<()> {
    let outcome = client
        .subscribe(callback, comment, appli)
        .await
        .context("subscribe failed")?;
    print_json(&outcome)
}

pub async fn revoke(client: &WbsClient, callback: &str, appli: Option<u32>) -> Result<()> {
    let outcome = client
        .unsubscribe(callback, appli)
        .await
        .context("revoke failed")?;
    print_json(&outcome)
}

pub async fn list(client: &WbsClient, appli: Option<u32>) -> Result<()> {
    let subscriptions = client
        .list_subscriptions(appli)
        .await
        .context("list failed")?;
    print_json(&subscriptions)
}

pub async fn get(client: &WbsClient, callback: &str, appli: Option<u32>) -> Result<()> {
    let subscription = client
        .is_subscribed(callback, appli)
        .await
        .context("get failed")?;
    print_json(&subscription)
}

pub fn parse_notification(query: &str) -> Result<()> {
    let notification =
        Notification::from_query(query).context("Not a valid notification callback")?;
    print_json(&notification)
}
