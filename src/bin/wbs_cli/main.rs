// ABOUTME: wbs-cli - command-line front end for the WBS client library
// ABOUTME: Reads credentials from the environment and prints endpoint results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WBS Client Contributors
//!
//! Usage:
//! ```bash
//! export WBS_CONSUMER_KEY=... WBS_CONSUMER_SECRET=... \
//!        WBS_ACCESS_TOKEN=... WBS_TOKEN_SECRET=... WBS_USER_ID=...
//!
//! # Profile of the configured user
//! wbs-cli user
//!
//! # One day, or an inclusive range, of activity
//! wbs-cli activity --start 2020-01-01
//! wbs-cli activity --start 2020-01-01 --end 2020-01-07
//!
//! # Weight readings only
//! wbs-cli measures --meastype 1 --limit 10
//!
//! # Notification subscriptions
//! wbs-cli notify subscribe https://example.com/hook "weight updates"
//! wbs-cli notify list --appli 1
//! wbs-cli notify get https://example.com/hook
//! wbs-cli notify revoke https://example.com/hook
//!
//! # Decode a notification callback query string offline
//! wbs-cli parse-notification "userid=29&startdate=1577836800&enddate=1577923200&appli=1"
//! ```

#![allow(missing_docs)]

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use wbs_client::logging::LoggingConfig;
use wbs_client::{initialize_shared_client, HttpClientConfig, WbsClient, WbsConfig};

#[derive(Parser)]
#[command(
    name = "wbs-cli",
    about = "WBS health data CLI",
    long_about = "Query user, activity and measure data and manage notification subscriptions. \
                  Credentials are read from WBS_* environment variables."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Api(ApiCommand),

    /// Decode the query string of a notification callback
    ParseNotification {
        /// Query string as received on the callback URL
        query: String,
    },
}

/// Commands that call the service and need credentials
#[derive(Debug, Subcommand)]
enum ApiCommand {
    /// Show the configured user's profile
    User,

    /// Show activity summaries
    Activity {
        /// First day (YYYY-MM-DD); alone it selects that single day
        #[arg(long)]
        start: Option<String>,

        /// Last day (YYYY-MM-DD), requires --start
        #[arg(long)]
        end: Option<String>,
    },

    /// Show body measures
    Measures {
        /// Measure type code (1 = weight, 9 = diastolic, ...)
        #[arg(long)]
        meastype: Option<i64>,

        /// Only groups updated since this Unix timestamp
        #[arg(long)]
        last_update: Option<i64>,

        /// Maximum number of groups
        #[arg(long)]
        limit: Option<u32>,

        /// Number of groups to skip
        #[arg(long)]
        offset: Option<u32>,
    },

    /// Notification subscription management
    Notify {
        #[command(subcommand)]
        action: NotifyCommand,
    },
}

#[derive(Debug, Subcommand)]
enum NotifyCommand {
    /// Subscribe a callback URL
    Subscribe {
        /// Callback URL
        callback: String,

        /// Description shown to the user
        comment: String,

        /// Notification category (1 = weight, 4 = blood pressure, 16 = activity, 44 = sleep)
        #[arg(long)]
        appli: Option<u32>,
    },

    /// Revoke a callback URL
    Revoke {
        /// Callback URL
        callback: String,

        /// Notification category
        #[arg(long)]
        appli: Option<u32>,
    },

    /// List subscriptions
    List {
        /// Notification category
        #[arg(long)]
        appli: Option<u32>,
    },

    /// Show the subscription of a callback URL
    Get {
        /// Callback URL
        callback: String,

        /// Notification category
        #[arg(long)]
        appli: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    match cli.command {
        Command::ParseNotification { query } => commands::parse_notification(&query),
        Command::Api(command) => {
            let client = connect(cli.base_url)?;
            run(&client, command).await
        }
    }
}

/// Build the client from the environment, with an optional base URL override
fn connect(base_url: Option<String>) -> Result<WbsClient> {
    let http = HttpClientConfig::from_env();
    initialize_shared_client(http.timeout_secs, http.connect_timeout_secs);

    let mut config = WbsConfig::from_env();
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    debug!(?config, "Loaded client configuration");

    WbsClient::new(config).context("Invalid WBS configuration")
}

async fn run(client: &WbsClient, command: ApiCommand) -> Result<()> {
    match command {
        ApiCommand::User => commands::user(client).await,
        ApiCommand::Activity { start, end } => {
            commands::activity(client, start.as_deref(), end.as_deref()).await
        }
        ApiCommand::Measures {
            meastype,
            last_update,
            limit,
            offset,
        } => commands::measures(client, meastype, last_update, limit, offset).await,
        ApiCommand::Notify { action } => match action {
            NotifyCommand::Subscribe {
                callback,
                comment,
                appli,
            } => commands::subscribe(client, &callback, &comment, appli).await,
            NotifyCommand::Revoke { callback, appli } => {
                commands::revoke(client, &callback, appli).await
            }
            NotifyCommand::List { appli } => commands::list(client, appli).await,
            NotifyCommand::Get { callback, appli } => commands::get(client, &callback, appli).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_notification_is_an_offline_command() {
        let cli = Cli::try_parse_from([
            "wbs-cli",
            "parse-notification",
            "userid=29&startdate=1577836800&enddate=1577923200&appli=1",
        ])
        .unwrap();

        match cli.command {
            Command::ParseNotification { query } => {
                assert!(commands::parse_notification(&query).is_ok());
            }
            Command::Api(other) => panic!("expected parse-notification, got {other:?}"),
        }
    }

    #[test]
    fn test_api_commands_parse_at_top_level() {
        let cli = Cli::try_parse_from(["wbs-cli", "activity", "--start", "2020-01-01"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Api(ApiCommand::Activity { start: Some(_), end: None })
        ));

        let cli = Cli::try_parse_from(["wbs-cli", "notify", "list", "--appli", "44"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Api(ApiCommand::Notify {
                action: NotifyCommand::List { appli: Some(44) }
            })
        ));
    }

    #[test]
    fn test_invalid_notification_query_fails() {
        assert!(commands::parse_notification("userid=29").is_err());
    }
}
