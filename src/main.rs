// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava Club Feed
//!
//! Refreshes an access token, fetches a club's activity feed and prints
//! one line per activity. Runs once, or periodically when
//! `FETCH_INTERVAL_SECS` is set.

use std::process::ExitCode;
use strava_club_feed::{
    config::Config,
    services::{run_periodic, ClubFeed, StravaClient},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Club feed failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;
    let client = StravaClient::new(&config)?;
    let feed = ClubFeed::new(client, &config);

    let Some(period) = config.fetch_interval else {
        tracing::info!(club_id = %config.club_id, "Fetching activities from club");
        let count = feed.run_once(&mut std::io::stdout()).await?;
        tracing::info!(count, "Done");
        return Ok(());
    };

    tracing::info!(
        club_id = %config.club_id,
        interval_secs = period.as_secs(),
        "Scheduler started"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    let feed = &feed;
    run_periodic(period, shutdown, move || async move {
        feed.run_logged(&mut std::io::stdout()).await;
    })
    .await;

    Ok(())
}

/// Initialize structured JSON logging on stderr (stdout carries the feed).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,strava_club_feed=debug"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
