// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club feed run.
//!
//! Handles the core workflow:
//! 1. Exchange the refresh token for an access token
//! 2. Fetch the club's activity list
//! 3. Print one summary line per activity

use crate::config::Config;
use crate::error::Result;
use crate::models::Activity;
use crate::services::StravaClient;
use secrecy::SecretString;
use std::io::Write;

/// Fetches and prints one club's activity feed.
#[derive(Clone)]
pub struct ClubFeed {
    client: StravaClient,
    club_id: String,
    refresh_token: SecretString,
}

impl ClubFeed {
    pub fn new(client: StravaClient, config: &Config) -> Self {
        Self {
            client,
            club_id: config.club_id.clone(),
            refresh_token: config.refresh_token.clone(),
        }
    }

    /// Run the full sequence once, writing activity lines to `out`.
    ///
    /// Returns the number of activities printed. A failed token refresh
    /// stops the run before the activities request is sent.
    pub async fn run_once<W: Write>(&self, out: &mut W) -> Result<usize> {
        let token = self.client.refresh_token(&self.refresh_token).await?;

        let activities = self
            .client
            .list_club_activities(&self.club_id, &token)
            .await?;

        tracing::info!(
            club_id = %self.club_id,
            count = activities.len(),
            "Fetched club activities"
        );

        print_activities(&activities, out)
    }

    /// Run once and absorb any failure into a log line.
    ///
    /// Used for scheduled runs, where a failed run must not stop the next
    /// tick. Returns the printed count, or `None` if the run failed.
    pub async fn run_logged<W: Write>(&self, out: &mut W) -> Option<usize> {
        match self.run_once(out).await {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    club_id = %self.club_id,
                    unauthorized = e.is_unauthorized(),
                    "Club feed run failed, waiting for next tick"
                );
                None
            }
        }
    }
}

/// Write one summary line per activity. Returns the number of lines written.
pub fn print_activities<W: Write>(activities: &[Activity], out: &mut W) -> Result<usize> {
    for activity in activities {
        writeln!(out, "{}", activity.summary_line())?;
    }
    out.flush()?;
    Ok(activities.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClubAthlete;

    fn activity(name: &str, kind: &str, first: &str, last: &str) -> Activity {
        Activity {
            resource_state: Some(2),
            athlete: ClubAthlete {
                resource_state: Some(2),
                firstname: first.to_string(),
                lastname: last.to_string(),
            },
            name: name.to_string(),
            distance: 0.0,
            moving_time: 0,
            elapsed_time: 0,
            total_elevation_gain: 0.0,
            activity_type: kind.to_string(),
            sport_type: kind.to_string(),
            workout_type: None,
        }
    }

    #[test]
    fn test_print_nothing_for_empty_feed() {
        let mut out = Vec::new();
        let count = print_activities(&[], &mut out).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_one_line_per_activity() {
        let activities = vec![
            activity("Morning Run", "Run", "A", "B"),
            activity("Lunch Ride", "Ride", "C", "D."),
        ];
        let mut out = Vec::new();
        let count = print_activities(&activities, &mut out).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Activity: Morning Run, Type: Run, Athlete: A B",
                "Activity: Lunch Ride, Type: Ride, Athlete: C D.",
            ]
        );
    }
}
