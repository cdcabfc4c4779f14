// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Club activity records as returned by `GET /clubs/{id}/activities`.

use serde::{Deserialize, Deserializer};

/// One entry of a club activity feed.
///
/// Strava only exposes a summary of each activity here: no ID, no start
/// date and only the athlete's name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    /// Representation level reported by Strava (2 = summary)
    #[serde(default)]
    pub resource_state: Option<i64>,
    /// Athlete who recorded the activity
    pub athlete: ClubAthlete,
    /// Activity name/title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: u64,
    /// Elapsed time in seconds
    #[serde(default)]
    pub elapsed_time: u64,
    /// Total elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: f64,
    /// Legacy activity type (Ride, Run, ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub activity_type: String,
    /// Sport type (Ride, Run, TrailRun, Hike, etc.)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sport_type: String,
    /// Workout tag (race, long run, ...); null for untagged activities
    #[serde(default)]
    pub workout_type: Option<i64>,
}

/// Athlete as embedded in a club activity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClubAthlete {
    #[serde(default)]
    pub resource_state: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub firstname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lastname: String,
}

impl Activity {
    /// One-line summary printed for each activity.
    pub fn summary_line(&self) -> String {
        format!(
            "Activity: {}, Type: {}, Athlete: {} {}",
            self.name, self.activity_type, self.athlete.firstname, self.athlete.lastname
        )
    }
}

/// Treat an explicit JSON `null` string like a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
