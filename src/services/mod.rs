// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - Strava client and feed workflow.

pub mod feed;
pub mod scheduler;
pub mod strava;

pub use feed::{print_activities, ClubFeed};
pub use scheduler::run_periodic;
pub use strava::StravaClient;
