// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava club feed: print a club's recent activities.
//!
//! This crate refreshes a Strava OAuth access token, fetches one club's
//! activity feed and prints a summary line per activity.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
