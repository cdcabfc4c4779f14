// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the Strava responses.

pub mod activity;
pub mod token;

pub use activity::{Activity, ClubAthlete};
pub use token::TokenResponse;
