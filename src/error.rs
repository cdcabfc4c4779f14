// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the token refresh and club feed requests.

use reqwest::StatusCode;

/// Failure of a single feed run.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Strava request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Strava returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// The refresh request carries credentials in its query string, so the URL
/// is stripped before the error can reach a log line.
impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Transport(err.without_url())
    }
}

impl FeedError {
    /// True if Strava rejected the credentials (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FeedError::Status { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    /// True if the request hit the client's deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FeedError::Transport(err) if err.is_timeout())
    }

    /// True if the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, FeedError::Decode(_))
    }
}

/// Result type alias for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;
