// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for the token refresh and the club activity feed.
//!
//! Handles:
//! - Exchanging the refresh token for an access token
//! - Fetching a club's activity list
//!
//! Both requests carry the client's request timeout. Nothing is retried.

use crate::config::Config;
use crate::error::{FeedError, Result};
use crate::models::{Activity, TokenResponse};
use crate::time_utils::format_unix_secs;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upper bound on TCP connect, kept below the overall request deadline.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    api_base: String,
    oauth_url: String,
    client_id: String,
    client_secret: SecretString,
}

impl StravaClient {
    /// Create a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(config.request_timeout))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            oauth_url: config.oauth_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    /// Exchange a refresh token for a fresh access token.
    ///
    /// POST {oauth_url}?client_id=..&client_secret=..&grant_type=refresh_token&refresh_token=..
    ///
    /// Only HTTP 200 is accepted.
    pub async fn refresh_token(&self, refresh_token: &SecretString) -> Result<TokenResponse> {
        let response = self
            .http
            .post(&self.oauth_url)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.expose_secret()),
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.expose_secret()),
            ])
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(status_error(response).await);
        }

        let token: TokenResponse = decode_body(response).await?;
        tracing::debug!(
            token_type = %token.token_type,
            expires_at = %format_unix_secs(token.expires_at),
            "Access token refreshed"
        );
        Ok(token)
    }

    /// List the most recent activities of a club's members.
    ///
    /// GET {api_base}/clubs/{club_id}/activities
    /// Authorization: {token_type} {access_token}
    ///
    /// Only the first page is requested.
    pub async fn list_club_activities(
        &self,
        club_id: &str,
        token: &TokenResponse,
    ) -> Result<Vec<Activity>> {
        let url = format!("{}/clubs/{}/activities", self.api_base, club_id);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, token.authorization())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        decode_body(response).await
    }
}

/// Build a status error, logging the rejection.
async fn status_error(response: reqwest::Response) -> FeedError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!("Strava rejected credentials (401)");
    }

    FeedError::Status { status, body }
}

/// Read the full body, then decode it as JSON.
async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
