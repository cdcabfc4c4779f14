// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::json;
use strava_club_feed::config::Config;
use strava_club_feed::services::{ClubFeed, StravaClient};
use wiremock::MockServer;

#[allow(dead_code)]
pub const OAUTH_PATH: &str = "/oauth/token";
#[allow(dead_code)]
pub const CLUB_ID: &str = "4242";
#[allow(dead_code)]
pub const ACTIVITIES_PATH: &str = "/api/v3/clubs/4242/activities";

/// Config pointing both endpoints at the mock server.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    test_config_with(server, &[])
}

/// Like `test_config`, with selected variables overridden. `None` unsets one.
#[allow(dead_code)]
pub fn test_config_with(server: &MockServer, overrides: &[(&str, Option<&str>)]) -> Config {
    let api_base = format!("{}/api/v3", server.uri());
    let oauth_url = format!("{}{}", server.uri(), OAUTH_PATH);

    Config::from_lookup(|key| {
        if let Some((_, value)) = overrides.iter().find(|(k, _)| *k == key) {
            return (*value).map(str::to_string);
        }
        let value = match key {
            "CLIENT_ID" => "test_client_id",
            "CLIENT_SECRET" => "test_secret",
            "REFRESH_TOKEN" => "test_refresh_token",
            "CLUB_ID" => CLUB_ID,
            "STRAVA_API_BASE" => api_base.as_str(),
            "STRAVA_OAUTH_URL" => oauth_url.as_str(),
            "REQUEST_TIMEOUT_SECS" => "5",
            _ => return None,
        };
        Some(value.to_string())
    })
    .expect("test config should load")
}

#[allow(dead_code)]
pub fn test_client(config: &Config) -> StravaClient {
    StravaClient::new(config).expect("client should build")
}

#[allow(dead_code)]
pub fn test_feed(server: &MockServer) -> ClubFeed {
    let config = test_config(server);
    ClubFeed::new(test_client(&config), &config)
}

/// A well-formed token refresh body.
#[allow(dead_code)]
pub fn token_body() -> serde_json::Value {
    json!({
        "token_type": "Bearer",
        "access_token": "fresh_access_token",
        "expires_at": 1568775134,
        "expires_in": 21600,
        "refresh_token": "rotated_refresh_token"
    })
}
