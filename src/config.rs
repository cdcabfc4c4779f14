//! Application configuration loaded from environment variables.
//!
//! A local `.env` file is read first if present. The four Strava settings
//! are passed through as-is: a missing variable becomes an empty string
//! and is only warned about, never rejected.

use secrecy::SecretString;
use std::env;
use std::path::Path;
use std::time::Duration;

/// Default Strava REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://www.strava.com/api/v3";
/// Default Strava OAuth token endpoint.
pub const DEFAULT_OAUTH_URL: &str = "https://www.strava.com/oauth/token";
/// Default per-request deadline.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth client ID
    pub client_id: String,
    /// Strava OAuth client secret
    pub client_secret: SecretString,
    /// Long-lived refresh token exchanged for an access token on each run
    pub refresh_token: SecretString,
    /// Club whose activity feed is fetched
    pub club_id: String,
    /// Strava REST API base URL
    pub api_base: String,
    /// Strava OAuth token endpoint
    pub oauth_url: String,
    /// Deadline applied to each outbound request
    pub request_timeout: Duration,
    /// Repeat the run at this interval; `None` runs once and exits
    pub fetch_interval: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_file(Path::new(".env"));

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Tests use this instead of mutating the process environment.
    pub fn from_lookup<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut passthrough = |key: &'static str| {
            get(key).unwrap_or_else(|| {
                tracing::warn!(var = key, "Environment variable not set, using empty string");
                String::new()
            })
        };

        let client_id = passthrough("CLIENT_ID");
        let client_secret = passthrough("CLIENT_SECRET");
        let refresh_token = passthrough("REFRESH_TOKEN");
        let club_id = passthrough("CLUB_ID");

        let api_base = get("STRAVA_API_BASE")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let oauth_url = get("STRAVA_OAUTH_URL").unwrap_or_else(|| DEFAULT_OAUTH_URL.to_string());

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(v) => parse_secs("REQUEST_TIMEOUT_SECS", &v)?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        let fetch_interval = get("FETCH_INTERVAL_SECS")
            .map(|v| parse_secs("FETCH_INTERVAL_SECS", &v))
            .transpose()?;

        Ok(Self {
            client_id,
            client_secret: SecretString::new(client_secret.into()),
            refresh_token: SecretString::new(refresh_token.into()),
            club_id,
            api_base,
            oauth_url,
            request_timeout,
            fetch_interval,
        })
    }
}

/// Load variables from a `.env`-style file, without overriding ones
/// already set. Returns whether the file was loaded.
pub fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Loaded environment file");
            true
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Error loading environment file");
            false
        }
    }
}

/// Parse a positive whole number of seconds.
fn parse_secs(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} (expected a positive number of seconds)")]
    Invalid { var: &'static str, value: String },
}
