// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! OAuth token refresh response.

use serde::{Deserialize, Deserializer};

/// Token refresh response from Strava.
///
/// Used for exactly one activities request and then dropped.
#[derive(Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    /// Authorization scheme, normally "Bearer"
    pub token_type: String,
    pub access_token: String,
    /// Expiry as Unix seconds
    #[serde(deserialize_with = "unix_seconds")]
    pub expires_at: i64,
    pub refresh_token: String,
    /// Seconds until expiry, when Strava includes it
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl TokenResponse {
    /// Value for the `Authorization` header: `{token_type} {access_token}`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("refresh_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Accept `expires_at` both as a JSON number and as a numeric string.
fn unix_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(secs) => Ok(secs),
        Raw::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid expires_at: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strava_refresh_body() {
        let json = r#"{
            "token_type": "Bearer",
            "access_token": "a9b723",
            "expires_at": 1568775134,
            "expires_in": 20566,
            "refresh_token": "b5c569"
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.access_token, "a9b723");
        assert_eq!(token.expires_at, 1568775134);
        assert_eq!(token.refresh_token, "b5c569");
        assert_eq!(token.expires_in, Some(20566));
        assert_eq!(token.authorization(), "Bearer a9b723");
    }

    #[test]
    fn test_expires_at_as_string() {
        let json = r#"{"token_type":"Bearer","access_token":"a","expires_at":"1568775134","refresh_token":"r"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.expires_at, 1568775134);
        assert_eq!(token.expires_in, None);
    }

    #[test]
    fn test_expires_at_garbage_rejected() {
        let json = r#"{"token_type":"Bearer","access_token":"a","expires_at":"tomorrow","refresh_token":"r"}"#;
        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let token = TokenResponse {
            token_type: "Bearer".to_string(),
            access_token: "live-access".to_string(),
            expires_at: 0,
            refresh_token: "live-refresh".to_string(),
            expires_in: None,
        };
        let debug = format!("{:?}", token);
        assert!(!debug.contains("live-access"));
        assert!(!debug.contains("live-refresh"));
    }
}
