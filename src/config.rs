// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Third-party API credentials are injected here and nowhere else. When a
//! credential pair is absent the matching integration is reported as not
//! configured instead of failing startup.

use std::env;
use std::path::PathBuf;

/// Weight used for calorie estimates when the profile has none.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory holding one JSON document per Record Store collection.
    /// `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Frontend URL for redirects and CORS
    pub frontend_url: String,
    /// Fallback body weight for the calorie-burn estimate
    pub default_weight_kg: f64,
    /// Feed sample rows to the dashboard when nothing has been logged yet
    pub sample_data_fallback: bool,

    // --- External APIs ---
    /// Strava OAuth credentials
    pub strava: Option<StravaCredentials>,
    /// Explicit OAuth redirect URI (derived from the Host header otherwise)
    pub strava_redirect_uri: Option<String>,
    /// Strava OAuth base (`https://www.strava.com`)
    pub strava_oauth_url: String,
    /// Strava REST base (`https://www.strava.com/api/v3`)
    pub strava_api_url: String,
    /// Nutritionix credentials
    pub nutritionix: Option<NutritionixCredentials>,
    /// Nutritionix REST base
    pub nutritionix_api_url: String,
}

/// Strava OAuth client credentials.
#[derive(Debug, Clone)]
pub struct StravaCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Nutritionix application credentials.
#[derive(Debug, Clone)]
pub struct NutritionixCredentials {
    pub app_id: String,
    pub app_key: String,
}

impl Config {
    /// Default config for testing only (in-memory store, no credentials).
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            data_dir: None,
            frontend_url: "http://localhost:5173".to_string(),
            default_weight_kg: DEFAULT_WEIGHT_KG,
            sample_data_fallback: false,
            strava: Some(StravaCredentials {
                client_id: "test_client_id".to_string(),
                client_secret: "test_secret".to_string(),
            }),
            strava_redirect_uri: None,
            strava_oauth_url: "http://127.0.0.1:9".to_string(),
            strava_api_url: "http://127.0.0.1:9/api/v3".to_string(),
            nutritionix: None,
            nutritionix_api_url: "http://127.0.0.1:9/v2".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        let data_dir = match env::var("DATA_DIR") {
            Ok(dir) if dir.trim() == ":memory:" => None,
            Ok(dir) => Some(PathBuf::from(dir.trim())),
            Err(_) => Some(PathBuf::from("data")),
        };

        let default_weight_kg = match env::var("DEFAULT_WEIGHT_KG") {
            Ok(raw) => {
                let weight: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("DEFAULT_WEIGHT_KG", raw.clone()))?;
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(ConfigError::Invalid("DEFAULT_WEIGHT_KG", raw));
                }
                weight
            }
            Err(_) => DEFAULT_WEIGHT_KG,
        };

        let sample_data_fallback = match env::var("SAMPLE_DATA_FALLBACK") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("SAMPLE_DATA_FALLBACK", raw))?,
            Err(_) => true,
        };

        let strava = credential_pair("STRAVA_CLIENT_ID", "STRAVA_CLIENT_SECRET")?.map(
            |(client_id, client_secret)| StravaCredentials {
                client_id,
                client_secret,
            },
        );

        let nutritionix = credential_pair("NUTRITIONIX_APP_ID", "NUTRITIONIX_APP_KEY")?
            .map(|(app_id, app_key)| NutritionixCredentials { app_id, app_key });

        Ok(Self {
            port,
            data_dir,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            default_weight_kg,
            sample_data_fallback,
            strava,
            strava_redirect_uri: env::var("STRAVA_REDIRECT_URI").ok(),
            strava_oauth_url: env::var("STRAVA_OAUTH_URL")
                .unwrap_or_else(|_| "https://www.strava.com".to_string()),
            strava_api_url: env::var("STRAVA_API_URL")
                .unwrap_or_else(|_| "https://www.strava.com/api/v3".to_string()),
            nutritionix,
            nutritionix_api_url: env::var("NUTRITIONIX_API_URL")
                .unwrap_or_else(|_| "https://trackapi.nutritionix.com/v2".to_string()),
        })
    }
}

/// Read an id/secret pair. Both or neither must be set; a blank value
/// counts as unset.
fn credential_pair(
    id_var: &'static str,
    secret_var: &'static str,
) -> Result<Option<(String, String)>, ConfigError> {
    let read = |var: &str| {
        env::var(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    match (read(id_var), read(secret_var)) {
        (Some(id), Some(secret)) => Ok(Some((id, secret))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigError::Missing(secret_var)),
        (None, Some(_)) => Err(ConfigError::Missing(id_var)),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "9090");
        env::set_var("DATA_DIR", ":memory:");
        env::set_var("STRAVA_CLIENT_ID", "test_id");
        env::set_var("STRAVA_CLIENT_SECRET", " test_secret ");
        env::set_var("SAMPLE_DATA_FALLBACK", "off");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 9090);
        assert!(config.data_dir.is_none());
        assert!(!config.sample_data_fallback);
        let strava = config.strava.expect("Strava credentials should be set");
        assert_eq!(strava.client_id, "test_id");
        assert_eq!(strava.client_secret, "test_secret");
        assert_eq!(config.default_weight_kg, DEFAULT_WEIGHT_KG);
    }

    #[test]
    fn test_blank_credential_pair_is_unset() {
        env::set_var("TEST_BLANK_APP_ID", "");
        env::set_var("TEST_BLANK_APP_KEY", "  ");
        assert!(credential_pair("TEST_BLANK_APP_ID", "TEST_BLANK_APP_KEY")
            .unwrap()
            .is_none());

        env::set_var("TEST_HALF_APP_ID", "id");
        env::set_var("TEST_HALF_APP_KEY", "");
        assert!(matches!(
            credential_pair("TEST_HALF_APP_ID", "TEST_HALF_APP_KEY"),
            Err(ConfigError::Missing("TEST_HALF_APP_KEY"))
        ));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
