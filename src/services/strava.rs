// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for importing daily step and calorie totals.
//!
//! Handles:
//! - OAuth authorize URL construction
//! - Authorization code → bearer token exchange
//! - Activity listing since the start of a day
//! - Reducing activities into one step-import entry per sync
//!
//! No retries: a failed call surfaces as `AppError::StravaApi` and leaves
//! the Record Store untouched.

use crate::config::StravaCredentials;
use crate::db::FileStore;
use crate::error::AppError;
use crate::models::StepImportEntry;
use crate::time_utils::start_of_day_timestamp;
use chrono::NaiveDate;
use serde::Deserialize;

/// Scope requested at authorization.
pub const STRAVA_SCOPE: &str = "activity:read";

/// Activities fetched per sync.
pub const ACTIVITIES_PER_SYNC: u32 = 10;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    oauth_url: String,
    api_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    ///
    /// `oauth_url` is the site root (`https://www.strava.com`), `api_url` the
    /// REST base (`https://www.strava.com/api/v3`).
    pub fn new(credentials: &StravaCredentials, oauth_url: &str, api_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            oauth_url: oauth_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
        }
    }

    /// URL to send the user to for authorization.
    pub fn authorize_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}/oauth/authorize?client_id={}&response_type=code&redirect_uri={}&scope={}",
            self.oauth_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(redirect_uri),
            STRAVA_SCOPE
        )
    }

    /// Exchange an authorization code for a bearer token.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenExchangeResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/oauth/token", self.oauth_url))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token exchange failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Strava token exchange failed");
            return Err(AppError::StravaApi(format!(
                "Token exchange failed with status {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("Failed to parse token response: {}", e)))
    }

    /// List the athlete's activities that started after `after` (Unix seconds).
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
        per_page: u32,
    ) -> Result<Vec<StravaActivitySummary>, AppError> {
        let url = format!("{}/athlete/activities", self.api_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("after", after.to_string()), ("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::StravaApi("Rate limit exceeded".to_string()));
            }

            if status.as_u16() == 401 {
                return Err(AppError::StravaApi("Invalid or expired token".to_string()));
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }
}

/// Token exchange response from Strava OAuth.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchangeResponse {
    pub access_token: String,
}

/// Summary activity for list endpoints. Step and calorie fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivitySummary {
    #[serde(default)]
    pub steps: Option<f64>,
    #[serde(default)]
    pub calories: Option<f64>,
}

/// Reduce a list of activities into a single import for `date`.
///
/// Missing fields count as zero.
pub fn summarize_activities(activities: &[StravaActivitySummary], date: NaiveDate) -> StepImportEntry {
    let steps: f64 = activities
        .iter()
        .map(|a| a.steps.unwrap_or(0.0).max(0.0))
        .sum();
    let calories: f64 = activities
        .iter()
        .map(|a| a.calories.unwrap_or(0.0).max(0.0))
        .sum();

    StepImportEntry {
        date,
        steps: steps.round() as u64,
        calories_burned: calories.round() as u32,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StravaService - OAuth callback handling and import persistence
// ─────────────────────────────────────────────────────────────────────────────

/// High-level Strava service: code exchange, activity fetch, and storage of
/// the resulting step import.
#[derive(Clone)]
pub struct StravaService {
    client: StravaClient,
    store: FileStore,
}

impl StravaService {
    pub fn new(client: StravaClient, store: FileStore) -> Self {
        Self { client, store }
    }

    pub fn client(&self) -> &StravaClient {
        &self.client
    }

    /// Handle OAuth callback: exchange `code`, fetch activities since the
    /// start of `date` (UTC), store one step-import entry for that date.
    ///
    /// Nothing is written unless every remote call succeeds.
    pub async fn import_day(&self, code: &str, date: NaiveDate) -> Result<StepImportEntry, AppError> {
        let token = self.client.exchange_code(code).await?;

        let after = start_of_day_timestamp(date);
        let activities = self
            .client
            .list_activities(&token.access_token, after, ACTIVITIES_PER_SYNC)
            .await?;

        let entry = summarize_activities(&activities, date);
        tracing::info!(
            %date,
            activities = activities.len(),
            steps = entry.steps,
            calories_burned = entry.calories_burned,
            "Strava activities summarized"
        );

        self.store.add_step_import(&entry).await?;
        Ok(entry)
    }
}
