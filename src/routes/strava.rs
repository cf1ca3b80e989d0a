// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava connect and callback routes.
//!
//! The callback imports today's activities and always ends in a redirect
//! back to the dashboard, flagged `imported` or `error`.

use crate::error::{AppError, Result};
use crate::services::StravaService;
use crate::time_utils::today_utc;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::Redirect,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/strava/connect", get(connect))
        .route("/api/strava/callback", get(callback))
}

fn strava_service(state: &AppState) -> Result<&StravaService> {
    state
        .strava_service
        .as_ref()
        .ok_or(AppError::NotConfigured("strava"))
}

/// Callback URL registered with Strava, derived from the Host header when
/// not configured explicitly.
fn callback_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(uri) = &state.config.strava_redirect_uri {
        return uri.clone();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost:8080");

    let scheme = if host.contains("localhost") || host.contains("127.0.0.1") {
        "http"
    } else {
        "https"
    };

    format!("{}://{}/api/strava/callback", scheme, host)
}

/// Start OAuth flow - redirect to Strava authorization.
async fn connect(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Result<Redirect> {
    let service = strava_service(&state)?;
    let redirect_uri = callback_url(&state, &headers);

    tracing::info!(redirect_uri = %redirect_uri, "Redirecting to Strava authorization");

    Ok(Redirect::temporary(
        &service.client().authorize_url(&redirect_uri),
    ))
}

#[derive(Debug, Deserialize)]
struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// OAuth callback - exchange code, import today's totals, back to dashboard.
async fn callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect> {
    let service = strava_service(&state)?;
    let dashboard = format!("{}/dashboard", state.config.frontend_url);

    if let Some(error) = params.error {
        tracing::warn!(error = %error, "OAuth error from Strava");
        return Ok(Redirect::temporary(&format!("{}?strava=error", dashboard)));
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        tracing::warn!("Strava callback without authorization code");
        return Ok(Redirect::temporary(&format!("{}?strava=error", dashboard)));
    };

    match service.import_day(&code, today_utc()).await {
        Ok(entry) => {
            tracing::info!(
                date = %entry.date,
                steps = entry.steps,
                calories_burned = entry.calories_burned,
                "Strava import stored"
            );
            Ok(Redirect::temporary(&format!("{}?strava=imported", dashboard)))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Strava import failed");
            Ok(Redirect::temporary(&format!("{}?strava=error", dashboard)))
        }
    }
}
