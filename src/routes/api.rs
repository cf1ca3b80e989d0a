// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile routes for the current user.

use crate::error::{AppError, Result};
use crate::middleware::SessionUser;
use crate::models::User;
use crate::services::ProfileUpdate;
use crate::routes::JsonBody;
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/me", get(get_me).put(update_me))
}

/// Current user response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub gender: String,
    pub height: u32,
    pub weight: u32,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            gender: user.gender,
            height: user.height_cm,
            weight: user.weight_kg,
        }
    }
}

/// Get current user profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionUser>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .store
        .find_user_by_email(&session.email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", session.email)))?;

    Ok(Json(user.into()))
}

/// Profile edit. Every field is optional.
#[derive(Debug, Deserialize)]
struct UpdateProfileRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    weight: Option<u32>,
}

/// Update the current user's profile.
///
/// Out-of-range height or weight values are ignored rather than rejected.
async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionUser>,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>> {
    let update = ProfileUpdate {
        username: req.username,
        height_cm: req.height,
        weight_kg: req.weight,
    };

    let user = state
        .accounts
        .update_profile(&session.email, &update)
        .await?;

    Ok(Json(user.into()))
}
