// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup, login and logout routes.
//!
//! These only move the current-user pointer; there are no credentials.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::routes::api::ProfileResponse;
use crate::routes::JsonBody;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// POST /auth/signup
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    username: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email too long")
    )]
    email: String,
    #[validate(length(min = 1, max = 20, message = "Gender is required"))]
    gender: String,
    #[validate(range(min = 100, max = 250, message = "Height must be 100-250 cm"))]
    height: u32,
    #[validate(range(min = 30, max = 200, message = "Weight must be 30-200 kg"))]
    weight: u32,
}

/// POST /auth/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    username: String,
    email: String,
}

/// Register and start a session.
async fn signup(
    State(state): State<Arc<AppState>>,
    JsonBody(mut req): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>)> {
    req.username = req.username.trim().to_string();
    req.email = req.email.trim().to_string();
    req.gender = req.gender.trim().to_string();
    req.validate()?;

    let user = User {
        username: req.username,
        email: req.email,
        gender: req.gender,
        height_cm: req.height,
        weight_kg: req.weight,
    };

    let user = state.accounts.signup(user).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Start a session for an existing user.
async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<ProfileResponse>> {
    let username = req.username.trim();
    let email = req.email.trim();
    if username.is_empty() || email.is_empty() {
        return Err(AppError::BadRequest("Please fill all fields".to_string()));
    }

    let user = state.accounts.login(username, email).await?;
    Ok(Json(user.into()))
}

/// Clear the session pointer.
async fn logout(State(state): State<Arc<AppState>>) -> Result<StatusCode> {
    state.accounts.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}
