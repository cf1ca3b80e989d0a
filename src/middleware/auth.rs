// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session middleware.
//!
//! Resolves the stored current-user pointer once per request and hands the
//! handlers an explicit [`SessionUser`]. Nothing below the HTTP layer reads
//! the pointer itself.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// The active user as seen by handlers.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub email: String,
    pub username: String,
    /// Weight for calorie estimates (profile value or configured default)
    pub weight_kg: f64,
}

/// Middleware that requires an active session.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = state
        .accounts
        .current_user()
        .await?
        .ok_or(AppError::Unauthorized)?;

    let session = SessionUser {
        weight_kg: user.effective_weight_kg(state.config.default_weight_kg),
        email: user.email,
        username: user.username,
    };
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}
