// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot export and import.

use crate::error::{AppError, Result};
use crate::models::export::EXPORT_FILE_NAME;
use crate::models::ExportSnapshot;
use crate::routes::JsonBody;
use crate::AppState;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/export", get(export_data))
        .route("/api/import", post(import_data))
}

/// Counts of what an import replaced the store with.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub workouts: usize,
    pub foods: usize,
    pub strava: usize,
    pub goals: usize,
}

/// GET /api/export
///
/// Pretty-printed snapshot of the four entry collections, served as a
/// download.
async fn export_data(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let snapshot = state.store.export_snapshot().await?;
    let body = snapshot
        .to_json_pretty()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize export: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}

/// POST /api/import
///
/// Replaces all four collections with the submitted snapshot. Missing keys
/// count as empty collections.
async fn import_data(
    State(state): State<Arc<AppState>>,
    JsonBody(snapshot): JsonBody<ExportSnapshot>,
) -> Result<Json<ImportResponse>> {
    state.store.restore_snapshot(&snapshot).await?;

    tracing::info!(
        workouts = snapshot.workouts.len(),
        foods = snapshot.foods.len(),
        strava = snapshot.step_imports.len(),
        goals = snapshot.goals.len(),
        "Snapshot imported"
    );

    Ok(Json(ImportResponse {
        workouts: snapshot.workouts.len(),
        foods: snapshot.foods.len(),
        strava: snapshot.step_imports.len(),
        goals: snapshot.goals.len(),
    }))
}
