// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout and food log routes.
//!
//! Entries are never edited in place. Deletion removes every entry that
//! shares the given date and name.

use crate::error::{AppError, Result};
use crate::models::{FoodEntry, WorkoutEntry};
use crate::routes::JsonBody;
use crate::time_utils::today_utc;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/workouts",
            get(list_workouts).post(add_workout).delete(delete_workouts),
        )
        .route(
            "/api/foods",
            get(list_foods).post(add_food).delete(delete_foods),
        )
}

/// Delete key shared by workouts and foods.
#[derive(Debug, Deserialize)]
struct DeleteQuery {
    date: NaiveDate,
    name: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteResponse {
    pub removed: usize,
}

/// Trim a required name, rejecting blanks.
fn required_name(raw: &str, what: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(format!("{} name is required", what)));
    }
    Ok(name.to_string())
}

// ─── Workouts ────────────────────────────────────────────────

/// POST /api/workouts
#[derive(Debug, Deserialize, Validate)]
struct AddWorkoutRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    name: String,
    /// Duration in minutes
    #[validate(range(min = 1, max = 1440, message = "Duration must be 1-1440 minutes"))]
    time: u32,
    #[serde(default)]
    #[validate(range(max = 10000, message = "Reps must be at most 10000"))]
    reps: u32,
    /// Defaults to today (UTC)
    #[serde(default)]
    date: Option<NaiveDate>,
}

async fn list_workouts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<WorkoutEntry>>> {
    Ok(Json(state.store.get_workouts().await?))
}

async fn add_workout(
    State(state): State<Arc<AppState>>,
    JsonBody(mut req): JsonBody<AddWorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutEntry>)> {
    req.name = required_name(&req.name, "Exercise")?;
    req.validate()?;

    let workout = WorkoutEntry {
        date: req.date.unwrap_or_else(today_utc),
        name: req.name,
        duration_minutes: req.time,
        reps: req.reps,
    };

    state.store.add_workout(&workout).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn delete_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>> {
    let removed = state
        .store
        .delete_workouts(params.date, &params.name)
        .await?;
    Ok(Json(DeleteResponse { removed }))
}

// ─── Foods ───────────────────────────────────────────────────

/// POST /api/foods
///
/// Without `calories` the nutrition values come from the lookup API.
#[derive(Debug, Deserialize, Validate)]
struct AddFoodRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    name: String,
    #[serde(default)]
    #[validate(range(max = 20000, message = "Calories must be at most 20000"))]
    calories: Option<u32>,
    /// Protein in grams
    #[serde(default)]
    #[validate(range(min = 0.0, max = 2000.0, message = "Protein must be 0-2000 g"))]
    protein: Option<f64>,
    #[serde(default)]
    date: Option<NaiveDate>,
}

async fn list_foods(State(state): State<Arc<AppState>>) -> Result<Json<Vec<FoodEntry>>> {
    Ok(Json(state.store.get_foods().await?))
}

async fn add_food(
    State(state): State<Arc<AppState>>,
    JsonBody(mut req): JsonBody<AddFoodRequest>,
) -> Result<(StatusCode, Json<FoodEntry>)> {
    req.name = required_name(&req.name, "Food")?;
    req.validate()?;

    let (calories, protein_grams) = match req.calories {
        Some(calories) => (calories, req.protein.unwrap_or(0.0)),
        None => {
            let client = state
                .nutrition_client
                .as_ref()
                .ok_or(AppError::NotConfigured("nutrition lookup"))?;
            let facts = client.lookup(&req.name).await?;
            (facts.calories, facts.protein_grams)
        }
    };

    let food = FoodEntry {
        date: req.date.unwrap_or_else(today_utc),
        name: req.name,
        calories,
        protein_grams,
    };

    state.store.add_food(&food).await?;
    Ok((StatusCode::CREATED, Json(food)))
}

async fn delete_foods(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>> {
    let removed = state.store.delete_foods(params.date, &params.name).await?;
    Ok(Json(DeleteResponse { removed }))
}
