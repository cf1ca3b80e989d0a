// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard and suggestion routes.
//!
//! The dashboard is the only place sample rows can appear. When nothing has
//! been logged and the fallback is enabled, fixed sample entries are handed
//! to the aggregation engine instead of the empty collections. Suggestions
//! always read the real collections.

use crate::error::Result;
use crate::middleware::SessionUser;
use crate::models::{FitnessGoal, FoodEntry, ProgressReport, StepImportEntry, WorkoutEntry};
use crate::services::{aggregate, suggest};
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/suggestions", get(get_suggestions))
}

/// One table row. Workout calories are rounded here and nowhere earlier.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardRow {
    pub date: NaiveDate,
    pub workouts: u32,
    pub calories_consumed: u64,
    pub protein_grams: f64,
    pub workout_calories_burned: u64,
    pub steps: u64,
    pub strava_calories_burned: u64,
}

#[derive(Debug, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    pub color: &'static str,
    pub data: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<NaiveDate>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// True when the rows come from the built-in samples
    pub sample_data: bool,
    pub goal: String,
    pub rows: Vec<DashboardRow>,
    pub chart: ChartData,
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SuggestionsResponse {
    pub goal: String,
    pub suggestions: Vec<String>,
}

fn rounded_calories(calories: f64) -> u64 {
    calories.round().max(0.0) as u64
}

fn dashboard_rows(report: &ProgressReport) -> Vec<DashboardRow> {
    report
        .days
        .iter()
        .map(|day| DashboardRow {
            date: day.date,
            workouts: day.workout_count,
            calories_consumed: day.calories_consumed,
            protein_grams: day.protein_grams,
            workout_calories_burned: rounded_calories(day.workout_calories_burned),
            steps: day.steps,
            strava_calories_burned: day.external_calories_burned,
        })
        .collect()
}

fn dataset<T: Into<Value>>(
    label: &'static str,
    color: &'static str,
    values: impl IntoIterator<Item = T>,
) -> ChartDataset {
    ChartDataset {
        label,
        color,
        data: values.into_iter().map(Into::into).collect(),
    }
}

fn chart_data(report: &ProgressReport) -> ChartData {
    let series = report.series();

    ChartData {
        labels: series.dates,
        datasets: vec![
            dataset("Workouts", "#4CAF50", series.workout_counts),
            dataset("Calories Consumed", "#F44336", series.calories_consumed),
            dataset("Protein Retained (g)", "#26A69A", series.protein_grams),
            dataset(
                "Workout Calories Burned",
                "#9C27B0",
                series
                    .workout_calories_burned
                    .into_iter()
                    .map(rounded_calories),
            ),
            dataset("Steps", "#2196F3", series.steps),
            dataset(
                "Strava Calories Burned",
                "#FF9800",
                series.external_calories_burned,
            ),
        ],
    }
}

fn sample_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap_or_default()
}

fn sample_workouts() -> Vec<WorkoutEntry> {
    vec![
        WorkoutEntry {
            date: sample_date(18),
            name: "Running".to_string(),
            duration_minutes: 30,
            reps: 0,
        },
        WorkoutEntry {
            date: sample_date(19),
            name: "Cycling".to_string(),
            duration_minutes: 45,
            reps: 0,
        },
    ]
}

fn sample_foods() -> Vec<FoodEntry> {
    vec![
        FoodEntry {
            date: sample_date(18),
            name: "Apple".to_string(),
            calories: 95,
            protein_grams: 0.5,
        },
        FoodEntry {
            date: sample_date(19),
            name: "Chicken".to_string(),
            calories: 200,
            protein_grams: 27.0,
        },
    ]
}

fn sample_step_imports() -> Vec<StepImportEntry> {
    vec![
        StepImportEntry {
            date: sample_date(18),
            steps: 8000,
            calories_burned: 300,
        },
        StepImportEntry {
            date: sample_date(19),
            steps: 10000,
            calories_burned: 400,
        },
    ]
}

/// GET /api/dashboard
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<SessionUser>,
) -> Result<Json<DashboardResponse>> {
    let workouts = state.store.get_workouts().await?;
    let foods = state.store.get_foods().await?;
    let step_imports = state.store.get_step_imports().await?;
    let goal = FitnessGoal::from_goals(&state.store.get_goals().await?);

    let suggestions = suggest(&workouts, &foods, &goal);

    let use_samples = state.config.sample_data_fallback
        && workouts.is_empty()
        && foods.is_empty()
        && step_imports.is_empty();

    let report = if use_samples {
        tracing::debug!(user = %session.email, "No entries logged, using sample rows");
        aggregate(
            &sample_workouts(),
            &sample_foods(),
            &sample_step_imports(),
            session.weight_kg,
        )
    } else {
        aggregate(&workouts, &foods, &step_imports, session.weight_kg)
    };

    Ok(Json(DashboardResponse {
        sample_data: use_samples,
        goal: goal.as_str().to_string(),
        rows: dashboard_rows(&report),
        chart: chart_data(&report),
        suggestions,
    }))
}

/// GET /api/suggestions
async fn get_suggestions(State(state): State<Arc<AppState>>) -> Result<Json<SuggestionsResponse>> {
    let workouts = state.store.get_workouts().await?;
    let foods = state.store.get_foods().await?;
    let goal = FitnessGoal::from_goals(&state.store.get_goals().await?);

    Ok(Json(SuggestionsResponse {
        goal: goal.as_str().to_string(),
        suggestions: suggest(&workouts, &foods, &goal)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}
