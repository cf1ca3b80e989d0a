// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal routes.

use crate::error::{AppError, Result};
use crate::models::{Goal, GoalValue, FITNESS_GOAL_TYPE};
use crate::routes::entries::DeleteResponse;
use crate::routes::JsonBody;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

const MAX_GOAL_TYPE_LEN: usize = 50;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/goals", get(list_goals).post(add_goal).delete(delete_goals))
}

/// POST /api/goals
#[derive(Debug, Deserialize)]
struct AddGoalRequest {
    #[serde(rename = "type")]
    kind: String,
    value: GoalValue,
}

/// DELETE /api/goals?type=..&value=..
#[derive(Debug, Deserialize)]
struct DeleteGoalQuery {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

/// Check a submitted goal and coerce its value to the stored form.
///
/// The fitness goal takes non-empty text. Every other type takes a positive
/// whole number, given either as a number or as numeric text.
fn normalize_goal(kind: &str, value: GoalValue) -> Result<Goal> {
    let kind = kind.trim();
    if kind.is_empty() || kind.len() > MAX_GOAL_TYPE_LEN {
        return Err(AppError::BadRequest(format!(
            "Goal type must be 1-{} characters",
            MAX_GOAL_TYPE_LEN
        )));
    }

    let value = if kind == FITNESS_GOAL_TYPE {
        match value {
            GoalValue::Text(text) if !text.trim().is_empty() => {
                GoalValue::Text(text.trim().to_string())
            }
            _ => {
                return Err(AppError::BadRequest(
                    "Fitness goal must be a non-empty text value".to_string(),
                ))
            }
        }
    } else {
        let number = match &value {
            GoalValue::Number(n) => Some(*n),
            GoalValue::Text(text) => text.trim().parse::<u64>().ok(),
        };
        match number {
            Some(n) if n > 0 => GoalValue::Number(n),
            _ => {
                return Err(AppError::BadRequest(
                    "Goal value must be a positive whole number".to_string(),
                ))
            }
        }
    };

    Ok(Goal {
        kind: kind.to_string(),
        value,
    })
}

async fn list_goals(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Goal>>> {
    Ok(Json(state.store.get_goals().await?))
}

async fn add_goal(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AddGoalRequest>,
) -> Result<(StatusCode, Json<Goal>)> {
    let goal = normalize_goal(&req.kind, req.value)?;
    state.store.add_goal(&goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn delete_goals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeleteGoalQuery>,
) -> Result<Json<DeleteResponse>> {
    let removed = state.store.delete_goals(&params.kind, &params.value).await?;
    Ok(Json(DeleteResponse { removed }))
}
