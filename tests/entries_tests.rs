// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout, food and goal CRUD through the HTTP surface.

use axum::http::StatusCode;
use fitness_tracker::time_utils::today_utc;
use serde_json::json;

mod common;
use common::{body_json, delete, get, json_request, send, sign_up};

#[tokio::test]
async fn test_add_and_list_workouts() {
    let (app, _) = common::create_test_app();
    sign_up(&app, "alice", "alice@example.com").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/workouts",
            json!({"name": " Running ", "time": 30, "date": "2025-10-18"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Running");
    assert_eq!(created["time"], 30);
    assert_eq!(created["reps"], 0);

    let list = body_json(send(&app, get("/api/workouts")).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["date"], "2025-10-18");
}

#[tokio::test]
async fn test_workout_date_defaults_to_today() {
    let (app, state) = common::create_test_app();
    sign_up(&app, "alice", "alice@example.com").await;

    let response = send(
        &app,
        json_request("POST", "/api/workouts", json!({"name": "Yoga", "time": 20})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let workouts = state.store.get_workouts().await.unwrap();
    assert_eq!(workouts[0].date, today_utc());
}

#[tokio::test]
async fn test_delete_removes_every_matching_workout() {
    let (app, state) = common::create_test_app();
    sign_up(&app, "alice", "alice@example.com").await;

    for (name, date) in [
        ("Running", "2025-10-18"),
        ("Running", "2025-10-18"),
        ("Running", "2025-10-19"),
        ("Yoga", "2025-10-18"),
    ] {
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/workouts",
                json!({"name": name, "time": 30, "date": date}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, delete("/api/workouts?date=2025-10-18&name=Running")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["removed"], 2);

    let remaining = state.store.get_workouts().await.unwrap();
    assert_eq!(remaining.len(), 2);

    // No match is not an error
    let response = send(&app, delete("/api/workouts?date=2025-10-18&name=Running")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["removed"], 0);
}

#[tokio::test]
async fn test_food_with_manual_values() {
    let (app, state) = common::create_test_app();
    sign_up(&app, "alice", "alice@example.com").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/foods",
            json!({"name": "Chicken", "calories": 200, "protein": 27, "date": "2025-10-19"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["calories"], 200);
    assert_eq!(created["protein"], 27.0);

    let response = send(&app, delete("/api/foods?date=2025-10-19&name=Chicken")).await;
    assert_eq!(body_json(response).await["removed"], 1);
    assert!(state.store.get_foods().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_food_lookup_without_credentials() {
    let (app, state) = common::create_test_app();
    sign_up(&app, "alice", "alice@example.com").await;

    let response = send(&app, json_request("POST", "/api/foods", json!({"name": "Apple"}))).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["error"], "not_configured");
    assert!(state.store.get_foods().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_goals_add_list_delete() {
    let (app, _) = common::create_test_app();
    sign_up(&app, "alice", "alice@example.com").await;

    for body in [
        json!({"type": "fitness-goal", "value": "muscle-building"}),
        json!({"type": "weekly-workouts", "value": "4"}),
        json!({"type": "weekly-workouts", "value": 4}),
    ] {
        let response = send(&app, json_request("POST", "/api/goals", body)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let goals = body_json(send(&app, get("/api/goals")).await).await;
    assert_eq!(goals.as_array().unwrap().len(), 3);
    assert_eq!(goals[1]["value"], 4);

    let response = send(&app, delete("/api/goals?type=weekly-workouts&value=4")).await;
    assert_eq!(body_json(response).await["removed"], 2);

    let goals = body_json(send(&app, get("/api/goals")).await).await;
    assert_eq!(goals.as_array().unwrap().len(), 1);
    assert_eq!(goals[0]["type"], "fitness-goal");
}
