// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use fitness_tracker::db::StoreError;
use fitness_tracker::error::AppError;

fn status_of(err: AppError) -> StatusCode {
    err.into_response().status()
}

#[test]
fn test_status_mapping() {
    assert_eq!(status_of(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
    assert_eq!(
        status_of(AppError::NotFound("x".to_string())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_of(AppError::BadRequest("x".to_string())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_of(AppError::Conflict("x".to_string())),
        StatusCode::CONFLICT
    );
    assert_eq!(
        status_of(AppError::NotConfigured("strava")),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        status_of(AppError::StravaApi("Rate limit exceeded".to_string())),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        status_of(AppError::NutritionApi("HTTP 500".to_string())),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        status_of(AppError::Internal(anyhow::anyhow!("boom"))),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_storage_error_hides_details() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = AppError::from(StoreError::Corrupt {
        key: "fitness-workouts".to_string(),
        source,
    });

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "storage_error");
    assert!(body.get("details").is_none());
}
