// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON body extractor that reports malformed input as `AppError`.

use crate::error::AppError;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;

/// Like [`axum::Json`], but wrong types, negative numbers and syntax errors
/// become a 400 with the usual JSON error body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
