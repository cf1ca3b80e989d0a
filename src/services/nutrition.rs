// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nutritionix natural-language nutrient lookup.

use crate::config::NutritionixCredentials;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Calories and protein for a free-text food description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionFacts {
    pub calories: u32,
    pub protein_grams: f64,
}

/// Nutritionix API client.
#[derive(Clone)]
pub struct NutritionClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

#[derive(Serialize)]
struct NutrientsRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct NutrientsResponse {
    #[serde(default)]
    foods: Vec<NutrientFood>,
}

#[derive(Debug, Deserialize)]
struct NutrientFood {
    #[serde(default)]
    nf_calories: Option<f64>,
    #[serde(default)]
    nf_protein: Option<f64>,
}

impl NutritionClient {
    pub fn new(credentials: &NutritionixCredentials, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: credentials.app_id.clone(),
            app_key: credentials.app_key.clone(),
        }
    }

    /// Look up the first matching food. Values are rounded to whole numbers.
    pub async fn lookup(&self, query: &str) -> Result<NutritionFacts, AppError> {
        tracing::debug!(query, "Fetching Nutritionix data");

        let response = self
            .http
            .post(format!("{}/natural/nutrients", self.base_url))
            .header("x-app-id", &self.app_id)
            .header("x-app-key", &self.app_key)
            .json(&NutrientsRequest { query })
            .send()
            .await
            .map_err(|e| AppError::NutritionApi(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Nutritionix lookup failed");
            return Err(AppError::NutritionApi(format!("HTTP {}", status)));
        }

        let parsed: NutrientsResponse = response
            .json()
            .await
            .map_err(|e| AppError::NutritionApi(format!("JSON parse error: {}", e)))?;

        let food = parsed
            .foods
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NutritionApi("No food data returned".to_string()))?;

        Ok(facts_from(&food))
    }
}

fn facts_from(food: &NutrientFood) -> NutritionFacts {
    NutritionFacts {
        calories: food.nf_calories.unwrap_or(0.0).max(0.0).round() as u32,
        protein_grams: food.nf_protein.unwrap_or(0.0).max(0.0).round(),
    }
}
