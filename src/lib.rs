// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness Tracker: log workouts and meals, set goals, review progress.
//!
//! This crate provides a local JSON API over a file-backed record store,
//! a pure aggregation engine that buckets entries by date, and a rule-based
//! suggestion engine. Strava and Nutritionix are optional integrations.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FileStore;
use services::{AccountService, NutritionClient, StravaClient, StravaService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: FileStore,
    pub accounts: AccountService,
    /// Present only when Strava credentials are configured
    pub strava_service: Option<StravaService>,
    /// Present only when Nutritionix credentials are configured
    pub nutrition_client: Option<NutritionClient>,
}

impl AppState {
    /// Wire services from configuration around an opened store.
    pub fn new(config: Config, store: FileStore) -> Self {
        let strava_service = config.strava.as_ref().map(|credentials| {
            StravaService::new(
                StravaClient::new(
                    credentials,
                    &config.strava_oauth_url,
                    &config.strava_api_url,
                ),
                store.clone(),
            )
        });

        let nutrition_client = config
            .nutritionix
            .as_ref()
            .map(|credentials| NutritionClient::new(credentials, &config.nutritionix_api_url));

        Self {
            accounts: AccountService::new(store.clone()),
            config,
            store,
            strava_service,
            nutrition_client,
        }
    }
}
