// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod accounts;
pub mod aggregation;
pub mod nutrition;
pub mod strava;
pub mod suggestions;

pub use accounts::{AccountService, ProfileUpdate};
pub use aggregation::{aggregate, estimate_workout_calories, met_factor};
pub use nutrition::{NutritionClient, NutritionFacts};
pub use strava::{StravaClient, StravaService};
pub use suggestions::suggest;
