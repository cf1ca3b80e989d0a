// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Step and calorie totals imported from Strava.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::lenient;

/// One Strava sync result, stored under `fitness-strava`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StepImportEntry {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient::non_negative_u64")]
    pub steps: u64,
    #[serde(
        rename = "caloriesBurned",
        default,
        deserialize_with = "lenient::non_negative_u32"
    )]
    pub calories_burned: u32,
}
