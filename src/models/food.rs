// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food log entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::lenient;

/// A single logged food item, stored under `fitness-foods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodEntry {
    pub date: NaiveDate,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::non_negative_u32")]
    pub calories: u32,
    #[serde(
        rename = "protein",
        default,
        deserialize_with = "lenient::non_negative_f64"
    )]
    pub protein_grams: f64,
}

impl FoodEntry {
    /// Legacy delete key: every entry with the same date and name matches.
    pub fn matches_key(&self, date: NaiveDate, name: &str) -> bool {
        self.date == date && self.name == name
    }
}
