// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout log entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::lenient;

/// A single logged exercise session.
///
/// Stored under `fitness-workouts`. The duration keeps its legacy
/// document name `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutEntry {
    pub date: NaiveDate,
    /// Exercise type as typed by the user ("Running", "Yoga", ...)
    pub name: String,
    #[serde(
        rename = "time",
        default,
        deserialize_with = "lenient::non_negative_u32"
    )]
    pub duration_minutes: u32,
    #[serde(default, deserialize_with = "lenient::non_negative_u32")]
    pub reps: u32,
}

impl WorkoutEntry {
    /// Legacy delete key: every entry with the same date and name matches.
    pub fn matches_key(&self, date: NaiveDate, name: &str) -> bool {
        self.date == date && self.name == name
    }
}
