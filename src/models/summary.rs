//! Date-bucketed progress summaries produced by the aggregation engine.

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Everything logged on one calendar date.
///
/// Every field is zero when the date has no entries of that kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub workout_count: u32,
    /// Sum of food calories
    pub calories_consumed: u64,
    /// Sum of food protein (grams)
    pub protein_grams: f64,
    /// Estimated workout burn, unrounded
    pub workout_calories_burned: f64,
    /// Steps from the Strava import for this date
    pub steps: u64,
    /// Calories burned as reported by Strava
    pub external_calories_burned: u64,
}

impl DailySummary {
    /// Empty bucket for a date.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            workout_count: 0,
            calories_consumed: 0,
            protein_grams: 0.0,
            workout_calories_burned: 0.0,
            steps: 0,
            external_calories_burned: 0,
        }
    }
}

/// Per-date summaries, ascending by date with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressReport {
    pub days: Vec<DailySummary>,
}

impl ProgressReport {
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Split into the six parallel chart series.
    pub fn series(&self) -> ProgressSeries {
        ProgressSeries {
            dates: self.dates(),
            workout_counts: self.days.iter().map(|d| d.workout_count).collect(),
            calories_consumed: self.days.iter().map(|d| d.calories_consumed).collect(),
            protein_grams: self.days.iter().map(|d| d.protein_grams).collect(),
            workout_calories_burned: self
                .days
                .iter()
                .map(|d| d.workout_calories_burned)
                .collect(),
            steps: self.days.iter().map(|d| d.steps).collect(),
            external_calories_burned: self
                .days
                .iter()
                .map(|d| d.external_calories_burned)
                .collect(),
        }
    }
}

/// Six series aligned index-for-index with `dates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgressSeries {
    pub dates: Vec<NaiveDate>,
    pub workout_counts: Vec<u32>,
    pub calories_consumed: Vec<u64>,
    pub protein_grams: Vec<f64>,
    pub workout_calories_burned: Vec<f64>,
    pub steps: Vec<u64>,
    pub external_calories_burned: Vec<u64>,
}
