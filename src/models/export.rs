// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Downloadable snapshot of the Record Store.

use serde::{Deserialize, Serialize};

use super::{FoodEntry, Goal, StepImportEntry, WorkoutEntry};

/// Suggested download name for the exported document.
pub const EXPORT_FILE_NAME: &str = "fitness-data.json";

/// The four entry collections, in the legacy `fitness-data.json` layout.
///
/// Users and the current-user pointer are not part of the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
    #[serde(rename = "strava", default)]
    pub step_imports: Vec<StepImportEntry>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl ExportSnapshot {
    /// Pretty-printed JSON, two-space indent.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalValue;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
    }

    #[test]
    fn test_export_then_import_is_field_for_field_equal() {
        let snapshot = ExportSnapshot {
            workouts: vec![WorkoutEntry {
                date: date(18),
                name: "Weight Training".to_string(),
                duration_minutes: 40,
                reps: 12,
            }],
            foods: vec![FoodEntry {
                date: date(18),
                name: "Chicken".to_string(),
                calories: 200,
                protein_grams: 27.5,
            }],
            step_imports: vec![StepImportEntry {
                date: date(19),
                steps: 10_000,
                calories_burned: 400,
            }],
            goals: vec![
                Goal {
                    kind: "fitness-goal".to_string(),
                    value: GoalValue::Text("muscle-building".to_string()),
                },
                Goal {
                    kind: "weekly-workouts".to_string(),
                    value: GoalValue::Number(4),
                },
            ],
        };

        let json = snapshot.to_json_pretty().unwrap();
        let restored = ExportSnapshot::from_json(&json).unwrap();

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_export_uses_legacy_keys() {
        let json = ExportSnapshot::default().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for key in ["workouts", "foods", "strava", "goals"] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert!(json.contains("\n  \"workouts\""));
    }
}
