// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregation engine: turns raw entries into date-bucketed summaries.
//!
//! Pure and deterministic. Output depends only on the entries and the
//! weight passed in, never on their order, the clock, or any session state.

use crate::models::{DailySummary, FoodEntry, ProgressReport, StepImportEntry, WorkoutEntry};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Intensity factor used when the exercise name is not in [`MET_TABLE`].
pub const DEFAULT_MET: f64 = 3.0;

/// Metabolic-equivalent factors keyed by lowercased exercise name.
pub const MET_TABLE: &[(&str, f64)] = &[
    ("running", 7.0),
    ("cycling", 6.0),
    ("swimming", 6.0),
    ("weight training", 3.5),
    ("yoga", 2.5),
];

/// Look up the intensity factor for an exercise name (case-insensitive).
pub fn met_factor(exercise: &str) -> f64 {
    let key = exercise.to_lowercase();
    MET_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, met)| *met)
        .unwrap_or(DEFAULT_MET)
}

/// Estimated calories for one workout: MET × weight (kg) × hours. Unrounded.
pub fn estimate_workout_calories(workout: &WorkoutEntry, weight_kg: f64) -> f64 {
    let hours = f64::from(workout.duration_minutes) / 60.0;
    met_factor(&workout.name) * weight_kg * hours
}

/// Bucket every entry by date.
///
/// The result covers the union of dates across all three collections,
/// ascending, with zeros wherever a date has no entries of a kind.
/// Calorie estimates accumulate unrounded. When several step imports share a
/// date, the first one in collection order supplies that date's values.
pub fn aggregate(
    workouts: &[WorkoutEntry],
    foods: &[FoodEntry],
    step_imports: &[StepImportEntry],
    weight_kg: f64,
) -> ProgressReport {
    let mut days: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    for workout in workouts {
        let day = days
            .entry(workout.date)
            .or_insert_with(|| DailySummary::empty(workout.date));
        day.workout_count += 1;
        day.workout_calories_burned += estimate_workout_calories(workout, weight_kg);
    }

    for food in foods {
        let day = days
            .entry(food.date)
            .or_insert_with(|| DailySummary::empty(food.date));
        day.calories_consumed += u64::from(food.calories);
        day.protein_grams += food.protein_grams;
    }

    let mut imported: BTreeMap<NaiveDate, &StepImportEntry> = BTreeMap::new();
    for entry in step_imports {
        imported.entry(entry.date).or_insert(entry);
    }
    for (date, entry) in imported {
        let day = days
            .entry(date)
            .or_insert_with(|| DailySummary::empty(date));
        day.steps = entry.steps;
        day.external_calories_burned = u64::from(entry.calories_burned);
    }

    ProgressReport {
        days: days.into_values().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
    }

    fn workout(day: u32, name: &str, minutes: u32) -> WorkoutEntry {
        WorkoutEntry {
            date: date(day),
            name: name.to_string(),
            duration_minutes: minutes,
            reps: 0,
        }
    }

    fn food(day: u32, name: &str, calories: u32, protein: f64) -> FoodEntry {
        FoodEntry {
            date: date(day),
            name: name.to_string(),
            calories,
            protein_grams: protein,
        }
    }

    fn steps(day: u32, steps: u64, calories: u32) -> StepImportEntry {
        StepImportEntry {
            date: date(day),
            steps,
            calories_burned: calories,
        }
    }

    #[test]
    fn test_running_half_hour_at_70kg() {
        let report = aggregate(&[workout(18, "Running", 30)], &[], &[], 70.0);

        assert_eq!(report.days.len(), 1);
        assert_eq!(report.days[0].workout_calories_burned, 245.0);
        assert_eq!(report.days[0].workout_count, 1);
    }

    #[test]
    fn test_met_lookup_is_case_insensitive_with_default() {
        assert_eq!(met_factor("Weight Training"), 3.5);
        assert_eq!(met_factor("YOGA"), 2.5);
        assert_eq!(met_factor("Rowing"), DEFAULT_MET);
        assert_eq!(met_factor(""), DEFAULT_MET);
    }

    #[test]
    fn test_estimate_is_linear_in_weight_and_duration() {
        let base = estimate_workout_calories(&workout(18, "Cycling", 40), 60.0);

        let double_weight = estimate_workout_calories(&workout(18, "Cycling", 40), 120.0);
        let double_time = estimate_workout_calories(&workout(18, "Cycling", 80), 60.0);

        assert!((double_weight - 2.0 * base).abs() < 1e-9);
        assert!((double_time - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_dates_are_sorted_union_without_duplicates() {
        let report = aggregate(
            &[workout(20, "Yoga", 60), workout(18, "Running", 30)],
            &[food(19, "Apple", 95, 0.5), food(18, "Rice", 200, 4.0)],
            &[steps(21, 8000, 300), steps(19, 10000, 400)],
            70.0,
        );

        assert_eq!(report.dates(), vec![date(18), date(19), date(20), date(21)]);
    }

    #[test]
    fn test_missing_kinds_are_zero() {
        let report = aggregate(&[], &[food(18, "Apple", 95, 0.5)], &[steps(19, 8000, 300)], 70.0);

        let first = &report.days[0];
        assert_eq!(first.workout_count, 0);
        assert_eq!(first.workout_calories_burned, 0.0);
        assert_eq!(first.steps, 0);
        assert_eq!(first.external_calories_burned, 0);

        let second = &report.days[1];
        assert_eq!(second.calories_consumed, 0);
        assert_eq!(second.protein_grams, 0.0);
        assert_eq!(second.steps, 8000);
        assert_eq!(second.external_calories_burned, 300);
    }

    #[test]
    fn test_sums_per_day() {
        let report = aggregate(
            &[workout(18, "Running", 30), workout(18, "Yoga", 60)],
            &[food(18, "Apple", 95, 0.5), food(18, "Chicken", 200, 27.0)],
            &[],
            70.0,
        );

        let day = &report.days[0];
        assert_eq!(day.workout_count, 2);
        assert_eq!(day.calories_consumed, 295);
        assert_eq!(day.protein_grams, 27.5);
        // 245 + 2.5 * 70 * 1.0
        assert_eq!(day.workout_calories_burned, 420.0);
    }

    #[test]
    fn test_first_step_import_per_date_wins() {
        let report = aggregate(&[], &[], &[steps(18, 8000, 300), steps(18, 500, 20)], 70.0);

        assert_eq!(report.days.len(), 1);
        assert_eq!(report.days[0].steps, 8000);
        assert_eq!(report.days[0].external_calories_burned, 300);
    }

    #[test]
    fn test_accumulates_unrounded() {
        // Three 10-minute yoga sessions at 70kg: 29.1666... each.
        let sessions = vec![
            workout(18, "Yoga", 10),
            workout(18, "Yoga", 10),
            workout(18, "Yoga", 10),
        ];
        let report = aggregate(&sessions, &[], &[], 70.0);

        assert!((report.days[0].workout_calories_burned - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let workouts = vec![workout(18, "Running", 30), workout(19, "Cycling", 45)];
        let foods = vec![food(19, "Chicken", 200, 27.0), food(18, "Apple", 95, 0.5)];

        let forward = aggregate(&workouts, &foods, &[], 80.0);
        let reversed_workouts: Vec<_> = workouts.iter().rev().cloned().collect();
        let reversed_foods: Vec<_> = foods.iter().rev().cloned().collect();
        let backward = aggregate(&reversed_workouts, &reversed_foods, &[], 80.0);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        let report = aggregate(&[], &[], &[], 70.0);
        assert!(report.is_empty());
        assert!(report.series().dates.is_empty());
    }

    #[test]
    fn test_series_align_with_dates() {
        let report = aggregate(
            &[workout(18, "Running", 30)],
            &[food(19, "Chicken", 200, 27.0)],
            &[steps(18, 8000, 300)],
            70.0,
        );
        let series = report.series();

        assert_eq!(series.dates, vec![date(18), date(19)]);
        assert_eq!(series.workout_counts, vec![1, 0]);
        assert_eq!(series.calories_consumed, vec![0, 200]);
        assert_eq!(series.protein_grams, vec![0.0, 27.0]);
        assert_eq!(series.workout_calories_burned, vec![245.0, 0.0]);
        assert_eq!(series.steps, vec![8000, 0]);
        assert_eq!(series.external_calories_burned, vec![300, 0]);
    }
}
