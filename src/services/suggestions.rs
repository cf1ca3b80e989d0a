// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rule-based suggestion engine.
//!
//! Rules run in a fixed order and each appends at most one item (the goal
//! rule appends four). The list is then cut to [`MAX_SUGGESTIONS`], so
//! goal-specific items are what usually get crowded out.

use crate::models::{FitnessGoal, FoodEntry, WorkoutEntry};

pub const MAX_SUGGESTIONS: usize = 4;

/// Below this many logged workouts, nudge towards trying one.
const MIN_WORKOUTS: usize = 3;
/// Below this many logged foods, nudge towards logging a meal.
const MIN_FOODS: usize = 3;

pub const TRY_NEW_WORKOUT: &str = "Try a new workout to stay consistent.";
pub const ADD_MEAL: &str = "Add a healthy meal to track nutrition.";
pub const VARY_CARDIO: &str = "Mix it up with a different cardio activity.";
pub const NUTRIENT_DENSE: &str = "Try a nutrient-dense meal option.";

pub const FAT_BURNING_SUGGESTIONS: [&str; 4] = [
    "HIIT workout: 20 min of sprints and bodyweight exercises.",
    "Cycling: 30 min at moderate pace to burn calories.",
    "Jump rope: 15 min for high-intensity cardio.",
    "Swimming: 30 min to engage full body and boost metabolism.",
];

pub const MUSCLE_BUILDING_SUGGESTIONS: [&str; 4] = [
    "Strength training: 3 sets of squats with weights.",
    "Push-ups and pull-ups: 3 sets to build upper body.",
    "Deadlifts: 3 sets to target multiple muscle groups.",
    "Bench press: 3 sets to strengthen chest and arms.",
];

/// Produce up to four suggestions for the given history and goal.
pub fn suggest(
    workouts: &[WorkoutEntry],
    foods: &[FoodEntry],
    goal: &FitnessGoal,
) -> Vec<&'static str> {
    let mut suggestions = Vec::new();

    if workouts.len() < MIN_WORKOUTS {
        suggestions.push(TRY_NEW_WORKOUT);
    }
    if foods.len() < MIN_FOODS {
        suggestions.push(ADD_MEAL);
    }
    if workouts.iter().any(|w| contains_ignore_case(&w.name, "run")) {
        suggestions.push(VARY_CARDIO);
    }
    if foods.iter().any(|f| contains_ignore_case(&f.name, "pizza")) {
        suggestions.push(NUTRIENT_DENSE);
    }

    match goal {
        FitnessGoal::FatBurning => suggestions.extend(FAT_BURNING_SUGGESTIONS),
        FitnessGoal::MuscleBuilding => suggestions.extend(MUSCLE_BUILDING_SUGGESTIONS),
        FitnessGoal::Other(_) => {}
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
