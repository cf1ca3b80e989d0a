// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod export;
pub mod food;
pub mod goal;
mod lenient;
pub mod step_import;
pub mod summary;
pub mod user;
pub mod workout;

pub use export::ExportSnapshot;
pub use food::FoodEntry;
pub use goal::{FitnessGoal, Goal, GoalValue, FITNESS_GOAL_TYPE};
pub use step_import::StepImportEntry;
pub use summary::{DailySummary, ProgressReport, ProgressSeries};
pub use user::User;
pub use workout::WorkoutEntry;
