// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User goals and the typed fitness-goal view.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Goal type whose value selects the suggestion set.
pub const FITNESS_GOAL_TYPE: &str = "fitness-goal";

/// A declared goal, stored under `fitness-goals`.
///
/// Several goals of the same type may coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Goal {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: GoalValue,
}

/// Text for the fitness goal, a positive integer for numeric goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum GoalValue {
    Number(u64),
    Text(String),
}

impl fmt::Display for GoalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalValue::Number(n) => write!(f, "{}", n),
            GoalValue::Text(s) => f.write_str(s),
        }
    }
}

impl Goal {
    pub fn is_fitness_goal(&self) -> bool {
        self.kind == FITNESS_GOAL_TYPE
    }

    /// Delete key. Values compare by their text form, so `"5"` matches `5`.
    pub fn matches_key(&self, kind: &str, value: &str) -> bool {
        self.kind == kind && self.value.to_string() == value
    }
}

/// Qualitative objective that picks the goal-specific suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FitnessGoal {
    #[default]
    FatBurning,
    MuscleBuilding,
    /// Any other text; contributes no goal-specific suggestions.
    Other(String),
}

impl FitnessGoal {
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "fat-burning" => FitnessGoal::FatBurning,
            "muscle-building" => FitnessGoal::MuscleBuilding,
            other => FitnessGoal::Other(other.to_string()),
        }
    }

    /// First goal of type `fitness-goal` wins; none means fat burning.
    pub fn from_goals(goals: &[Goal]) -> Self {
        goals
            .iter()
            .find(|g| g.is_fitness_goal())
            .map(|g| Self::parse(&g.value.to_string()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        match self {
            FitnessGoal::FatBurning => "fat-burning",
            FitnessGoal::MuscleBuilding => "muscle-building",
            FitnessGoal::Other(s) => s,
        }
    }
}
