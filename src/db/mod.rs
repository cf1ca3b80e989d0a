// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record Store: named collections persisted as whole JSON documents.

pub mod file_store;

pub use file_store::FileStore;

/// Collection keys, kept identical to the legacy storage keys.
pub mod collections {
    pub const WORKOUTS: &str = "fitness-workouts";
    pub const FOODS: &str = "fitness-foods";
    /// Step imports from Strava
    pub const STEP_IMPORTS: &str = "fitness-strava";
    pub const GOALS: &str = "fitness-goals";
    pub const USERS: &str = "fitness-users";
    /// Email of the active session (or `null`)
    pub const CURRENT_USER: &str = "current-user";
}

/// Record Store failures. Any failed write leaves the previous document intact.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on collection {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Collection {key} holds malformed JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize collection {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
