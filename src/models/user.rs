//! User model for storage and API.

use serde::{Deserialize, Serialize};

use super::lenient;

/// User profile stored under `fitness-users`.
///
/// Email is the unique identifier; uniqueness is checked at signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub gender: String,
    /// Height in centimetres
    #[serde(rename = "height", default, deserialize_with = "lenient::non_negative_u32")]
    pub height_cm: u32,
    /// Weight in kilograms
    #[serde(rename = "weight", default, deserialize_with = "lenient::non_negative_u32")]
    pub weight_kg: u32,
}

impl User {
    /// Weight for calorie estimates, falling back when the profile has none.
    pub fn effective_weight_kg(&self, fallback: f64) -> f64 {
        if self.weight_kg > 0 {
            f64::from(self.weight_kg)
        } else {
            fallback
        }
    }
}
