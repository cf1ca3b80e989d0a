// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tolerant numeric deserializers for stored documents.
//!
//! Older documents hold numbers as strings ("30"), `null`, or omit the
//! field entirely. All of these read back as zero instead of failing, and
//! negative values are clamped to zero.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    fn to_f64(&self) -> f64 {
        let value = match self {
            RawNumber::Unsigned(n) => *n as f64,
            RawNumber::Float(f) => *f,
            RawNumber::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }
}

fn read<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw.map(|r| r.to_f64()).unwrap_or(0.0))
}

/// Whole number, truncated like `parseInt`.
pub fn non_negative_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(read(deserializer)?.trunc().min(u32::MAX as f64) as u32)
}

pub fn non_negative_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(read(deserializer)?.trunc().min(u64::MAX as f64) as u64)
}

pub fn non_negative_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    read(deserializer)
}
