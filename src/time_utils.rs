// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar dates.

use chrono::{NaiveDate, Utc};

/// Today's calendar date in UTC. Entries without an explicit date get this.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Unix timestamp of midnight UTC at the start of `date`.
pub fn start_of_day_timestamp(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
}
