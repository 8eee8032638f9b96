//! Time breakdown calculation.
//!
//! Decomposes the delta between two instants into display units. The
//! decomposition uses fixed-width divisors (365-day year, 30-day month and
//! day-of-month cycle) rather than calendar arithmetic: a countdown display
//! does not need calendar-accurate months, and fixed divisors keep the
//! function pure and branch-free. Multi-year countdowns drift slightly from
//! a true calendar breakdown; this is an accepted approximation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECOND_MS: u64 = 1000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;
const MONTH_MS: u64 = 30 * DAY_MS;
const YEAR_MS: u64 = 365 * DAY_MS;

/// Structured decomposition of a millisecond delta. All fields are
/// non-negative; the all-zero value is the canonical "completed" state.
///
/// Constructed fresh on every calculation, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl TimeBreakdown {
    /// The canonical "completed" value.
    pub const ZERO: TimeBreakdown = TimeBreakdown {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
    };

    /// True when every field is zero, i.e. the countdown has completed.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Compute the breakdown of `target - now`.
///
/// No ordering precondition: if `target` is not in the future the all-zero
/// breakdown is returned (this signals "completed", not an error).
/// Deterministic given its inputs and free of side effects.
pub fn breakdown(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeBreakdown {
    let diff = target.signed_duration_since(now).num_milliseconds();
    if diff <= 0 {
        return TimeBreakdown::ZERO;
    }
    let d = diff as u64;

    TimeBreakdown {
        years: d / YEAR_MS,
        months: (d / MONTH_MS) % 12,
        days: (d / DAY_MS) % 30,
        hours: (d / HOUR_MS) % 24,
        minutes: (d / MINUTE_MS) % 60,
        seconds: (d / SECOND_MS) % 60,
        milliseconds: d % 1000,
    }
}
